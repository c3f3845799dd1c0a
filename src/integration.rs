//! Composition: the runtime owning the session and the async runner
//! driving it.

pub mod app_runner;
pub mod runtime;

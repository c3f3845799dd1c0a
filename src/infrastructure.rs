//! Infrastructure adapters: configuration, CLI, the Browser Surface seam,
//! and the event-trace harness.

pub mod cli;
pub mod config;
pub mod surface;
pub mod trace;

//! Pure policy functions: error classification, origin containment,
//! gesture recognition. No I/O, no state.

pub mod classify;
pub mod gesture;
pub mod origin;

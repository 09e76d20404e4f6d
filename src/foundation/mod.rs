//! Time, frame-rate and error primitives shared by every module.

/// Seconds, frame indices and frame rates.
pub mod core;
/// Crate error type.
pub mod error;

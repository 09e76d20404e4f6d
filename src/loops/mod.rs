//! Perpetual loops that run from mount until teardown.

/// Loop specs, handles and the per-component driver.
pub mod driver;

//! Trigger-gated reveal schedules.

/// Ordered per-element transitions.
pub mod schedule;
/// Plays a schedule under a one-shot or reversible policy.
pub mod choreographer;
/// Mount timers and visibility observers.
pub mod trigger;

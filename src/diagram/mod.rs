//! Diagrams: shape geometry, reveal choreography and loops composed into
//! activatable nodes.

/// Triangle diagram definition.
pub mod competitor;
/// Helix diagram definition.
pub mod innovation;
/// Mounted diagram lifecycle and frame sampling.
pub mod instance;
/// Demo dialog state.
pub mod modal;
/// Definition-time diagram description.
pub mod spec;

pub use competitor::competitor_mapping;
pub use innovation::innovation_potential;

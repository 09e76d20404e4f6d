//! Virtual-canvas geometry and its projection to anchors.

/// Virtual canvas and anchor projection.
pub mod canvas;
/// Stroke dash patterns.
pub mod dash;
/// Named points, paths and segments.
pub mod shape;
/// The triangle and helix shapes.
pub mod shapes;

//! Frame snapshots as SVG and PNG.

/// SVG to RGBA/PNG rasterization.
pub mod raster;
/// SVG document for one sampled frame.
pub mod svg;

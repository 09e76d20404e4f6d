use crate::{
    foundation::core::{Point, Size, Vec2},
    foundation::error::{ChoreoError, ChoreoResult},
};

/// Fixed abstract coordinate space a shape is authored in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VirtualCanvas {
    pub width: f64,
    pub height: f64,
}

impl VirtualCanvas {
    pub fn new(width: f64, height: f64) -> ChoreoResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn square(side: f64) -> ChoreoResult<Self> {
        Self::new(side, side)
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(ChoreoError::validation(
                "virtual canvas width/height must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Percentage placement of a node's center inside its container.
///
/// Renderers pair this with a `translate(-50%, -50%)` centering transform;
/// [`AnchorPosition::top_left_px`] applies it for pixel-space consumers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnchorPosition {
    pub left_percent: f64,
    pub top_percent: f64,
}

impl AnchorPosition {
    /// Node center in a container of the given pixel size.
    pub fn center_px(self, container: Size) -> Point {
        Point::new(
            self.left_percent / 100.0 * container.width,
            self.top_percent / 100.0 * container.height,
        )
    }

    /// Top-left corner of a node of `node` size, centered on the anchor.
    pub fn top_left_px(self, container: Size, node: Size) -> Point {
        self.center_px(container) - Vec2::new(node.width / 2.0, node.height / 2.0)
    }

    /// Inline style fragment for an absolutely positioned overlay.
    pub fn css(self) -> String {
        format!(
            "left: {:.4}%; top: {:.4}%; transform: translate(-50%, -50%)",
            self.left_percent, self.top_percent
        )
    }
}

/// Map a virtual coordinate to a resolution-independent anchor.
///
/// Total over all finite inputs; points outside the canvas map outside [0, 100].
pub fn project(point: Point, canvas: VirtualCanvas) -> AnchorPosition {
    AnchorPosition {
        left_percent: point.x / canvas.width * 100.0,
        top_percent: point.y / canvas.height * 100.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/canvas.rs"]
mod tests;

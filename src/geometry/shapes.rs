//! The two fixed diagram shapes.

use crate::{
    foundation::core::{BezPath, Line, Point},
    foundation::error::{ChoreoError, ChoreoResult},
    geometry::canvas::VirtualCanvas,
    geometry::shape::{NamedPath, NamedPoint, Segment, ShapeDefinition},
};

pub const TRIANGLE_CANVAS: f64 = 600.0;
pub const HELIX_CANVAS: f64 = 500.0;

pub const TRIANGLE_TOP: &str = "top";
pub const TRIANGLE_BOTTOM_LEFT: &str = "bottom-left";
pub const TRIANGLE_BOTTOM_RIGHT: &str = "bottom-right";

pub const CONNECTOR_LEFT: &str = "connector-left";
pub const CONNECTOR_BASE: &str = "connector-base";
pub const CONNECTOR_RIGHT: &str = "connector-right";

pub const ECOSYSTEM_MAPPING: &str = "ecosystem-mapping";
pub const BENCHMARKING: &str = "benchmarking-best-practices";
pub const DISRUPTION_STRATEGY: &str = "disruption-strategy";

pub const STRAND_A: &str = "strand-a";
pub const STRAND_B: &str = "strand-b";

pub const DATA_SHARING: &str = "data-sharing-research-hubs";
pub const IP_DEVELOPMENT: &str = "ip-development-feedback";
pub const AIML_CO_CREATION: &str = "aiml-solution-co-creation";

pub const CROSS_BAR_COUNT: usize = 7;

const STRAND_A_D: &str = "M 250 450 C 200 420, 200 380, 250 350 C 300 320, 300 280, 250 250 \
     C 200 220, 200 180, 250 150 C 300 120, 300 80, 250 50";
const STRAND_B_D: &str = "M 250 450 C 300 420, 300 380, 250 350 C 200 320, 200 280, 250 250 \
     C 300 220, 300 180, 250 150 C 200 120, 200 80, 250 50";

fn named(id: &str, x: f64, y: f64) -> NamedPoint {
    NamedPoint {
        id: id.to_string(),
        point: Point::new(x, y),
    }
}

fn segment(id: impl Into<String>, a: Point, b: Point) -> Segment {
    Segment {
        id: id.into(),
        line: Line::new(a, b),
    }
}

/// Id of the `i`-th helix cross-bar, bottom to top.
pub fn cross_bar_id(i: usize) -> String {
    format!("cross-bar-{i}")
}

/// Triangle on a 600×600 canvas with dashed connectors between its corners.
///
/// Node anchors sit outside the corners so labels clear the outline.
pub fn triangle() -> ChoreoResult<ShapeDefinition> {
    let top = Point::new(300.0, 100.0);
    let bottom_left = Point::new(100.0, 450.0);
    let bottom_right = Point::new(500.0, 450.0);

    let shape = ShapeDefinition {
        name: "triangle".to_string(),
        canvas: VirtualCanvas::square(TRIANGLE_CANVAS)?,
        corners: vec![
            NamedPoint {
                id: TRIANGLE_TOP.to_string(),
                point: top,
            },
            NamedPoint {
                id: TRIANGLE_BOTTOM_LEFT.to_string(),
                point: bottom_left,
            },
            NamedPoint {
                id: TRIANGLE_BOTTOM_RIGHT.to_string(),
                point: bottom_right,
            },
        ],
        anchors: vec![
            named(ECOSYSTEM_MAPPING, top.x - 50.0, top.y),
            named(BENCHMARKING, bottom_left.x - 70.0, bottom_left.y - 30.0),
            named(DISRUPTION_STRATEGY, bottom_right.x - 70.0, bottom_right.y - 30.0),
        ],
        paths: Vec::new(),
        segments: vec![
            segment(CONNECTOR_LEFT, top, bottom_left),
            segment(CONNECTOR_BASE, bottom_left, bottom_right),
            segment(CONNECTOR_RIGHT, bottom_right, top),
        ],
    };
    shape.validate()?;
    Ok(shape)
}

/// Double helix on a 500×500 canvas: two strands and seven cross-bars.
///
/// Bars alternate direction so the dash draw-in sweeps left/right in turn.
pub fn helix() -> ChoreoResult<ShapeDefinition> {
    let strand = |id: &str, d: &str| -> ChoreoResult<NamedPath> {
        let path = BezPath::from_svg(d)
            .map_err(|e| ChoreoError::validation(format!("strand '{id}' path data: {e}")))?;
        Ok(NamedPath {
            id: id.to_string(),
            path,
        })
    };

    let segments = (0..CROSS_BAR_COUNT)
        .map(|i| {
            let y = 400.0 - 50.0 * i as f64;
            let (x1, x2) = if i % 2 == 0 {
                (220.0, 280.0)
            } else {
                (280.0, 220.0)
            };
            segment(cross_bar_id(i), Point::new(x1, y), Point::new(x2, y))
        })
        .collect();

    let shape = ShapeDefinition {
        name: "helix".to_string(),
        canvas: VirtualCanvas::square(HELIX_CANVAS)?,
        corners: Vec::new(),
        anchors: vec![
            named(DATA_SHARING, 450.0, 50.0),
            named(IP_DEVELOPMENT, 25.0, 225.0),
            named(AIML_CO_CREATION, 25.0, 425.0),
        ],
        paths: vec![strand(STRAND_A, STRAND_A_D)?, strand(STRAND_B, STRAND_B_D)?],
        segments,
    };
    shape.validate()?;
    Ok(shape)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;

use std::collections::BTreeSet;

use kurbo::ParamCurveArclen as _;

use crate::{
    foundation::core::{BezPath, Line, Point},
    foundation::error::{ChoreoError, ChoreoResult},
    geometry::canvas::{AnchorPosition, VirtualCanvas, project},
};

// Arc length accuracy in virtual canvas units.
const ARCLEN_ACCURACY: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedPoint {
    pub id: String,
    pub point: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedPath {
    pub id: String,
    pub path: BezPath,
}

impl NamedPath {
    /// Approximate rendered length of the path in virtual units.
    pub fn length(&self) -> f64 {
        self.path
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub id: String,
    pub line: Line,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.line.length()
    }
}

/// Design-time geometry of one diagram, in virtual canvas coordinates.
///
/// `corners` define the outline (and the centroid), `anchors` are where
/// interactive nodes sit, `paths` and `segments` are the stroked parts.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDefinition {
    pub name: String,
    pub canvas: VirtualCanvas,
    pub corners: Vec<NamedPoint>,
    pub anchors: Vec<NamedPoint>,
    pub paths: Vec<NamedPath>,
    pub segments: Vec<Segment>,
}

impl ShapeDefinition {
    pub fn validate(&self) -> ChoreoResult<()> {
        self.canvas.validate()?;

        let mut ids = BTreeSet::new();
        let all_ids = self
            .corners
            .iter()
            .chain(&self.anchors)
            .map(|p| p.id.as_str())
            .chain(self.paths.iter().map(|p| p.id.as_str()))
            .chain(self.segments.iter().map(|s| s.id.as_str()));
        for id in all_ids {
            if id.trim().is_empty() {
                return Err(ChoreoError::validation(format!(
                    "shape '{}' has an element with an empty id",
                    self.name
                )));
            }
            if !ids.insert(id) {
                return Err(ChoreoError::validation(format!(
                    "shape '{}' has duplicate element id '{id}'",
                    self.name
                )));
            }
        }

        for p in self.corners.iter().chain(&self.anchors) {
            if !p.point.is_finite() {
                return Err(ChoreoError::validation(format!(
                    "shape '{}' point '{}' is not finite",
                    self.name, p.id
                )));
            }
        }
        Ok(())
    }

    /// Arithmetic mean of the corner points; `None` for shapes without corners.
    pub fn centroid(&self) -> Option<Point> {
        if self.corners.is_empty() {
            return None;
        }
        let n = self.corners.len() as f64;
        let (sx, sy) = self
            .corners
            .iter()
            .fold((0.0, 0.0), |(x, y), c| (x + c.point.x, y + c.point.y));
        Some(Point::new(sx / n, sy / n))
    }

    pub fn corner(&self, id: &str) -> Option<Point> {
        self.corners.iter().find(|c| c.id == id).map(|c| c.point)
    }

    pub fn anchor(&self, id: &str) -> Option<Point> {
        self.anchors.iter().find(|a| a.id == id).map(|a| a.point)
    }

    pub fn path(&self, id: &str) -> Option<&NamedPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn segment(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Stroke length of a path or segment by id.
    pub fn stroke_length(&self, id: &str) -> Option<f64> {
        self.path(id)
            .map(NamedPath::length)
            .or_else(|| self.segment(id).map(Segment::length))
    }

    /// Projected placement of a named anchor.
    pub fn project_anchor(&self, id: &str) -> Option<AnchorPosition> {
        self.anchor(id).map(|p| project(p, self.canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shape.rs"]
mod tests;

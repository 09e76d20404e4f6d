use std::collections::BTreeSet;

use crate::{
    foundation::error::{ChoreoError, ChoreoResult},
    geometry::{dash::DashPattern, shape::ShapeDefinition},
    loops::driver::LoopSpec,
    navigation::destination::Destination,
    reveal::{choreographer::RevealPolicy, schedule::RevealSchedule},
};

/// Which signal starts a diagram's reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TriggerKind {
    /// Fires on the first tick after mount; step delays count from mount.
    MountTimer,
    /// Fires when the section's intersection ratio reaches `threshold`.
    Visibility { threshold: f64 },
}

/// An interactive node placed at a shape anchor of the same id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeLink {
    pub id: String,
    /// Opaque icon name handed to the icon renderer.
    pub icon: String,
    pub label: String,
    pub destination: Destination,
}

impl NodeLink {
    pub fn new(id: &str, icon: &str, label: &str, destination: &str) -> Self {
        Self {
            id: id.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
            destination: Destination::new(destination),
        }
    }
}

/// A stroked element drawn along one of the shape's paths or segments.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub element: String,
    pub geometry: String,
    pub dash: Option<DashPattern>,
    pub width: f64,
}

impl Stroke {
    pub fn new(element: impl Into<String>, geometry: impl Into<String>, width: f64) -> Self {
        Self {
            element: element.into(),
            geometry: geometry.into(),
            dash: None,
            width,
        }
    }

    pub fn dashed(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// Everything fixed at definition time for one diagram.
#[derive(Clone, Debug)]
pub struct DiagramSpec {
    pub name: String,
    pub shape: ShapeDefinition,
    pub trigger: TriggerKind,
    pub policy: RevealPolicy,
    pub schedule: RevealSchedule,
    pub loops: Vec<LoopSpec>,
    pub strokes: Vec<Stroke>,
    pub nodes: Vec<NodeLink>,
    /// Text drawn at the shape's centroid.
    pub center_label: Option<String>,
}

impl DiagramSpec {
    pub fn validate(&self) -> ChoreoResult<()> {
        self.shape.validate()?;
        self.schedule.validate()?;

        if let TriggerKind::Visibility { threshold } = self.trigger
            && !(0.0..=1.0).contains(&threshold)
        {
            return Err(ChoreoError::validation(format!(
                "diagram '{}' visibility threshold must be within [0, 1]",
                self.name
            )));
        }

        let mut ids = BTreeSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(ChoreoError::validation(format!(
                    "diagram '{}' has duplicate node '{}'",
                    self.name, node.id
                )));
            }
            if self.shape.anchor(&node.id).is_none() {
                return Err(ChoreoError::validation(format!(
                    "node '{}' has no anchor in shape '{}'",
                    node.id, self.shape.name
                )));
            }
        }

        for stroke in &self.strokes {
            if self.shape.stroke_length(&stroke.geometry).is_none() {
                return Err(ChoreoError::validation(format!(
                    "stroke '{}' references unknown geometry '{}'",
                    stroke.element, stroke.geometry
                )));
            }
            if !(stroke.width.is_finite() && stroke.width > 0.0) {
                return Err(ChoreoError::validation(format!(
                    "stroke '{}' width must be > 0",
                    stroke.element
                )));
            }
        }

        if self.center_label.is_some() && self.shape.centroid().is_none() {
            return Err(ChoreoError::validation(format!(
                "diagram '{}' has a center label but its shape has no corners",
                self.name
            )));
        }
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&NodeLink> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Every element id with visual state: reveal targets first, then
    /// loop-only targets, in definition order.
    pub fn elements(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.schedule
            .targets()
            .into_iter()
            .chain(self.loops.iter().map(|l| l.target.as_str()))
            .chain(self.strokes.iter().map(|s| s.element.as_str()))
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/spec.rs"]
mod tests;

//! Choreo drives the animated diagram sections of a landing page.
//!
//! Shapes are defined once in a fixed virtual canvas and projected to
//! percentage anchors. Each mounted [`Diagram`] owns one reveal lifecycle,
//! gated by a pluggable trigger, and a set of perpetual loops started at
//! mount. Everything is a pure function of the host-supplied clock:
//!
//! - Build a [`DiagramSpec`] (or use [`competitor_mapping`] / [`innovation_potential`])
//! - [`Diagram::mount`] it, feed visibility samples, [`Diagram::tick`]
//! - Sample a [`DiagramFrame`] and render it, or [`Diagram::activate`] a node
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod diagram;
pub mod foundation;
pub mod geometry;
pub mod loops;
pub mod navigation;
pub mod render;
pub mod reveal;

pub use crate::animation::{ease::Ease, state::Property, state::VisualState, transition::Transition};
pub use crate::config::HostConfig;
pub use crate::diagram::{
    competitor_mapping, innovation_potential,
    instance::{Diagram, DiagramFrame, DiagramState, NodeFrame},
    spec::{DiagramSpec, NodeLink, TriggerKind},
};
pub use crate::foundation::core::{Fps, FrameIndex, Point, Seconds, Size, Vec2};
pub use crate::foundation::error::{ChoreoError, ChoreoResult};
pub use crate::geometry::canvas::{AnchorPosition, VirtualCanvas, project};
pub use crate::loops::driver::{LoopDriver, LoopHandle, LoopSpec};
pub use crate::navigation::destination::{Destination, Navigator, RecordingNavigator};
pub use crate::reveal::{
    choreographer::{Choreographer, RevealPhase, RevealPolicy},
    schedule::{RevealSchedule, RevealStep},
    trigger::{MountTimer, RevealTrigger, TriggerEvent, VisibilityTrigger},
};

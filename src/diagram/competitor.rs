//! "Competitor mapping": triangle of three linked nodes.

use crate::{
    animation::{ease::Ease, ops::stagger, state::Property, state::VisualState, transition::Transition},
    diagram::spec::{DiagramSpec, NodeLink, Stroke, TriggerKind},
    foundation::error::ChoreoResult,
    geometry::{
        dash::DashPattern,
        shapes::{
            BENCHMARKING, CONNECTOR_BASE, CONNECTOR_LEFT, CONNECTOR_RIGHT, DISRUPTION_STRATEGY,
            ECOSYSTEM_MAPPING, triangle,
        },
    },
    loops::driver::LoopSpec,
    reveal::{
        choreographer::RevealPolicy,
        schedule::{RevealSchedule, RevealStep},
    },
};

pub const NAME: &str = "competitor-mapping";

pub const TITLE_LINES: [&str; 2] = ["title-competitor", "title-mapping"];
pub const UNDERLINE: &str = "title-underline";

/// Delay from mount before the corner nodes spring in.
pub const NODE_ENTRANCE_DELAY: f64 = 2.8;

const CONNECTORS: [&str; 3] = [CONNECTOR_LEFT, CONNECTOR_BASE, CONNECTOR_RIGHT];

pub fn competitor_mapping() -> ChoreoResult<DiagramSpec> {
    let shape = triangle()?;

    let mut steps: Vec<RevealStep> = TITLE_LINES
        .iter()
        .zip(stagger(TITLE_LINES.len(), 0.0, 0.2))
        .map(|(line, delay)| {
            RevealStep::new(
                *line,
                delay,
                Transition::tween(0.8, Ease::EASE_OUT),
                VisualState::hidden().with_translate(-100.0, 0.0),
                VisualState::default(),
            )
        })
        .collect();

    steps.push(RevealStep::new(
        UNDERLINE,
        0.5,
        Transition::tween(1.0, Ease::EASE_OUT),
        VisualState::hidden().with_extent(0.0),
        VisualState::default(),
    ));

    let nodes = [
        NodeLink::new(
            ECOSYSTEM_MAPPING,
            "link",
            "Ecosystem mapping",
            "/competitor-mapping/ecosystem-mapping",
        ),
        NodeLink::new(
            BENCHMARKING,
            "user",
            "Benchmarking best practices",
            "/competitor-mapping/benchmarking-best-practices",
        ),
        NodeLink::new(
            DISRUPTION_STRATEGY,
            "line-chart",
            "Disruption strategy with foresight analytic",
            "/competitor-mapping/disruption-strategy",
        ),
    ];

    steps.extend(nodes.iter().map(|node| {
        RevealStep::new(
            node.id.as_str(),
            NODE_ENTRANCE_DELAY,
            Transition::spring(100.0, 10.0),
            VisualState::hidden().with_scale(0.5),
            VisualState::default(),
        )
    }));

    let mut loops: Vec<LoopSpec> = CONNECTORS
        .iter()
        .map(|c| LoopSpec::new(*c, Property::DashOffset, vec![0.0, -40.0], 1.2, Ease::Linear))
        .collect();
    for node in &nodes {
        loops.push(LoopSpec::new(
            node.id.as_str(),
            Property::Scale,
            vec![1.0, 1.04, 1.0],
            2.0,
            Ease::EASE_IN_OUT,
        ));
        loops.push(LoopSpec::new(
            node.id.as_str(),
            Property::Opacity,
            vec![0.9, 1.0, 0.9],
            2.0,
            Ease::EASE_IN_OUT,
        ));
    }

    let strokes = CONNECTORS
        .iter()
        .map(|c| Stroke::new(*c, *c, 3.0).dashed(DashPattern::new(24.0, 16.0)))
        .collect();

    let spec = DiagramSpec {
        name: NAME.to_string(),
        shape,
        trigger: TriggerKind::MountTimer,
        policy: RevealPolicy::OneShot,
        schedule: RevealSchedule::new(steps)?,
        loops,
        strokes,
        nodes: nodes.into(),
        center_label: Some("COMPETITOR".to_string()),
    };
    spec.validate()?;
    Ok(spec)
}

//! "Innovation potential": double helix revealed when scrolled into view.

use crate::{
    animation::{ease::Ease, ops::stagger, state::Property, state::VisualState, transition::Transition},
    diagram::spec::{DiagramSpec, NodeLink, Stroke, TriggerKind},
    foundation::error::ChoreoResult,
    geometry::{
        dash::DashPattern,
        shapes::{
            AIML_CO_CREATION, CROSS_BAR_COUNT, DATA_SHARING, IP_DEVELOPMENT, STRAND_A, STRAND_B,
            cross_bar_id, helix,
        },
    },
    loops::driver::LoopSpec,
    reveal::{
        choreographer::RevealPolicy,
        schedule::{RevealSchedule, RevealStep},
        trigger::DEFAULT_VISIBILITY_THRESHOLD,
    },
};

pub const NAME: &str = "innovation-potential";

pub const GLOW_A: &str = "glow-a";
pub const GLOW_B: &str = "glow-b";

/// Offset that hides a drawn-in strand.
pub const STRAND_HIDDEN_OFFSET: f64 = 1000.0;
pub const STRAND_DURATION: f64 = 2.0;
pub const BAR_HIDDEN_OFFSET: f64 = 100.0;
pub const BAR_DURATION: f64 = 0.5;
pub const CALLOUT_DURATION: f64 = 0.8;
/// Vertical offset callouts rise from.
pub const CALLOUT_RISE: f64 = 16.0;
pub const CALLOUT_DELAYS: [f64; 3] = [2.5, 2.7, 2.9];

/// Delay of the `i`-th cross-bar: `2 + i * 0.1`.
pub fn bar_delays() -> Vec<f64> {
    stagger(CROSS_BAR_COUNT, 2.0, 0.1)
}

pub fn innovation_potential() -> ChoreoResult<DiagramSpec> {
    let shape = helix()?;

    let glow_on = VisualState::hidden().with_opacity(0.3);
    let mut steps = vec![
        RevealStep::new(GLOW_A, 0.0, Transition::Instant, VisualState::hidden(), glow_on),
        RevealStep::new(GLOW_B, 0.0, Transition::Instant, VisualState::hidden(), glow_on),
    ];

    let strand_hidden = VisualState::hidden().with_dash_offset(STRAND_HIDDEN_OFFSET);
    for (strand, delay) in [(STRAND_A, 0.0), (STRAND_B, 0.3)] {
        steps.push(RevealStep::new(
            strand,
            delay,
            Transition::tween(STRAND_DURATION, Ease::STANDARD),
            strand_hidden,
            VisualState::default(),
        ));
    }

    let bar_hidden = VisualState::hidden().with_dash_offset(BAR_HIDDEN_OFFSET);
    for (i, delay) in bar_delays().into_iter().enumerate() {
        steps.push(RevealStep::new(
            cross_bar_id(i),
            delay,
            Transition::tween(BAR_DURATION, Ease::STANDARD),
            bar_hidden,
            VisualState::default(),
        ));
    }

    let nodes = [
        NodeLink::new(
            DATA_SHARING,
            "lightbulb",
            "Data sharing & research hubs",
            "/innovation-potential/data-sharing-research-hubs",
        ),
        NodeLink::new(
            IP_DEVELOPMENT,
            "IP",
            "IP development & innovation loop feedback",
            "/innovation-potential/ip-development-feedback",
        ),
        NodeLink::new(
            AIML_CO_CREATION,
            "Ω",
            "AI/ML powered solution co-creation",
            "/innovation-potential/aiml-solution-co-creation",
        ),
    ];

    let callout_hidden = VisualState::hidden().with_translate(0.0, CALLOUT_RISE);
    for (node, delay) in nodes.iter().zip(CALLOUT_DELAYS) {
        steps.push(RevealStep::new(
            node.id.as_str(),
            delay,
            Transition::tween(CALLOUT_DURATION, Ease::STANDARD),
            callout_hidden,
            VisualState::default(),
        ));
    }

    let loops = vec![
        LoopSpec::new(GLOW_A, Property::Opacity, vec![1.0, 0.5, 1.0], 2.0, Ease::PULSE),
        LoopSpec::new(GLOW_B, Property::Opacity, vec![1.0, 0.5, 1.0], 2.0, Ease::PULSE)
            .with_delay(0.5),
    ];

    let mut strokes = vec![
        Stroke::new(GLOW_A, STRAND_A, 15.0),
        Stroke::new(GLOW_B, STRAND_B, 15.0),
    ];
    for strand in [STRAND_A, STRAND_B] {
        let len = shape.stroke_length(strand).unwrap_or(STRAND_HIDDEN_OFFSET);
        strokes.push(Stroke::new(strand, strand, 3.0).dashed(DashPattern::draw_in(len)));
    }
    for i in 0..CROSS_BAR_COUNT {
        let id = cross_bar_id(i);
        strokes.push(
            Stroke::new(id.as_str(), id.as_str(), 2.0)
                .dashed(DashPattern::new(BAR_HIDDEN_OFFSET, BAR_HIDDEN_OFFSET)),
        );
    }

    let spec = DiagramSpec {
        name: NAME.to_string(),
        shape,
        trigger: TriggerKind::Visibility {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
        },
        policy: RevealPolicy::Reversible,
        schedule: RevealSchedule::new(steps)?,
        loops,
        strokes,
        nodes: nodes.into(),
        center_label: None,
    };
    spec.validate()?;
    Ok(spec)
}

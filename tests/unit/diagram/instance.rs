use super::*;
use crate::{
    animation::{ease::Ease, state::Property},
    diagram::{competitor_mapping, innovation_potential},
    geometry::shapes::{CONNECTOR_LEFT, DATA_SHARING, ECOSYSTEM_MAPPING},
    navigation::destination::RecordingNavigator,
};

fn triangle(now: f64) -> Diagram {
    Diagram::mount(competitor_mapping().unwrap(), &HostConfig::default(), now).unwrap()
}

fn helix(config: &HostConfig) -> Diagram {
    Diagram::mount(innovation_potential().unwrap(), config, 0.0).unwrap()
}

#[test]
fn mount_timer_starts_reveal_at_mount() {
    let d = triangle(1.0);
    assert_eq!(d.state(), DiagramState::Revealing);
    assert_eq!(d.choreographer().plays(), 1);
    assert_eq!(d.loop_handles().len(), 9);
}

#[test]
fn visibility_diagram_waits_for_observer() {
    let mut d = helix(&HostConfig::default());
    assert_eq!(d.state(), DiagramState::Mounted);
    assert_eq!(d.loops().len(), 2, "glow pulses run before reveal");
    d.observe_visibility(0.1, 0.5);
    assert_eq!(d.state(), DiagramState::Mounted);
    d.observe_visibility(0.3, 1.0);
    assert_eq!(d.state(), DiagramState::Revealing);
    assert_eq!(d.tick(10.0), DiagramState::RevealComplete);
}

#[test]
fn missing_observer_renders_final_state() {
    let cfg = HostConfig {
        intersection_observer: false,
        ..HostConfig::default()
    };
    let d = helix(&cfg);
    assert!(!d.trigger().is_supported());
    assert_eq!(d.state(), DiagramState::RevealComplete);
    let f = d.frame(0.0);
    assert_eq!(f.node(DATA_SHARING).unwrap().state.opacity, 1.0);
    assert_eq!(d.loops().len(), 2, "loops still run without an observer");
}

#[test]
fn disabled_animations_render_static() {
    let cfg = HostConfig {
        animations: false,
        ..HostConfig::default()
    };
    let d = Diagram::mount(competitor_mapping().unwrap(), &cfg, 0.0).unwrap();
    assert!(d.loops().is_empty());
    let f = d.frame(0.0);
    let node = f.node(ECOSYSTEM_MAPPING).unwrap();
    assert_eq!(node.state.scale, 1.0);
    assert!((node.state.opacity - 0.9).abs() < 1e-12, "rests at first pulse keyframe");
    assert_eq!(f.element(CONNECTOR_LEFT).unwrap().dash_offset, 0.0);
}

#[test]
fn threshold_override_comes_from_config() {
    let cfg = HostConfig {
        visibility_threshold: Some(0.6),
        ..HostConfig::default()
    };
    let mut d = helix(&cfg);
    d.observe_visibility(0.5, 0.0);
    assert_eq!(d.state(), DiagramState::Mounted);
    d.observe_visibility(0.6, 0.0);
    assert_eq!(d.state(), DiagramState::Revealing);
}

#[test]
fn loop_that_fails_to_start_rests_at_base_value() {
    let mut spec = competitor_mapping().unwrap();
    spec.loops.push(LoopSpec::new(
        CONNECTOR_LEFT,
        Property::Opacity,
        vec![0.5, 1.0],
        0.0,
        Ease::Linear,
    ));
    let d = Diagram::mount(spec, &HostConfig::default(), 0.0).unwrap();
    assert_eq!(d.loop_handles().len(), 9);
    let s = d.element_state(CONNECTOR_LEFT, 0.0).unwrap();
    assert_eq!(s.opacity, 0.5);
}

#[test]
fn hover_and_focus_are_reported_per_node() {
    let mut d = triangle(0.0);
    assert!(d.set_hover(Some(ECOSYSTEM_MAPPING)));
    assert!(!d.set_focus(Some("missing")));
    let f = d.frame(0.0);
    assert!(f.node(ECOSYSTEM_MAPPING).unwrap().hovered);
    assert!(f.nodes.iter().all(|n| !n.focused));
    assert!(d.set_hover(None));
    assert!(!d.frame(0.0).node(ECOSYSTEM_MAPPING).unwrap().hovered);
}

#[test]
fn activation_of_unknown_node_fails_without_navigating() {
    let d = triangle(0.0);
    let mut nav = RecordingNavigator::new();
    assert!(d.activate("nope", &mut nav).is_err());
    assert!(nav.requests().is_empty());
}

#[test]
fn unmount_cancels_loops_and_releases_trigger() {
    let mut d = helix(&HostConfig::default());
    d.unmount();
    assert_eq!(d.state(), DiagramState::Unmounted);
    assert!(d.loops().is_empty());

    d.observe_visibility(1.0, 1.0);
    assert_eq!(d.tick(2.0), DiagramState::Unmounted);
    assert_eq!(d.choreographer().plays(), 0);

    d.unmount();
    let mut nav = RecordingNavigator::new();
    assert!(d.activate(DATA_SHARING, &mut nav).is_err());
}

#[test]
fn unknown_elements_have_no_state() {
    let d = triangle(0.0);
    assert!(d.element_state("nothing", 0.0).is_none());
    assert!(d.element_state(CONNECTOR_LEFT, 0.0).is_some());
}

#[test]
fn demo_modal_starts_closed() {
    let mut d = triangle(0.0);
    assert!(!d.modal().is_open());
    d.modal_mut().open();
    d.modal_mut().close();
    assert!(!d.modal().is_open());
}

#[test]
fn frame_serializes_to_json() {
    let d = triangle(0.0);
    let json = serde_json::to_value(d.frame(3.0)).unwrap();
    assert_eq!(json["diagram"], "competitor-mapping");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    assert!(json["center_label"]["top_percent"].as_f64().unwrap() > 55.0);
}

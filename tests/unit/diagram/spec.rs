use super::*;
use crate::diagram::{competitor_mapping, innovation_potential};

#[test]
fn built_in_diagrams_validate() {
    competitor_mapping().unwrap().validate().unwrap();
    innovation_potential().unwrap().validate().unwrap();
}

#[test]
fn elements_list_reveal_targets_before_loop_only_targets() {
    let spec = competitor_mapping().unwrap();
    let elements = spec.elements();
    assert_eq!(elements[0], "title-competitor");
    assert_eq!(elements.last().copied(), Some("connector-right"));
    let mut unique = elements.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), elements.len());
}

#[test]
fn node_without_anchor_is_rejected() {
    let mut spec = competitor_mapping().unwrap();
    spec.nodes.push(NodeLink::new("floating", "x", "Floating", "/x"));
    assert!(spec.validate().is_err());
}

#[test]
fn duplicate_nodes_are_rejected() {
    let mut spec = innovation_potential().unwrap();
    let dup = spec.nodes[0].clone();
    spec.nodes.push(dup);
    assert!(spec.validate().is_err());
}

#[test]
fn stroke_on_unknown_geometry_is_rejected() {
    let mut spec = innovation_potential().unwrap();
    spec.strokes.push(Stroke::new("ghost", "nowhere", 1.0));
    assert!(spec.validate().is_err());
}

#[test]
fn center_label_needs_corners() {
    let mut spec = innovation_potential().unwrap();
    spec.center_label = Some("HELIX".to_string());
    assert!(spec.validate().is_err());
}

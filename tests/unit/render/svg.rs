use super::*;
use crate::{
    config::HostConfig,
    diagram::{competitor_mapping, innovation_potential, instance::Diagram},
};

#[test]
fn triangle_frame_draws_connectors_nodes_and_label() {
    let d = Diagram::mount(competitor_mapping().unwrap(), &HostConfig::default(), 0.0).unwrap();
    let svg = render_svg(&d.frame(6.0), d.spec());

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 600 600""#));
    assert_eq!(svg.matches("<path ").count(), 3);
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert!(svg.contains(r#"stroke-dasharray="24 16""#));
    assert!(svg.contains(">COMPETITOR</text>"));
    assert!(svg.contains(r#"id="connector-base" d="M100,450 L500,450""#));
}

#[test]
fn hidden_helix_strands_are_offset_out_of_view() {
    let d = Diagram::mount(innovation_potential().unwrap(), &HostConfig::default(), 0.0).unwrap();
    let svg = render_svg(&d.frame(0.0), d.spec());
    assert!(svg.contains(r#"stroke-dashoffset="1000""#));
    assert!(!svg.contains("<text"));
    assert!(svg.contains(r#"id="strand-a""#));
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(300.0), "300");
    assert_eq!(num(0.25), "0.25");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(333.33333), "333.333");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape(r#"A & "B" <c>"#), "A &amp; &quot;B&quot; &lt;c&gt;");
}

use std::fmt::Write as _;

use crate::{
    diagram::{instance::DiagramFrame, spec::DiagramSpec},
    foundation::core::Point,
    geometry::canvas::AnchorPosition,
};

const BACKGROUND: &str = "#0f172a";
const STROKE: &str = "#4A90E2";
const NODE_FILL: &str = "#111827";
const NODE_RING: &str = "#60a5fa";
const NODE_RADIUS: f64 = 24.0;

/// Render a sampled frame as a standalone SVG document in virtual canvas units.
///
/// Strokes carry their dash pattern and offset, nodes are drawn as discs at
/// their anchors. Elements that live outside the diagram canvas (titles,
/// underline) are not drawn.
pub fn render_svg(frame: &DiagramFrame, spec: &DiagramSpec) -> String {
    let canvas = spec.shape.canvas;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(canvas.width),
        h = num(canvas.height),
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{BACKGROUND}"/>"#
    );

    for stroke in &spec.strokes {
        let Some(state) = frame.element(&stroke.element) else {
            continue;
        };
        let Some(d) = path_data(spec, &stroke.geometry) else {
            continue;
        };
        let _ = write!(
            out,
            r#"  <path id="{id}" d="{d}" fill="none" stroke="{STROKE}" stroke-width="{w}" stroke-linecap="round" opacity="{o}""#,
            id = escape(&stroke.element),
            w = num(stroke.width),
            o = num(state.opacity),
        );
        if let Some(dash) = stroke.dash {
            let _ = write!(
                out,
                r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
                dash.svg_array(),
                num(state.dash_offset)
            );
        }
        out.push_str("/>\n");
    }

    if let (Some(label), Some(anchor)) = (&spec.center_label, frame.center_label) {
        let p = to_virtual(anchor, canvas.width, canvas.height);
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="30" font-weight="bold" fill="white">{}</text>"#,
            num(p.x),
            num(p.y),
            escape(label)
        );
    }

    for node in &frame.nodes {
        let p = to_virtual(node.anchor, canvas.width, canvas.height)
            + node.state.translate;
        let ring = if node.hovered || node.focused { 3.0 } else { 2.0 };
        let _ = writeln!(
            out,
            r#"  <circle id="{id}" cx="{x}" cy="{y}" r="{r}" fill="{NODE_FILL}" stroke="{NODE_RING}" stroke-width="{ring}" opacity="{o}"/>"#,
            id = escape(&node.id),
            x = num(p.x),
            y = num(p.y),
            r = num(NODE_RADIUS * node.state.scale.max(0.0)),
            ring = num(ring),
            o = num(node.state.opacity),
        );
    }

    out.push_str("</svg>\n");
    out
}

fn path_data(spec: &DiagramSpec, geometry: &str) -> Option<String> {
    if let Some(path) = spec.shape.path(geometry) {
        return Some(path.path.to_svg());
    }
    spec.shape.segment(geometry).map(|s| {
        format!(
            "M{},{} L{},{}",
            num(s.line.p0.x),
            num(s.line.p0.y),
            num(s.line.p1.x),
            num(s.line.p1.y)
        )
    })
}

fn to_virtual(anchor: AnchorPosition, width: f64, height: f64) -> Point {
    Point::new(
        anchor.left_percent / 100.0 * width,
        anchor.top_percent / 100.0 * height,
    )
}

fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;

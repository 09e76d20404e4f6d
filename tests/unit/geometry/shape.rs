use super::*;

fn square_shape() -> ShapeDefinition {
    ShapeDefinition {
        name: "square".to_string(),
        canvas: VirtualCanvas::square(100.0).unwrap(),
        corners: vec![
            NamedPoint {
                id: "a".to_string(),
                point: Point::new(0.0, 0.0),
            },
            NamedPoint {
                id: "b".to_string(),
                point: Point::new(100.0, 0.0),
            },
            NamedPoint {
                id: "c".to_string(),
                point: Point::new(100.0, 100.0),
            },
            NamedPoint {
                id: "d".to_string(),
                point: Point::new(0.0, 100.0),
            },
        ],
        anchors: vec![NamedPoint {
            id: "label".to_string(),
            point: Point::new(25.0, 75.0),
        }],
        paths: Vec::new(),
        segments: vec![Segment {
            id: "edge".to_string(),
            line: Line::new((0.0, 0.0), (30.0, 40.0)),
        }],
    }
}

#[test]
fn centroid_is_mean_of_corners() {
    let shape = square_shape();
    assert_eq!(shape.centroid(), Some(Point::new(50.0, 50.0)));

    let mut empty = shape;
    empty.corners.clear();
    assert_eq!(empty.centroid(), None);
}

#[test]
fn lookups_and_projection() {
    let shape = square_shape();
    shape.validate().unwrap();
    assert_eq!(shape.corner("c"), Some(Point::new(100.0, 100.0)));
    assert!(shape.corner("zz").is_none());

    let anchor = shape.project_anchor("label").unwrap();
    assert_eq!(anchor.left_percent, 25.0);
    assert_eq!(anchor.top_percent, 75.0);

    assert!((shape.stroke_length("edge").unwrap() - 50.0).abs() < 1e-9);
    assert!(shape.stroke_length("label").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut shape = square_shape();
    shape.anchors[0].id = "a".to_string();
    assert!(shape.validate().is_err());
}

#[test]
fn non_finite_points_are_rejected() {
    let mut shape = square_shape();
    shape.corners[0].point = Point::new(f64::NAN, 0.0);
    assert!(shape.validate().is_err());
}

#[test]
fn path_length_of_straight_bezier_matches_distance() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((3.0, 4.0));
    path.line_to((3.0, 14.0));
    let named = NamedPath {
        id: "p".to_string(),
        path,
    };
    assert!((named.length() - 15.0).abs() < 1e-6);
}

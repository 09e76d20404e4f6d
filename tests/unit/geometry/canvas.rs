use super::*;

#[test]
fn projection_is_a_percentage_of_the_canvas() {
    let canvas = VirtualCanvas::square(600.0).unwrap();
    let a = project(Point::new(300.0, 100.0), canvas);
    assert!((a.left_percent - 50.0).abs() < 1e-12);
    assert!((a.top_percent - 100.0 / 6.0).abs() < 1e-12);
}

#[test]
fn in_canvas_points_project_into_unit_range() {
    let canvas = VirtualCanvas::new(500.0, 400.0).unwrap();
    for x in [0.0, 1.0, 125.0, 250.0, 499.0, 500.0] {
        for y in [0.0, 3.0, 200.0, 400.0] {
            let p = Point::new(x, y);
            assert!(canvas.contains(p));
            let a = project(p, canvas);
            assert!((0.0..=100.0).contains(&a.left_percent));
            assert!((0.0..=100.0).contains(&a.top_percent));
        }
    }
}

#[test]
fn anchor_percentages_do_not_depend_on_container_size() {
    let canvas = VirtualCanvas::square(600.0).unwrap();
    let anchor = project(Point::new(250.0, 100.0), canvas);

    for side in [320.0, 600.0, 1280.0] {
        let container = Size::new(side, side);
        let center = anchor.center_px(container);
        let back = AnchorPosition {
            left_percent: center.x / container.width * 100.0,
            top_percent: center.y / container.height * 100.0,
        };
        assert!((back.left_percent - anchor.left_percent).abs() < 1e-9);
        assert!((back.top_percent - anchor.top_percent).abs() < 1e-9);
    }
}

#[test]
fn centering_transform_offsets_by_half_the_node() {
    let anchor = AnchorPosition {
        left_percent: 50.0,
        top_percent: 25.0,
    };
    let tl = anchor.top_left_px(Size::new(400.0, 400.0), Size::new(64.0, 32.0));
    assert_eq!(tl, Point::new(168.0, 84.0));
    assert!(anchor.css().contains("translate(-50%, -50%)"));
}

#[test]
fn projection_is_total_outside_the_canvas() {
    let canvas = VirtualCanvas::square(500.0).unwrap();
    let a = project(Point::new(-50.0, 750.0), canvas);
    assert!((a.left_percent + 10.0).abs() < 1e-9);
    assert!((a.top_percent - 150.0).abs() < 1e-9);
}

#[test]
fn degenerate_canvas_is_rejected() {
    assert!(VirtualCanvas::new(0.0, 10.0).is_err());
    assert!(VirtualCanvas::new(10.0, f64::INFINITY).is_err());
}

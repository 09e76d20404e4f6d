use super::*;

#[test]
fn draw_in_is_hidden_at_hidden_offset_and_full_at_zero() {
    let len = 463.7;
    let pattern = DashPattern::draw_in(len);
    assert_eq!(pattern.dash, 464.0);
    assert_eq!(pattern.gap, DRAW_IN_GAP);
    assert_eq!(pattern.visible_length(len, pattern.hidden_offset()), 0.0);
    assert!((pattern.visible_length(len, 0.0) - len).abs() < 1e-9);
}

#[test]
fn draw_in_reveals_monotonically() {
    let len = 300.0;
    let pattern = DashPattern::draw_in(len);
    let mut last = -1.0;
    for i in (0..=10).rev() {
        let offset = pattern.hidden_offset() * f64::from(i) / 10.0;
        let v = pattern.visible_length(len, offset);
        assert!(v >= last, "offset={offset} v={v} last={last}");
        last = v;
    }
    assert_eq!(last, len);
}

#[test]
fn cross_bar_pattern_hides_short_bar() {
    let pattern = DashPattern::new(100.0, 100.0);
    assert_eq!(pattern.visible_length(60.0, 100.0), 0.0);
    assert_eq!(pattern.visible_length(60.0, 0.0), 60.0);
    assert_eq!(pattern.visible_length(60.0, 50.0), 50.0);
}

#[test]
fn flowing_dashes_keep_constant_coverage_over_a_period() {
    let pattern = DashPattern::new(24.0, 16.0);
    let len = 400.0;
    let base = pattern.visible_length(len, 0.0);
    assert_eq!(base, 240.0);
    assert_eq!(pattern.visible_length(len, -40.0), base);
}

#[test]
fn svg_array_formats_whole_numbers() {
    assert_eq!(DashPattern::new(24.0, 16.0).svg_array(), "24 16");
    assert_eq!(DashPattern::new(2.5, 1.0).svg_array(), "2.500 1");
}

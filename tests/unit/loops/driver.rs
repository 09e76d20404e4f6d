use super::*;

fn dash_flow() -> LoopSpec {
    LoopSpec::new("connector-left", Property::DashOffset, vec![0.0, -40.0], 1.2, Ease::Linear)
}

fn pulse() -> LoopSpec {
    LoopSpec::new("node", Property::Scale, vec![1.0, 1.04, 1.0], 2.0, Ease::EASE_IN_OUT)
}

#[test]
fn dash_flow_repeats_linearly() {
    let mut d = LoopDriver::new();
    let h = d.start(dash_flow(), 5.0).unwrap();
    assert_eq!(d.sample(h, 5.0), Some(0.0));
    assert!((d.sample(h, 5.6).unwrap() + 20.0).abs() < 1e-9);
    assert!((d.sample(h, 6.2).unwrap()).abs() < 1e-9, "wraps after one period");
    assert!((d.sample(h, 6.8).unwrap() + 20.0).abs() < 1e-9);
}

#[test]
fn pulse_peaks_mid_period() {
    let mut d = LoopDriver::new();
    let h = d.start(pulse(), 0.0).unwrap();
    assert!((d.sample(h, 1.0).unwrap() - 1.04).abs() < 1e-9);
    for i in 0..=40 {
        let v = d.sample(h, i as f64 * 0.25).unwrap();
        assert!((1.0 - 1e-9..=1.04 + 1e-9).contains(&v), "{v}");
    }
}

#[test]
fn delay_lags_the_phase() {
    let mut d = LoopDriver::new();
    let spec = LoopSpec::new("glow", Property::Opacity, vec![1.0, 0.5, 1.0], 2.0, Ease::Linear)
        .with_delay(0.5);
    let h = d.start(spec, 0.0).unwrap();
    assert_eq!(d.sample(h, 0.25), Some(1.0));
    assert!((d.sample(h, 1.5).unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn restarted_loop_replays_the_same_sequence() {
    let mut d = LoopDriver::new();
    let first = d.start(pulse(), 3.0).unwrap();
    let before: Vec<f64> = (0..50)
        .map(|i| d.sample(first, 3.0 + i as f64 * 0.07).unwrap())
        .collect();
    assert!(d.cancel(first));
    assert!(!d.is_active(first));
    assert_eq!(d.sample(first, 4.0), None);

    let second = d.start(pulse(), 42.0).unwrap();
    assert_ne!(first, second);
    let after: Vec<f64> = (0..50)
        .map(|i| d.sample(second, 42.0 + i as f64 * 0.07).unwrap())
        .collect();
    for (a, b) in before.iter().zip(&after) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn modulations_collect_every_loop_on_a_target() {
    let mut d = LoopDriver::new();
    d.start(pulse(), 0.0).unwrap();
    d.start(
        LoopSpec::new("node", Property::Opacity, vec![0.9, 1.0, 0.9], 2.0, Ease::EASE_IN_OUT),
        0.0,
    )
    .unwrap();
    d.start(dash_flow(), 0.0).unwrap();

    let m = d.modulations("node", 1.0);
    assert_eq!(m.len(), 2);
    assert_eq!(m[0].0, Property::Scale);
    assert_eq!(m[1].0, Property::Opacity);
    assert!((m[1].1 - 1.0).abs() < 1e-9);
    assert!(d.modulations("nobody", 1.0).is_empty());
}

#[test]
fn cancel_all_stops_everything() {
    let mut d = LoopDriver::new();
    d.start(pulse(), 0.0).unwrap();
    d.start(dash_flow(), 0.0).unwrap();
    assert_eq!(d.len(), 2);
    assert_eq!(d.cancel_all(), 2);
    assert!(d.is_empty());
    assert_eq!(d.cancel_all(), 0);
}

#[test]
fn invalid_specs_do_not_start() {
    let mut d = LoopDriver::new();
    let mut bad = pulse();
    bad.duration = 0.0;
    assert!(d.start(bad, 0.0).is_err());

    let mut empty = pulse();
    empty.keyframes.clear();
    assert_eq!(empty.rest_value(), 1.0);
    assert!(d.start(empty, 0.0).is_err());

    let mut nan = dash_flow();
    nan.keyframes[1] = f64::NAN;
    assert!(d.start(nan.clone(), 0.0).is_err());
    assert_eq!(nan.rest_value(), 0.0);
    assert!(d.is_empty());
}

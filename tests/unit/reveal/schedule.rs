use super::*;
use crate::animation::ease::Ease;

fn fade(target: &str, delay: f64, duration: f64) -> RevealStep {
    RevealStep::new(
        target,
        delay,
        Transition::tween(duration, Ease::Linear),
        VisualState::hidden(),
        VisualState::default(),
    )
}

#[test]
fn steps_hold_from_state_until_their_delay() {
    let s = RevealSchedule::new(vec![fade("a", 0.0, 1.0), fade("b", 2.0, 1.0)]).unwrap();
    let b = s.state_of("b", 1.9).unwrap();
    assert_eq!(b, VisualState::hidden());
    let b = s.state_of("b", 2.5).unwrap();
    assert!((b.opacity - 0.5).abs() < 1e-12);
    assert_eq!(s.state_of("b", 10.0).unwrap(), VisualState::default());
    assert!(s.state_of("zz", 1.0).is_none());
}

#[test]
fn earlier_step_reaches_target_before_later_step_starts() {
    let s = RevealSchedule::new(vec![
        fade("title", 0.0, 0.8),
        fade("underline", 1.0, 1.0),
        fade("outline", 2.0, 0.5),
    ])
    .unwrap();
    assert!(s.is_sequential());

    for pair in s.steps().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.delay < b.delay);
        assert_eq!(s.state_of(&a.target, b.delay).unwrap(), a.to);
        assert_eq!(s.state_of(&b.target, b.delay).unwrap(), b.from);
    }
}

#[test]
fn overlapping_stagger_is_not_sequential() {
    let s = RevealSchedule::new(vec![fade("a", 0.0, 0.5), fade("b", 0.1, 0.5)]).unwrap();
    assert!(!s.is_sequential());

    let ties = RevealSchedule::new(vec![fade("a", 1.0, 0.5), fade("b", 1.0, 0.5)]).unwrap();
    assert!(ties.is_sequential(), "equal delays render together");
}

#[test]
fn later_step_on_same_target_takes_over() {
    let glow = VisualState::hidden().with_opacity(0.3);
    let s = RevealSchedule::new(vec![
        fade("x", 0.0, 1.0),
        RevealStep::new(
            "x",
            2.0,
            Transition::tween(1.0, Ease::Linear),
            VisualState::default(),
            glow,
        ),
    ])
    .unwrap();
    assert_eq!(s.targets(), vec!["x"]);
    assert_eq!(s.state_of("x", 1.5).unwrap().opacity, 1.0);
    assert!((s.state_of("x", 2.5).unwrap().opacity - 0.65).abs() < 1e-12);
    assert_eq!(s.settled()[0].state, glow);
    assert_eq!(s.initial()[0].state, VisualState::hidden());
}

#[test]
fn total_duration_covers_spring_settle() {
    let s = RevealSchedule::new(vec![
        fade("a", 0.0, 1.0),
        RevealStep::new(
            "node",
            2.8,
            Transition::spring(100.0, 10.0),
            VisualState::hidden().with_scale(0.5),
            VisualState::default(),
        ),
    ])
    .unwrap();
    assert!(s.total_duration() > 2.8 + 1.0);
    let end = s.total_duration();
    assert_eq!(s.state_of("node", end).unwrap(), VisualState::default());
}

#[test]
fn sample_lists_targets_in_schedule_order() {
    let s = RevealSchedule::new(vec![fade("c", 0.0, 1.0), fade("a", 0.5, 1.0), fade("b", 0.2, 1.0)])
        .unwrap();
    let order: Vec<_> = s.sample(0.0).into_iter().map(|e| e.target).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
}

#[test]
fn invalid_steps_are_rejected() {
    assert!(RevealSchedule::new(vec![fade("", 0.0, 1.0)]).is_err());
    assert!(RevealSchedule::new(vec![fade("a", -1.0, 1.0)]).is_err());
    assert!(RevealSchedule::new(vec![fade("a", f64::NAN, 1.0)]).is_err());
    assert!(RevealSchedule::new(vec![fade("a", 0.0, -1.0)]).is_err());
    assert!(RevealSchedule::new(Vec::new()).unwrap().is_empty());
}

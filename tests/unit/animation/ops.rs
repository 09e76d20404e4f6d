use super::*;
use crate::animation::{anim::SampleCtx, ease::Ease};

#[test]
fn delayed_loop_lags_by_phase() {
    let base = Anim::evenly_spaced(vec![1.0, 0.5, 1.0], 2.0, Ease::Linear);
    let lead = loop_(base.clone(), 2.0, LoopMode::Repeat);
    let lag = delay(loop_(base, 2.0, LoopMode::Repeat), 0.5);

    let at = |t: f64| SampleCtx { time: t, local: t };
    assert!((lead.sample(at(1.0)) - lag.sample(at(1.5))).abs() < 1e-12);
    assert_eq!(lag.sample(at(0.25)), 1.0);
}

#[test]
fn stagger_is_index_based() {
    let offsets = stagger(7, 2.0, 0.1);
    assert_eq!(offsets.len(), 7);
    assert_eq!(offsets[0], 2.0);
    assert_eq!(offsets[6], 2.0 + 6.0 * 0.1);
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert!(stagger(0, 1.0, 1.0).is_empty());
}

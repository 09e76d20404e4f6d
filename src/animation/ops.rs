use crate::{
    animation::anim::{Anim, Expr, LoopMode},
    foundation::core::Seconds,
};

pub fn delay<T>(inner: Anim<T>, by: Seconds) -> Anim<T> {
    Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by,
    })
}

pub fn loop_<T>(inner: Anim<T>, period: Seconds, mode: LoopMode) -> Anim<T> {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period,
        mode,
    })
}

/// Start offsets for `count` items: `base + i * step`.
///
/// Offsets are computed from the index rather than accumulated so that
/// `stagger(7, 2.0, 0.1)[6]` is the same value as `2.0 + 6.0 * 0.1`.
pub fn stagger(count: usize, base: Seconds, step: Seconds) -> Vec<Seconds> {
    (0..count).map(|i| base + (i as f64) * step).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;

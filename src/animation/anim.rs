use crate::{
    animation::ease::Ease,
    foundation::core::{Seconds, Vec2},
    foundation::error::{ChoreoError, ChoreoResult},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCtx {
    pub time: Seconds,  // host clock
    pub local: Seconds, // time - lifecycle start
}

impl SampleCtx {
    pub fn at(start: Seconds, now: Seconds) -> Self {
        Self {
            time: now,
            local: now - start,
        }
    }

    fn with_local(mut self, local: Seconds) -> Self {
        self.time += local - self.local;
        self.local = local;
        self
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Anim<T> {
    Keyframes(Keyframes<T>),
    Expr(Expr<T>),
}

impl<T> Anim<T>
where
    T: Lerp + Clone + Default,
{
    pub fn constant(value: T) -> Self {
        Self::Keyframes(Keyframes {
            keys: vec![Keyframe {
                at: 0.0,
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        })
    }

    /// Keyframes spread evenly over `duration`, each segment eased with `ease`.
    pub fn evenly_spaced(values: Vec<T>, duration: Seconds, ease: Ease) -> Self {
        let last = values.len().saturating_sub(1).max(1) as f64;
        let keys = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Keyframe {
                at: duration * (i as f64) / last,
                value,
                ease,
            })
            .collect();
        Self::Keyframes(Keyframes {
            keys,
            mode: InterpMode::Linear,
            default: None,
        })
    }

    pub fn sample(&self, ctx: SampleCtx) -> T {
        match self {
            Self::Keyframes(kf) => kf.sample(ctx),
            Self::Expr(expr) => expr.sample(ctx),
        }
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Expr(expr) => expr.validate(),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by `at`
    pub mode: InterpMode,       // linear/hold
    pub default: Option<T>,     // value when no keys exist
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> ChoreoResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(ChoreoError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if self.keys.iter().any(|k| !k.at.is_finite()) {
            return Err(ChoreoError::animation("Keyframes times must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ChoreoError::animation("Keyframes keys must be sorted by time"));
        }
        Ok(())
    }

    /// Samples the keys; an empty key list without a default yields `None`.
    pub fn try_sample(&self, ctx: SampleCtx) -> Option<T> {
        if self.keys.is_empty() {
            return self.default.clone();
        }

        let t = ctx.local;
        let idx = self.keys.partition_point(|k| k.at <= t);

        if idx == 0 {
            return Some(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Some(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return Some(a.value.clone());
        }

        let u = (t - a.at) / span;
        match self.mode {
            InterpMode::Hold => Some(a.value.clone()),
            InterpMode::Linear => Some(T::lerp(&a.value, &b.value, a.ease.apply(u))),
        }
    }

    fn sample(&self, ctx: SampleCtx) -> T
    where
        T: Default,
    {
        self.try_sample(ctx).unwrap_or_default()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub at: Seconds,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Expr<T> {
    Delay {
        inner: Box<Anim<T>>,
        by: Seconds,
    },
    Loop {
        inner: Box<Anim<T>>,
        period: Seconds,
        mode: LoopMode,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    Repeat,
    PingPong,
}

impl<T> Expr<T>
where
    T: Lerp + Clone + Default,
{
    pub fn validate(&self) -> ChoreoResult<()> {
        match self {
            Self::Delay { inner, by } => {
                if !by.is_finite() || *by < 0.0 {
                    return Err(ChoreoError::animation("Delay must be finite and >= 0"));
                }
                inner.validate()
            }
            Self::Loop {
                inner,
                period,
                mode: _,
            } => {
                if !period.is_finite() || *period <= 0.0 {
                    return Err(ChoreoError::animation("Loop period must be > 0"));
                }
                inner.validate()
            }
        }
    }

    pub fn sample(&self, ctx: SampleCtx) -> T {
        match self {
            Self::Delay { inner, by } => {
                let mapped = (ctx.local - by).max(0.0);
                inner.sample(ctx.with_local(mapped))
            }
            Self::Loop {
                inner,
                period,
                mode,
            } => {
                let t = ctx.local.max(0.0);
                let mapped = match mode {
                    LoopMode::Repeat => t.rem_euclid(*period),
                    LoopMode::PingPong => {
                        let pos = t.rem_euclid(2.0 * period);
                        if pos < *period { pos } else { 2.0 * period - pos }
                    }
                };
                inner.sample(ctx.with_local(mapped))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;

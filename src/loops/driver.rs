use std::collections::BTreeMap;

use crate::{
    animation::{
        anim::{Anim, LoopMode, SampleCtx},
        ease::Ease,
        ops::{delay, loop_},
        state::Property,
    },
    foundation::core::Seconds,
    foundation::error::{ChoreoError, ChoreoResult},
};

/// An infinitely repeating keyframe sequence on one property of one element.
///
/// Keyframes are spread evenly over `duration`. `delay` lags the phase: the
/// loop holds its first keyframe for `delay` seconds after it starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopSpec {
    pub target: String,
    pub property: Property,
    pub keyframes: Vec<f64>,
    pub duration: Seconds,
    pub ease: Ease,
    #[serde(default)]
    pub delay: Seconds,
}

impl LoopSpec {
    pub fn new(
        target: impl Into<String>,
        property: Property,
        keyframes: Vec<f64>,
        duration: Seconds,
        ease: Ease,
    ) -> Self {
        Self {
            target: target.into(),
            property,
            keyframes,
            duration,
            ease,
            delay: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: Seconds) -> Self {
        self.delay = delay;
        self
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        if self.target.trim().is_empty() {
            return Err(ChoreoError::animation("loop target must be non-empty"));
        }
        if self.keyframes.is_empty() {
            return Err(ChoreoError::animation(format!(
                "loop '{}' needs at least one keyframe",
                self.target
            )));
        }
        if self.keyframes.iter().any(|v| !v.is_finite()) {
            return Err(ChoreoError::animation(format!(
                "loop '{}' keyframes must be finite",
                self.target
            )));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ChoreoError::animation(format!(
                "loop '{}' duration must be > 0",
                self.target
            )));
        }
        if !(self.delay.is_finite() && self.delay >= 0.0) {
            return Err(ChoreoError::animation(format!(
                "loop '{}' delay must be finite and >= 0",
                self.target
            )));
        }
        Ok(())
    }

    pub fn to_anim(&self) -> Anim<f64> {
        let cycle = Anim::evenly_spaced(self.keyframes.clone(), self.duration, self.ease);
        delay(loop_(cycle, self.duration, LoopMode::Repeat), self.delay)
    }

    /// Value rendered when the loop is not running: the first keyframe.
    pub fn rest_value(&self) -> f64 {
        self.keyframes
            .first()
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or_else(|| self.property.identity())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoopHandle(u64);

#[derive(Debug)]
struct ActiveLoop {
    spec: LoopSpec,
    anim: Anim<f64>,
    started_at: Seconds,
}

/// Owns the running loops of one component instance.
///
/// Loops run until cancelled; dropping a driver that still has active loops
/// is logged as a leak.
#[derive(Debug, Default)]
pub struct LoopDriver {
    next: u64,
    active: BTreeMap<LoopHandle, ActiveLoop>,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(level = "debug", skip(self, spec), fields(element = %spec.target, property = ?spec.property))]
    pub fn start(&mut self, spec: LoopSpec, now: Seconds) -> ChoreoResult<LoopHandle> {
        spec.validate()?;
        let anim = spec.to_anim();
        anim.validate()?;

        let handle = LoopHandle(self.next);
        self.next += 1;
        self.active.insert(
            handle,
            ActiveLoop {
                spec,
                anim,
                started_at: now,
            },
        );
        Ok(handle)
    }

    pub fn cancel(&mut self, handle: LoopHandle) -> bool {
        self.active.remove(&handle).is_some()
    }

    /// Cancel every loop; returns how many were running.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.active.len();
        self.active.clear();
        if n > 0 {
            tracing::debug!(cancelled = n, "loops cancelled");
        }
        n
    }

    pub fn is_active(&self, handle: LoopHandle) -> bool {
        self.active.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn spec(&self, handle: LoopHandle) -> Option<&LoopSpec> {
        self.active.get(&handle).map(|l| &l.spec)
    }

    pub fn sample(&self, handle: LoopHandle, now: Seconds) -> Option<f64> {
        let l = self.active.get(&handle)?;
        Some(l.anim.sample(SampleCtx::at(l.started_at, now)))
    }

    /// Current values of every loop on `target`, in start order.
    pub fn modulations(&self, target: &str, now: Seconds) -> Vec<(Property, f64)> {
        self.active
            .values()
            .filter(|l| l.spec.target == target)
            .map(|l| {
                (
                    l.spec.property,
                    l.anim.sample(SampleCtx::at(l.started_at, now)),
                )
            })
            .collect()
    }
}

impl Drop for LoopDriver {
    fn drop(&mut self) {
        if !self.active.is_empty() {
            tracing::warn!(active = self.active.len(), "loop driver dropped with running loops");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loops/driver.rs"]
mod tests;

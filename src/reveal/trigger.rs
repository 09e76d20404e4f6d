use std::collections::VecDeque;

use crate::{
    foundation::core::Seconds,
    foundation::error::{ChoreoError, ChoreoResult},
};

/// Intersection ratio at which the helix section counts as visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TriggerEvent {
    Show,
    Hide,
}

/// Source of the single event that starts (or, for reversible reveals, rewinds) a schedule.
///
/// Diagrams poll [`RevealTrigger::emit`] every tick; the trigger decides what
/// kind of signal it listens to.
pub trait RevealTrigger: std::fmt::Debug {
    /// Called once when the owning diagram mounts.
    fn arm(&mut self, now: Seconds);

    /// Next pending event at `now`, if any.
    fn emit(&mut self, now: Seconds) -> Option<TriggerEvent>;

    /// Detach from the host. After release the trigger never emits again.
    fn release(&mut self);

    /// Feed an intersection ratio sample. Triggers that do not observe ignore it.
    fn observe(&mut self, _ratio: f64) {}

    /// Whether the host provides the primitive this trigger depends on.
    fn is_supported(&self) -> bool {
        true
    }
}

/// Emits `Show` once, `delay` seconds after mount.
#[derive(Clone, Debug, Default)]
pub struct MountTimer {
    delay: Seconds,
    armed_at: Option<Seconds>,
    fired: bool,
    released: bool,
}

impl MountTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(delay: Seconds) -> Self {
        Self {
            delay: delay.max(0.0),
            ..Self::default()
        }
    }
}

impl RevealTrigger for MountTimer {
    fn arm(&mut self, now: Seconds) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    fn emit(&mut self, now: Seconds) -> Option<TriggerEvent> {
        if self.fired || self.released {
            return None;
        }
        let armed_at = self.armed_at?;
        if now - armed_at < self.delay {
            return None;
        }
        self.fired = true;
        Some(TriggerEvent::Show)
    }

    fn release(&mut self) {
        self.released = true;
    }
}

/// Turns intersection-ratio samples into show/hide events.
///
/// Visible once the ratio reaches `threshold`; hidden again when it drops
/// below `threshold - hysteresis`. Every crossing queues exactly one event.
#[derive(Clone, Debug)]
pub struct VisibilityTrigger {
    threshold: f64,
    hysteresis: f64,
    visible: bool,
    connected: bool,
    supported: bool,
    pending: VecDeque<TriggerEvent>,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> ChoreoResult<Self> {
        Self::with_hysteresis(threshold, 0.0)
    }

    pub fn with_hysteresis(threshold: f64, hysteresis: f64) -> ChoreoResult<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ChoreoError::validation(format!(
                "visibility threshold must be within [0, 1], got {threshold}"
            )));
        }
        if !(hysteresis.is_finite() && hysteresis >= 0.0) || hysteresis > threshold {
            return Err(ChoreoError::validation(format!(
                "hysteresis must be within [0, threshold], got {hysteresis}"
            )));
        }
        Ok(Self {
            threshold,
            hysteresis,
            visible: false,
            connected: false,
            supported: true,
            pending: VecDeque::new(),
        })
    }

    /// Observer for a host without intersection observation; it never fires.
    pub fn unsupported() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            hysteresis: 0.0,
            visible: false,
            connected: false,
            supported: false,
            pending: VecDeque::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl RevealTrigger for VisibilityTrigger {
    fn arm(&mut self, _now: Seconds) {
        if self.supported {
            self.connected = true;
        }
    }

    fn emit(&mut self, _now: Seconds) -> Option<TriggerEvent> {
        self.pending.pop_front()
    }

    fn release(&mut self) {
        self.connected = false;
        self.pending.clear();
    }

    fn observe(&mut self, ratio: f64) {
        if !self.connected || ratio.is_nan() {
            return;
        }
        let next = if self.visible {
            ratio >= self.threshold - self.hysteresis
        } else {
            ratio >= self.threshold
        };
        if next == self.visible {
            return;
        }
        self.visible = next;
        let event = if next {
            TriggerEvent::Show
        } else {
            TriggerEvent::Hide
        };
        tracing::debug!(ratio, threshold = self.threshold, ?event, "visibility crossing");
        self.pending.push_back(event);
    }

    fn is_supported(&self) -> bool {
        self.supported
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/trigger.rs"]
mod tests;

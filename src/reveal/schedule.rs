use std::collections::BTreeSet;

use crate::{
    animation::{anim::Lerp, state::VisualState, transition::Transition},
    foundation::core::Seconds,
    foundation::error::{ChoreoError, ChoreoResult},
};

/// One element's transition, keyed by its delay from the trigger instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealStep {
    pub target: String,
    pub delay: Seconds,
    pub transition: Transition,
    pub from: VisualState,
    pub to: VisualState,
}

impl RevealStep {
    pub fn new(
        target: impl Into<String>,
        delay: Seconds,
        transition: Transition,
        from: VisualState,
        to: VisualState,
    ) -> Self {
        Self {
            target: target.into(),
            delay,
            transition,
            from,
            to,
        }
    }

    /// Seconds after the trigger at which this step reaches `to`.
    pub fn end(&self) -> Seconds {
        self.delay + self.transition.duration()
    }

    pub fn has_started(&self, elapsed: Seconds) -> bool {
        elapsed >= self.delay
    }

    /// State `elapsed` seconds after the trigger.
    pub fn state_at(&self, elapsed: Seconds) -> VisualState {
        let p = self.transition.progress(elapsed - self.delay);
        VisualState::lerp(&self.from, &self.to, p)
    }
}

/// Rendered state of one schedule target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementState {
    pub target: String,
    pub state: VisualState,
}

/// Ordered reveal steps. Order encodes the viewing sequence; ties in delay
/// render together.
///
/// A target may appear in several steps. Its state is taken from the last
/// step (in schedule order) that has started, or the first step's `from`
/// before any of them has.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSchedule {
    steps: Vec<RevealStep>,
}

impl RevealSchedule {
    pub fn new(steps: Vec<RevealStep>) -> ChoreoResult<Self> {
        let schedule = Self { steps };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        for (i, step) in self.steps.iter().enumerate() {
            if step.target.trim().is_empty() {
                return Err(ChoreoError::validation(format!(
                    "reveal step {i} has an empty target"
                )));
            }
            if !step.delay.is_finite() || step.delay < 0.0 {
                return Err(ChoreoError::validation(format!(
                    "reveal step '{}' delay must be finite and >= 0",
                    step.target
                )));
            }
            step.transition.validate().map_err(|e| {
                ChoreoError::validation(format!("reveal step '{}': {e}", step.target))
            })?;
        }
        Ok(())
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Targets in order of first appearance.
    pub fn targets(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.steps
            .iter()
            .map(|s| s.target.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Time from the trigger until every step is at rest.
    pub fn total_duration(&self) -> Seconds {
        self.steps.iter().map(RevealStep::end).fold(0.0, f64::max)
    }

    /// True when every step finishes before any step with a larger delay starts.
    pub fn is_sequential(&self) -> bool {
        self.steps.iter().all(|a| {
            self.steps
                .iter()
                .filter(|b| a.delay < b.delay)
                .all(|b| a.end() <= b.delay)
        })
    }

    pub fn state_of(&self, target: &str, elapsed: Seconds) -> Option<VisualState> {
        let mut steps = self.steps.iter().filter(|s| s.target == target).peekable();
        let first = steps.peek().copied()?;
        let current = steps
            .filter(|s| s.has_started(elapsed))
            .last()
            .unwrap_or(first);
        Some(current.state_at(elapsed))
    }

    /// Every target's state `elapsed` seconds after the trigger.
    pub fn sample(&self, elapsed: Seconds) -> Vec<ElementState> {
        self.collect(|target| self.state_of(target, elapsed))
    }

    /// Pre-trigger state of every target.
    pub fn initial(&self) -> Vec<ElementState> {
        self.collect(|target| {
            self.steps
                .iter()
                .find(|s| s.target == target)
                .map(|s| s.from)
        })
    }

    /// Steady state of every target once the schedule has played out.
    pub fn settled(&self) -> Vec<ElementState> {
        self.collect(|target| {
            self.steps
                .iter()
                .rev()
                .find(|s| s.target == target)
                .map(|s| s.to)
        })
    }

    fn collect(&self, mut state: impl FnMut(&str) -> Option<VisualState>) -> Vec<ElementState> {
        self.targets()
            .into_iter()
            .filter_map(|target| {
                state(target).map(|state| ElementState {
                    target: target.to_string(),
                    state,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/schedule.rs"]
mod tests;

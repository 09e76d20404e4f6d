use crate::{
    animation::state::VisualState,
    foundation::core::Seconds,
    reveal::schedule::{ElementState, RevealSchedule},
    reveal::trigger::TriggerEvent,
};

/// What a `Hide` event does to a schedule that has already been triggered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RevealPolicy {
    /// Plays once; later events are ignored.
    #[default]
    OneShot,
    /// `Hide` snaps every element back to its `from` state so the next
    /// `Show` replays the schedule.
    Reversible,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RevealPhase {
    Idle,
    Playing { since: Seconds },
    Complete { since: Seconds },
}

/// Plays a [`RevealSchedule`] in response to trigger events.
#[derive(Clone, Debug)]
pub struct Choreographer {
    schedule: RevealSchedule,
    policy: RevealPolicy,
    started_at: Option<Seconds>,
    plays: u32,
    static_only: bool,
}

impl Choreographer {
    pub fn new(schedule: RevealSchedule, policy: RevealPolicy) -> Self {
        Self {
            schedule,
            policy,
            started_at: None,
            plays: 0,
            static_only: false,
        }
    }

    pub fn schedule(&self) -> &RevealSchedule {
        &self.schedule
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    /// How many times the schedule has been started.
    pub fn plays(&self) -> u32 {
        self.plays
    }

    pub fn is_static(&self) -> bool {
        self.static_only
    }

    /// Apply a trigger event; returns whether the phase changed.
    #[tracing::instrument(level = "debug", skip(self), fields(policy = ?self.policy))]
    pub fn handle(&mut self, event: TriggerEvent, now: Seconds) -> bool {
        match (event, self.started_at) {
            (TriggerEvent::Show, None) => {
                self.started_at = Some(now);
                self.plays += 1;
                tracing::debug!(plays = self.plays, "reveal started");
                true
            }
            (TriggerEvent::Hide, Some(_)) if self.policy == RevealPolicy::Reversible => {
                self.started_at = None;
                tracing::debug!("reveal reverted");
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self, now: Seconds) -> RevealPhase {
        match self.started_at {
            None => RevealPhase::Idle,
            Some(since) => {
                let end = since + self.schedule.total_duration();
                if now >= end {
                    RevealPhase::Complete { since: end }
                } else {
                    RevealPhase::Playing { since }
                }
            }
        }
    }

    /// Per-element states at `now`, in schedule order.
    pub fn sample(&self, now: Seconds) -> Vec<ElementState> {
        if self.static_only {
            return self.schedule.settled();
        }
        match self.started_at {
            None => self.schedule.initial(),
            Some(since) => self.schedule.sample(now - since),
        }
    }

    pub fn state_of(&self, target: &str, now: Seconds) -> Option<VisualState> {
        self.sample(now)
            .into_iter()
            .find(|e| e.target == target)
            .map(|e| e.state)
    }

    /// Render the settled state from now on, regardless of events.
    pub fn degrade_to_static(&mut self) {
        if !self.static_only {
            tracing::warn!("animation unavailable; rendering reveal in its final state");
        }
        self.static_only = true;
    }

    /// Back to `Idle`, keeping the play count.
    pub fn reset(&mut self) {
        self.started_at = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/choreographer.rs"]
mod tests;

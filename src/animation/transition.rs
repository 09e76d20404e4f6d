use crate::{
    animation::ease::Ease,
    foundation::core::Seconds,
    foundation::error::{ChoreoError, ChoreoResult},
};

/// Displacement below which a spring counts as settled.
pub const SPRING_REST_DELTA: f64 = 1e-3;

// Upper bound for numerically searched settle times.
const SPRING_MAX_SETTLE: Seconds = 60.0;

/// How a single reveal step moves from its `from` state to its `to` state.
///
/// Progress is `0.0` at the start and `1.0` once complete. Springs may
/// overshoot past `1.0` before settling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Transition {
    Instant,
    Tween {
        duration: Seconds,
        ease: Ease,
    },
    Spring {
        stiffness: f64,
        damping: f64,
        mass: f64,
    },
}

impl Transition {
    pub fn tween(duration: Seconds, ease: Ease) -> Self {
        Self::Tween { duration, ease }
    }

    pub fn spring(stiffness: f64, damping: f64) -> Self {
        Self::Spring {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub fn validate(&self) -> ChoreoResult<()> {
        match *self {
            Self::Instant => Ok(()),
            Self::Tween { duration, .. } => {
                if !duration.is_finite() || duration < 0.0 {
                    return Err(ChoreoError::animation(
                        "tween duration must be finite and >= 0",
                    ));
                }
                Ok(())
            }
            Self::Spring {
                stiffness,
                damping,
                mass,
            } => {
                if !(stiffness.is_finite() && stiffness > 0.0) {
                    return Err(ChoreoError::animation("spring stiffness must be > 0"));
                }
                if !(damping.is_finite() && damping >= 0.0) {
                    return Err(ChoreoError::animation("spring damping must be >= 0"));
                }
                if !(mass.is_finite() && mass > 0.0) {
                    return Err(ChoreoError::animation("spring mass must be > 0"));
                }
                if damping == 0.0 {
                    return Err(ChoreoError::animation(
                        "undamped spring never settles; damping must be > 0",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Time until the transition is at rest.
    pub fn duration(&self) -> Seconds {
        match *self {
            Self::Instant => 0.0,
            Self::Tween { duration, .. } => duration.max(0.0),
            Self::Spring {
                stiffness,
                damping,
                mass,
            } => spring_settle_time(stiffness, damping, mass),
        }
    }

    pub fn is_complete(&self, elapsed: Seconds) -> bool {
        elapsed >= self.duration()
    }

    /// Progress after `elapsed` seconds; negative elapsed means not started.
    pub fn progress(&self, elapsed: Seconds) -> f64 {
        if elapsed < 0.0 {
            return 0.0;
        }
        if self.is_complete(elapsed) {
            return 1.0;
        }
        match *self {
            Self::Instant => 1.0,
            Self::Tween { duration, ease } => ease.apply(elapsed / duration),
            Self::Spring {
                stiffness,
                damping,
                mass,
            } => spring_position(stiffness, damping, mass, elapsed),
        }
    }
}

/// Position of a unit step response of a damped spring released from rest at 0.
pub fn spring_position(stiffness: f64, damping: f64, mass: f64, t: Seconds) -> f64 {
    let omega0 = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());

    if zeta < 1.0 {
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega0 * t).exp();
        1.0 - decay * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else if zeta == 1.0 {
        1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega0 * (zeta - root);
        let r2 = -omega0 * (zeta + root);
        1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    }
}

fn spring_settle_time(stiffness: f64, damping: f64, mass: f64) -> Seconds {
    let omega0 = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());

    if zeta < 1.0 {
        if zeta <= 0.0 {
            return SPRING_MAX_SETTLE;
        }
        // Bound the oscillation by its exponential envelope.
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let amplitude = (1.0 + (zeta * omega0 / omega_d).powi(2)).sqrt();
        let t = (amplitude / SPRING_REST_DELTA).ln() / (zeta * omega0);
        return t.clamp(0.0, SPRING_MAX_SETTLE);
    }

    // Critically and over-damped responses approach 1 monotonically.
    const STEP: Seconds = 1.0 / 240.0;
    let mut t = 0.0;
    while t < SPRING_MAX_SETTLE {
        if 1.0 - spring_position(stiffness, damping, mass, t) < SPRING_REST_DELTA {
            return t;
        }
        t += STEP;
    }
    SPRING_MAX_SETTLE
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;

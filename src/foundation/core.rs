use crate::foundation::error::{ChoreoError, ChoreoResult};

pub use kurbo::{BezPath, Line, Point, Size, Vec2};

/// Host-clock instant or span in seconds.
pub type Seconds = f64;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ChoreoResult<Self> {
        if den == 0 {
            return Err(ChoreoError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ChoreoError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> Seconds {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: Seconds) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }

    /// Frames needed to cover `secs`, including the frame at `secs` itself.
    pub fn frames_covering(self, secs: Seconds) -> u64 {
        self.secs_to_frames_floor(secs).saturating_add(1)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use std::{io::Read, path::Path};

use crate::{
    foundation::core::Fps,
    foundation::error::{ChoreoError, ChoreoResult},
};

/// Capabilities and tuning supplied by the host environment.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Whether the host can run animations at all. When false every
    /// diagram renders its settled state.
    pub animations: bool,
    /// Whether intersection observation is available.
    pub intersection_observer: bool,
    /// Overrides the built-in visibility threshold.
    pub visibility_threshold: Option<f64>,
    pub hysteresis: f64,
    pub fps: Fps,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            animations: true,
            intersection_observer: true,
            visibility_threshold: None,
            hysteresis: 0.0,
            fps: Fps::default(),
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> ChoreoResult<()> {
        if let Some(t) = self.visibility_threshold
            && !(0.0..=1.0).contains(&t)
        {
            return Err(ChoreoError::validation(format!(
                "visibility_threshold must be within [0, 1], got {t}"
            )));
        }
        if !(self.hysteresis.is_finite() && self.hysteresis >= 0.0) {
            return Err(ChoreoError::validation("hysteresis must be finite and >= 0"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }

    pub fn from_json_str(s: &str) -> ChoreoResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| ChoreoError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_reader(reader: impl Read) -> ChoreoResult<Self> {
        let cfg: Self =
            serde_json::from_reader(reader).map_err(|e| ChoreoError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> ChoreoResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            ChoreoError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Sample instants covering `[0, duration]` at the configured frame rate.
    pub fn frame_times(&self, duration: f64) -> Vec<f64> {
        let n = self.fps.frames_covering(duration.max(0.0));
        (0..n).map(|f| self.fps.frames_to_secs(f)).collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

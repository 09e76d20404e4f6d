/// Convenience result type used across choreo.
pub type ChoreoResult<T> = Result<T, ChoreoError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only construction and validation return errors. Sampling a validated
/// schedule, loop, or shape is total.
#[derive(thiserror::Error, Debug)]
pub enum ChoreoError {
    /// Invalid user-provided configuration, schedule, or shape data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or starting animation primitives.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating a diagram frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoreoError {
    /// Build a [`ChoreoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChoreoError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ChoreoError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ChoreoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

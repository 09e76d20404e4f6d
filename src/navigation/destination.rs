use std::fmt;

/// Opaque routing target: an in-app path or an external URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Placeholder targets (`#`) that go nowhere.
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty() || self.0 == "#"
    }

    pub fn is_external(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Destination {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Performs navigation on behalf of the engine.
pub trait Navigator {
    fn navigate(&mut self, destination: &Destination);
}

/// Navigator that only remembers what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    requests: Vec<Destination>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[Destination] {
        &self.requests
    }

    pub fn last(&self) -> Option<&Destination> {
        self.requests.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: &Destination) {
        tracing::debug!(%destination, "navigation requested");
        self.requests.push(destination.clone());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/destination.rs"]
mod tests;

//! Station — a fixed weather-recording site.

use serde::{Deserialize, Serialize};

/// Identifier of a weather station (e.g. `USC00519397`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_bare_string() {
        let ids = vec![StationId::new("USC00519397"), StationId::new("USC00513117")];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"["USC00519397","USC00513117"]"#);
    }
}

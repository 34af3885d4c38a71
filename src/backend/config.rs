use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// How long a toast stays on screen.
    pub toast_duration_ms: u64,
    /// Older toasts are dropped beyond this many.
    pub max_toasts: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            max_toasts: 3,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"toast_duration_ms": 500}"#).unwrap();
        assert_eq!(config.toast_duration(), Duration::from_millis(500));
        assert_eq!(config.max_toasts, 3);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(PageConfig::from_json("{toast").is_err());
    }
}

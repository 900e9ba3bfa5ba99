pub mod defaults;
pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use defaults::{DEBUG_MODE, ENDPOINT, MAX_REQUEST_TIMEOUT_SECONDS, REQUEST_TIMEOUT_SECONDS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use toml_config::TomlConfig;

/// Read access to the three configuration values.
pub trait SettingsProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn debug_mode(&self) -> bool;
    fn request_timeout_seconds(&self) -> u64;

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds())
    }
}

/// Effective settings. `Default` yields the built-in constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub debug_mode: bool,
    pub request_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            debug_mode: DEBUG_MODE,
            request_timeout_seconds: REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl Settings {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SettingsProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", &self.endpoint)?;
        validate_range(
            "api.request_timeout_seconds",
            self.request_timeout_seconds,
            1,
            MAX_REQUEST_TIMEOUT_SECONDS,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mirrors_constants() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint(), "https://api.example.com/v2");
        assert!(settings.debug_mode());
        assert_eq!(settings.request_timeout_seconds(), 60);
        assert_eq!(settings.timeout(), Duration::from_secs(60));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let settings = Settings {
            endpoint: "mailto:ops@example.com".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            request_timeout_seconds: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_to_json_lists_every_field() {
        let json = Settings::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["endpoint"], "https://api.example.com/v2");
        assert_eq!(value["debug_mode"], true);
        assert_eq!(value["request_timeout_seconds"], 60);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"debug_mode": false}"#).unwrap();
        assert!(!settings.debug_mode);
        assert_eq!(settings.endpoint, ENDPOINT);
        assert_eq!(settings.request_timeout_seconds, REQUEST_TIMEOUT_SECONDS);
    }
}

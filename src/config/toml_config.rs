use crate::config::{Settings, SettingsProvider};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub runtime: RuntimeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    pub debug_mode: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string. Unknown keys are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| CalcError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Replace `${VAR}` placeholders with environment values; unset ones stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigParseError {
            message: format!("env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overlay the file's values on the built-in defaults.
    pub fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            endpoint: self.api.endpoint.unwrap_or(defaults.endpoint),
            debug_mode: self.runtime.debug_mode.unwrap_or(defaults.debug_mode),
            request_timeout_seconds: self
                .api
                .request_timeout_seconds
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }
}

impl SettingsProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        self.api
            .endpoint
            .as_deref()
            .unwrap_or(crate::config::defaults::ENDPOINT)
    }

    fn debug_mode(&self) -> bool {
        self.runtime
            .debug_mode
            .unwrap_or(crate::config::defaults::DEBUG_MODE)
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.api
            .request_timeout_seconds
            .unwrap_or(crate::config::defaults::REQUEST_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Serialization,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::SerializationError(_) => ErrorCategory::Serialization,
            CalcError::ConfigParseError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("Could not read configuration file: {}", e),
            CalcError::SerializationError(e) => format!("Could not render output: {}", e),
            CalcError::ConfigParseError { message } => {
                format!("Configuration file is not valid TOML: {}", message)
            }
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::IoError(_) => "Check that the --config path exists and is readable",
            CalcError::SerializationError(_) => "Retry without --json",
            CalcError::ConfigParseError { .. } => {
                "Fix the TOML syntax; every section and key is optional"
            }
            CalcError::InvalidConfigValueError { .. } => {
                "Use an http(s) endpoint and a timeout between 1 and 3600 seconds"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let io = CalcError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);

        let invalid = CalcError::InvalidConfigValueError {
            field: "api.endpoint".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert!(invalid.to_string().contains("api.endpoint"));
        assert!(invalid.user_friendly_message().contains("Unsupported URL scheme"));
    }
}

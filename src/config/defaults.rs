//! Built-in configuration values.

/// Versioned API base address.
pub const ENDPOINT: &str = "https://api.example.com/v2";

/// Debug/verbose mode flag.
pub const DEBUG_MODE: bool = true;

/// Request timeout in seconds.
pub const REQUEST_TIMEOUT_SECONDS: u64 = 60;

/// Upper bound accepted by timeout validation.
pub const MAX_REQUEST_TIMEOUT_SECONDS: u64 = 3600;

pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::defaults::{DEBUG_MODE, ENDPOINT, REQUEST_TIMEOUT_SECONDS};
pub use config::{Settings, SettingsProvider, TomlConfig};
pub use crate::core::{difference, product, sum};
pub use utils::error::{CalcError, Result};

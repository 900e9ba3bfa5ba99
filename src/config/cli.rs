use crate::config::{Settings, TomlConfig};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "calckit")]
#[command(about = "Arithmetic helpers and API client defaults")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, global = true, help = "TOML file overriding the built-in settings")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print A - B
    Difference(Operands),
    /// Print A + B
    Sum(Operands),
    /// Print A * B
    Product(Operands),
    /// Print the effective settings
    Config {
        #[arg(long, help = "Render as JSON")]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Operands {
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

impl CliConfig {
    /// Built-in defaults, overlaid by `--config` when given.
    pub fn load_settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => Ok(TomlConfig::from_file(path)?.into_settings()),
            None => {
                tracing::debug!("No config file given, using built-in settings");
                Ok(Settings::default())
            }
        }
    }

    /// Debug logging is on when `--verbose` is passed or the settings enable debug mode.
    pub fn debug_logging(&self, settings: &Settings) -> bool {
        self.verbose || settings.debug_mode
    }
}

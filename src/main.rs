use calckit::config::cli::{Command, Operands};
use calckit::utils::{logger, validation::Validate};
use calckit::{difference, product, sum, CliConfig, Settings, SettingsProvider};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let loaded = cli.load_settings().and_then(|s| s.validate().map(|_| s));

    let debug_logging = match &loaded {
        Ok(settings) => cli.debug_logging(settings),
        Err(_) => cli.verbose,
    };
    if cli.log_json {
        logger::init_json_logger(debug_logging);
    } else {
        logger::init_cli_logger(debug_logging);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(
                "❌ Configuration failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Difference(Operands { a, b }) => {
            report(&settings, "difference", a, b, difference(a, b))
        }
        Command::Sum(Operands { a, b }) => report(&settings, "sum", a, b, sum(a, b)),
        Command::Product(Operands { a, b }) => {
            report(&settings, "product", a, b, product(a, b))
        }
        Command::Config { json } => {
            if json {
                println!("{}", settings.to_json()?);
            } else {
                println!("endpoint = {}", settings.endpoint());
                println!("debug_mode = {}", settings.debug_mode());
                println!("request_timeout_seconds = {}", settings.request_timeout_seconds());
            }
        }
    }

    Ok(())
}

fn report(settings: &Settings, op: &str, a: f64, b: f64, result: f64) {
    if settings.debug_mode() {
        tracing::debug!("{}({}, {}) = {}", op, a, b, result);
    }
    println!("{}", result);
}

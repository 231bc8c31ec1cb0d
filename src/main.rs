//! docshelf: a study library of files and folders.
//!
//! Main entry point: parses the command line, loads configuration,
//! installs logging, and dispatches the command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use docshelf_cli::{Cli, output};
use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::print_failure(&e, cli.format);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::debug!(
        config = %cli.config,
        data_root = %config.persistence.data_root,
        latency_ms = config.persistence.latency_ms,
        "Configuration loaded"
    );

    if let Err(e) = cli.execute(&config).await {
        tracing::debug!(error = %e, "Command failed");
        output::print_failure(&e, cli.format);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

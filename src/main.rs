//! Trading desk CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use desk_config::load_config_or_default;
use desk_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_default(&cli.config)?;

    // Setup logging
    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };
    let _guard = setup_logging(log_level, cli.json_logs, config.logging.file.as_deref());

    // Execute command
    match cli.command {
        Commands::Instruments => cli::commands::instruments::run(&config).await,
        Commands::Place(args) => cli::commands::place::run(args, &config).await,
        Commands::Orders => cli::commands::orders::run(&config).await,
        Commands::Order(args) => cli::commands::order::run(args, &config).await,
        Commands::Portfolio => cli::commands::portfolio::run(&config).await,
        Commands::Trades => cli::commands::trades::run(&config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}

//! seekback CLI entry point

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use seekback::cli::{Cli, Commands, ConfigCommands};
use seekback::config::{ConfigError, LoggingConfig};
use seekback::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load();

    // A broken config file must not stop commands that never read it.
    let logging_config = match &loaded {
        Ok(config) => config.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    if let Err(e) = logging::init(&logging_config) {
        eprintln!("Warning: {e}");
    }

    match cli.command {
        Commands::Resume(args) => commands::resume::handle(&require(loaded)?, &args),
        Commands::Since(args) => commands::since::handle(&args),
        Commands::Offset(args) => commands::offset::handle(&args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&require(loaded)?),
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}

fn require(loaded: Result<Config, ConfigError>) -> Result<Config> {
    loaded.context("Failed to load configuration")
}

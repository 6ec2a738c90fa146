//! caresync library root.
//! Exposes the CLI parser, the high-level run() function and the core
//! modules (overdue monitor, calendar windows, state container).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Task { .. } => cli::commands::task::handle(&cli.command, cfg),
        Commands::Overdue { .. } => cli::commands::overdue::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Alerts { .. } => cli::commands::alerts::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Shift { .. } => cli::commands::shift::handle(&cli.command, cfg),
        Commands::Staff { .. } => cli::commands::staff::handle(&cli.command, cfg),
        Commands::Resident { .. } => cli::commands::resident::handle(&cli.command, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg),
        Commands::Stock { .. } => cli::commands::stock::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Todo { .. } => cli::commands::todo::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // Held until the end of the command so buffered lines are flushed.
    let _logger = match logging::init_logging(&cfg.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("⚠️ Logging disabled: {}", e);
            None
        }
    };

    dispatch(&cli, &cfg)
}

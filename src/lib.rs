//! rTimelens library root.
//! Exposes the analysis engine (`core`, `models`), the snapshot sources,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Logs { .. } => cli::commands::logs::handle(cli, cfg),
        Commands::Totals { .. } => cli::commands::totals::handle(cli, cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(cli, cfg),
        Commands::Options => cli::commands::options::handle(cli, cfg),
        Commands::Today { .. } => cli::commands::today::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Diagnostic traces go to stderr, only with `--debug`.
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "rtimelens=debug".into()),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}

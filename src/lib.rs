//! rBirdlog library root.
//! Exposes CLI parser, high-level run() function, the record store and the
//! query engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod query;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{report, tables};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { filter } => report::handle_list(filter, cfg),
        Commands::Filters => report::handle_filters(cfg),
        Commands::Map { filter } => report::handle_map(filter, cfg),
        Commands::Stats { filter } => report::handle_stats(filter, cfg),
        Commands::Species => tables::handle_species(cfg),
        Commands::Locations => tables::handle_locations(cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override del data file da riga di comando
    if let Some(custom) = &cli.data {
        cfg.data_file = utils::path::expand_tilde(custom)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}

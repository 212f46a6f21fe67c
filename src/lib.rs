//! sitetrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod auth;
pub mod board;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
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
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Register { .. }
        | Commands::Login { .. }
        | Commands::Logout
        | Commands::Whoami => cli::commands::auth::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Rename { .. }
        | Commands::Del { .. }
        | Commands::Assign { .. }
        | Commands::Comment { .. }
        | Commands::Select { .. }
        | Commands::Detail => cli::commands::site::handle(&cli.command, cfg),
        Commands::Photo { action } => cli::commands::photo::handle(action, cfg),
        Commands::Board | Commands::Move { .. } => {
            cli::commands::board::handle(&cli.command, cfg)
        }
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load();

    // 3️⃣ apply a --db override; the mirror and photo store follow the
    // database so an overridden run (tests, scratch DBs) stays self-contained
    if let Some(custom_db) = &cli.db {
        let db = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
        cfg.mirror = format!("{db}.mirror.json");
        cfg.photo_dir = format!("{db}.photos");
        cfg.database = db;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

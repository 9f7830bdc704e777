//! shot-sorter CLI
//!
//! Command-line interface for sorting game screenshots into named folders.

mod cli_types;
mod commands;
mod error;
mod logging;
mod prompt;

use std::time::Instant;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{CatalogAction, Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let started = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    // SOURCE, DESTINATION, GAME_IDS_JSON and DEVICE usually come from .env
    match dotenv::dotenv() {
        Ok(path) => log::debug!("Loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Ignoring .env: {e}"),
    }

    if let Err(e) = run(cli, started) {
        log::error!(
            "{} {e}",
            "Error:".if_supports_color(Stderr, |t| t.bold()),
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli, started: Instant) -> Result<(), CliError> {
    match cli.command {
        Commands::Sync {
            nocreate,
            dry_run,
            paths,
        } => commands::sync::run_sync(paths.overrides(), nocreate, dry_run, cli.quiet, started),
        Commands::Lookup { id, paths } => commands::lookup::run_lookup(paths.overrides(), id),
        Commands::Catalog { action, paths } => match action {
            CatalogAction::List => commands::catalog::run_catalog_list(paths.overrides()),
            CatalogAction::Add { id, name, year } => {
                commands::catalog::run_catalog_add(paths.overrides(), id, name, year)
            }
        },
        Commands::Config { action, paths } => match action {
            ConfigAction::Show => commands::config::run_config_show(paths.overrides()),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

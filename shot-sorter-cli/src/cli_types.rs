//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use shot_sorter_lib::{DeviceLayout, SettingsOverrides};

#[derive(Parser)]
#[command(name = "shot-sorter")]
#[command(about = "Sort game screenshots into named game folders", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Path and device settings that override the environment and settings file.
#[derive(Args, Clone, Default)]
pub(crate) struct PathArgs {
    /// Directory the device writes captures to (env: SOURCE)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory to build the sorted tree in (env: DESTINATION)
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Known-games catalog JSON file (env: GAME_IDS_JSON)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Capture device layout: DECK or GAMINGPC (env: DEVICE)
    #[arg(long)]
    pub device: Option<DeviceLayout>,
}

impl PathArgs {
    pub(crate) fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            source: self.source.clone(),
            destination: self.destination.clone(),
            catalog: self.catalog.clone(),
            layout: self.device,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Copy captures into "Game Name (Year)" folders
    Sync {
        /// Never prompt: stop at the first unknown game ID (for scheduled runs)
        #[arg(long)]
        nocreate: bool,

        /// Show what would be copied without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Ask the Steam store what a game ID is called
    Lookup {
        /// Numeric game ID
        id: u64,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Inspect or edit the known-games catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Show resolved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,

        #[command(flatten)]
        paths: PathArgs,
    },
}

#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// List catalog entries
    List,

    /// Add a game to the catalog
    Add {
        /// Numeric game ID
        id: u64,

        /// Display name used for the folder
        name: String,

        /// Release year (omit if unknown)
        #[arg(long)]
        year: Option<u32>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show every setting and where it came from
    Show,

    /// Print the settings file path
    Path,
}

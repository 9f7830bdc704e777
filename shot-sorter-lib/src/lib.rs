//! Screenshot sorting: turns a capture device's ID-keyed folders into a
//! tree of human-readable game folders.
//!
//! The pieces, leaves first:
//!
//! - [`normalize`]: timestamped filenames → `YYYY-MM-DD at HH-MM-SS.ext`
//! - [`layout`]: where the game ID lives for each device layout
//! - [`resolver`]: game ID → folder via the catalog and the store
//! - [`sync`]: the walk-and-copy driver

pub mod error;
pub mod layout;
pub mod normalize;
pub mod resolver;
pub mod settings;
pub mod sync;

pub use error::SyncError;
pub use layout::{Capture, CaptureLayout, SkipReason};
pub use normalize::{
    normalize_deck_filename, normalize_filename, normalize_pc_filename, pc_game_id_prefix,
};
pub use resolver::{
    DeclineAll, Decision, GameResolver, Prompter, ResolverOptions, UnresolvedPolicy,
};
pub use settings::{
    SettingSource, SettingSources, Settings, SettingsFile, SettingsOverrides,
    default_catalog_path, settings_path,
};
pub use sync::{SyncOptions, SyncProgress, SyncSummary, THUMBNAILS_DIR, synchronize};

// Re-export the crates a frontend needs alongside this one.
pub use shot_sorter_catalog as catalog;
pub use shot_sorter_core::{DeviceLayout, GameFolder, GameId};
pub use shot_sorter_steam as steam;

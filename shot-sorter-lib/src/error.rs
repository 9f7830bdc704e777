use std::path::PathBuf;

use shot_sorter_catalog::CatalogError;
use shot_sorter_core::GameId;
use shot_sorter_steam::LookupError;
use thiserror::Error;

/// Errors that stop a sort run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The ID is in neither the catalog nor the store (or the operator
    /// declined to name it).
    #[error("Game ID {id} is not in the catalog and could not be resolved")]
    UnresolvedGame { id: GameId },

    /// A new catalog entry was written; captures for it are sorted next run.
    #[error("Added '{folder}' (ID {id}) to the catalog. Rerun to sort its captures")]
    RerunRequired { id: GameId, folder: String },

    /// The store kept answering with unusable bodies.
    #[error("Store lookup for game ID {id} gave malformed responses {attempts} times: {message}")]
    MalformedResponse {
        id: GameId,
        attempts: u32,
        message: String,
    },

    #[error("Store lookup for game ID {id} failed: {source}")]
    Lookup {
        id: GameId,
        #[source]
        source: LookupError,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SyncError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the run stopped because the catalog was just extended.
    pub fn is_rerun_required(&self) -> bool {
        matches!(self, Self::RerunRequired { .. })
    }
}

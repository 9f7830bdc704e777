use shot_sorter_lib::SyncError;
use shot_sorter_lib::catalog::CatalogError;
use shot_sorter_lib::steam::LookupError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Sorting stopped
    #[error("{0}")]
    Sync(#[from] SyncError),

    /// Catalog read or write failed
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Store lookup failed
    #[error("{0}")]
    Lookup(#[from] LookupError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

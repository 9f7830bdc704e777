//! Reading and writing the catalog JSON document.

use std::path::{Path, PathBuf};

use serde::Serialize;
use shot_sorter_core::GameId;
use thiserror::Error;

use crate::types::{Catalog, CatalogEntry};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Game ID {id} already exists in the catalog")]
    DuplicateEntry { id: GameId },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl CatalogError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load a catalog that must already exist.
///
/// Fails with [`CatalogError::NotFound`] when the file is absent and with
/// [`CatalogError::DuplicateEntry`] when two entries share an ID.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog: Catalog =
        serde_json::from_str(&contents).map_err(|e| CatalogError::json(path, e))?;
    if let Some(id) = catalog.first_duplicate() {
        return Err(CatalogError::DuplicateEntry { id });
    }
    Ok(catalog)
}

/// Load a catalog, treating a missing file as `{"games": []}`.
pub fn load_catalog_or_default(path: &Path) -> Result<Catalog, CatalogError> {
    match load_catalog(path) {
        Err(CatalogError::NotFound { .. }) => Ok(Catalog::default()),
        other => other,
    }
}

/// Write the whole catalog to `path` with 4-space indentation.
///
/// The document is written to a sibling temp file and renamed into place,
/// so readers see either the old or the new document.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog
        .serialize(&mut ser)
        .map_err(|e| CatalogError::json(path, e))?;
    buf.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, &buf).map_err(|e| CatalogError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| CatalogError::io(path, e))?;
    Ok(())
}

/// Read-modify-write: load the current document (or an empty one), append
/// `entry`, and rewrite the file. Returns the updated catalog.
///
/// A duplicate ID fails with [`CatalogError::DuplicateEntry`] before anything
/// is written.
pub fn append_entry(path: &Path, entry: CatalogEntry) -> Result<Catalog, CatalogError> {
    let mut catalog = load_catalog_or_default(path)?;
    let id = entry.id;
    if !catalog.push(entry) {
        return Err(CatalogError::DuplicateEntry { id });
    }
    save_catalog(path, &catalog)?;
    Ok(catalog)
}

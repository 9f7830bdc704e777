//! Per-device rules for finding the game ID and destination of a capture.

use std::path::{Component, Path, PathBuf};

use shot_sorter_core::{DeviceLayout, GameFolder, GameId};

use crate::normalize::{normalize_filename, pc_game_id_prefix};

/// Name of the per-game container folder the Steam Deck writes captures into.
const DECK_CONTAINER: &str = "screenshots";

/// A capture file located relative to the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub game_id: GameId,
    /// Directories kept above the game folder in the destination.
    pub outer_dir: PathBuf,
    /// Directories kept below the game folder in the destination.
    pub inner_dir: PathBuf,
    /// Filename as found on disk.
    pub file_name: String,
}

impl Capture {
    /// Full destination path for this capture once its game is resolved.
    pub fn destination(&self, dest_root: &Path, folder: &GameFolder, file_name: &str) -> PathBuf {
        let mut path = dest_root.to_path_buf();
        if !self.outer_dir.as_os_str().is_empty() {
            path.push(&self.outer_dir);
        }
        path.push(folder.dir_name());
        if !self.inner_dir.as_os_str().is_empty() {
            path.push(&self.inner_dir);
        }
        path.push(file_name);
        path
    }
}

/// Why a file under the source root was not treated as a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file sits directly in the source root with no game folder.
    NoGameFolder,
    /// The folder or filename prefix that should hold the ID isn't numeric.
    NotAGameId(String),
    /// A PC capture named by timestamp alone, with no `<gameId>_` prefix.
    NoIdPrefix,
    /// The path isn't valid UTF-8.
    NonUtf8,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoGameFolder => write!(f, "not inside a game ID folder"),
            Self::NotAGameId(s) => write!(f, "'{s}' is not a game ID"),
            Self::NoIdPrefix => write!(f, "filename has no game ID prefix"),
            Self::NonUtf8 => write!(f, "path is not valid UTF-8"),
        }
    }
}

/// Strategy for turning a source-relative path into a [`Capture`].
pub trait CaptureLayout {
    fn locate(&self, rel_path: &Path) -> Result<Capture, SkipReason>;

    /// Destination filename for a raw capture filename.
    fn normalize(&self, file_name: &str) -> String;
}

impl CaptureLayout for DeviceLayout {
    fn locate(&self, rel_path: &Path) -> Result<Capture, SkipReason> {
        let mut parts = Vec::new();
        for component in rel_path.components() {
            if let Component::Normal(part) = component {
                parts.push(part.to_str().ok_or(SkipReason::NonUtf8)?);
            }
        }
        let Some((&file_name, dirs)) = parts.split_last() else {
            return Err(SkipReason::NoGameFolder);
        };

        match self {
            DeviceLayout::SteamDeck => locate_deck(dirs, file_name),
            DeviceLayout::GamingPc => locate_pc(dirs, file_name),
        }
    }

    fn normalize(&self, file_name: &str) -> String {
        normalize_filename(*self, file_name)
    }
}

/// `<id>/screenshots/<sub dirs…>/<file>`: the ID is the first folder, the
/// device's `screenshots` container is dropped and anything deeper is kept.
fn locate_deck(dirs: &[&str], file_name: &str) -> Result<Capture, SkipReason> {
    let Some((&id_dir, rest)) = dirs.split_first() else {
        return Err(SkipReason::NoGameFolder);
    };
    let game_id = id_dir
        .parse::<GameId>()
        .map_err(|_| SkipReason::NotAGameId(id_dir.to_string()))?;
    let rest = match rest.split_first() {
        Some((&first, deeper)) if first == DECK_CONTAINER => deeper,
        _ => rest,
    };
    Ok(Capture {
        game_id,
        outer_dir: PathBuf::new(),
        inner_dir: rest.iter().collect(),
        file_name: file_name.to_string(),
    })
}

/// `<dirs…>/<id>_<timestamp>….<ext>`: the ID is the filename prefix and the
/// game folder is created inside the file's own relative directory. The
/// prefix is required here; a bare timestamp name is skipped.
fn locate_pc(dirs: &[&str], file_name: &str) -> Result<Capture, SkipReason> {
    let prefix = match pc_game_id_prefix(file_name) {
        Some(prefix) => prefix,
        None => return Err(pc_skip_reason(file_name)),
    };
    let game_id = prefix
        .parse::<GameId>()
        .map_err(|_| SkipReason::NotAGameId(prefix.to_string()))?;
    Ok(Capture {
        game_id,
        outer_dir: dirs.iter().collect(),
        inner_dir: PathBuf::new(),
        file_name: file_name.to_string(),
    })
}

fn pc_skip_reason(file_name: &str) -> SkipReason {
    match file_name.split_once('_') {
        Some((prefix, _)) if prefix.parse::<GameId>().is_ok() => SkipReason::NoIdPrefix,
        Some((prefix, _)) => SkipReason::NotAGameId(prefix.to_string()),
        None => SkipReason::NotAGameId(file_name.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;

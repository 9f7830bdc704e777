//! Source tree → destination tree copy.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use filetime::FileTime;
use shot_sorter_core::{DeviceLayout, GameFolder, GameId};
use walkdir::{DirEntry, WalkDir};

use crate::error::SyncError;
use crate::layout::CaptureLayout;
use crate::resolver::GameResolver;

/// Directories with this name are never descended into.
pub const THUMBNAILS_DIR: &str = "thumbnails";

/// Options controlling a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Count what would be created and copied without touching the destination.
    pub dry_run: bool,
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum SyncProgress {
    /// A file under the source root is being looked at.
    Visiting { path: PathBuf },
    /// A run of captures for a new game ID started.
    Resolved { id: GameId, folder: GameFolder },
    /// A capture was copied (or would be, in dry-run mode).
    Copied { from: PathBuf, to: PathBuf },
    /// The walk finished.
    Done,
}

/// Summary of a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    pub directories_created: usize,
    pub files_copied: usize,
    /// Captures whose destination already existed.
    pub files_existing: usize,
    /// Files that did not look like captures for this layout.
    pub files_skipped: usize,
    pub elapsed: Duration,
}

/// Walk `source_root` and copy every capture into `dest_root` under its
/// game's folder.
///
/// Files are visited in file-name order so captures of one game arrive
/// together. Existing destination files are never overwritten or compared.
/// The first resolution failure stops the walk.
pub fn synchronize(
    source_root: &Path,
    dest_root: &Path,
    layout: DeviceLayout,
    resolver: &mut GameResolver<'_>,
    options: &SyncOptions,
    progress: &dyn Fn(SyncProgress),
) -> Result<SyncSummary, SyncError> {
    let started = Instant::now();
    let mut summary = SyncSummary::default();
    let mut created_dirs: HashSet<PathBuf> = HashSet::new();
    let mut planned_files: HashSet<PathBuf> = HashSet::new();
    let mut last_id: Option<GameId> = None;

    let walker = WalkDir::new(source_root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_thumbnails_dir(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Ok(rel_path) = path.strip_prefix(source_root) else {
            continue;
        };
        progress(SyncProgress::Visiting {
            path: path.to_path_buf(),
        });

        let capture = match layout.locate(rel_path) {
            Ok(c) => c,
            Err(reason) => {
                log::warn!("Skipping {}: {reason}", rel_path.display());
                summary.files_skipped += 1;
                continue;
            }
        };

        let folder = resolver.resolve(capture.game_id)?;
        if last_id != Some(capture.game_id) {
            last_id = Some(capture.game_id);
            progress(SyncProgress::Resolved {
                id: capture.game_id,
                folder: folder.clone(),
            });
        }

        let file_name = layout.normalize(&capture.file_name);
        let dest_file = capture.destination(dest_root, &folder, &file_name);

        if let Some(dest_dir) = dest_file.parent() {
            if !created_dirs.contains(dest_dir) && !dest_dir.exists() {
                if !options.dry_run {
                    std::fs::create_dir_all(dest_dir)?;
                }
                log::debug!("Created {}", dest_dir.display());
                created_dirs.insert(dest_dir.to_path_buf());
                summary.directories_created += 1;
            }
        }

        if dest_file.exists() || planned_files.contains(&dest_file) {
            summary.files_existing += 1;
            continue;
        }
        if options.dry_run {
            planned_files.insert(dest_file.clone());
        } else {
            copy_preserving_times(path, &dest_file)?;
        }
        summary.files_copied += 1;
        progress(SyncProgress::Copied {
            from: path.to_path_buf(),
            to: dest_file,
        });
    }

    progress(SyncProgress::Done);
    summary.elapsed = started.elapsed();
    Ok(summary)
}

fn is_thumbnails_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == OsStr::new(THUMBNAILS_DIR)
}

/// Copy `from` to `to` and carry over access and modification times.
fn copy_preserving_times(from: &Path, to: &Path) -> Result<(), SyncError> {
    let copy_err = |source| SyncError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };
    let meta = std::fs::metadata(from).map_err(copy_err)?;
    std::fs::copy(from, to).map_err(copy_err)?;
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(to, atime, mtime).map_err(copy_err)?;
    Ok(())
}

//! Game ID → destination folder resolution.
//!
//! Order of attempts for an ID:
//!
//! 1. IDs already resolved this run (no eviction; a run is one pass).
//! 2. The local catalog.
//! 3. The store. A name with a release year is used as-is and is *not*
//!    written back to the catalog.
//! 4. Otherwise the ID is unresolved. Unattended runs abort; interactive
//!    runs ask the operator, record the answer in the catalog, and stop so
//!    the next run picks it up.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use shot_sorter_catalog::{Catalog, CatalogEntry, CatalogError, append_entry};
use shot_sorter_core::{GameFolder, GameId};
use shot_sorter_steam::{LookupOutcome, MetadataSource, Prediction};

use crate::error::SyncError;

/// What to do with an ID neither the catalog nor the store can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Stop the run (unattended / `--nocreate`).
    Abort,
    /// Ask the operator through a [`Prompter`].
    Prompt,
}

/// The operator's answer about an unresolved ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Store the store's prediction as-is.
    Accept,
    /// Store an operator-supplied name; `year` 0 means unknown.
    Correct { name: String, year: u32 },
    /// Leave the catalog alone.
    Decline,
}

/// Interactive boundary for naming unresolved games.
pub trait Prompter {
    /// `prediction` is whatever the store offered, if anything.
    fn confirm(&mut self, id: GameId, prediction: Option<&Prediction>) -> Decision;
}

/// Prompter for unattended runs. Never called under [`UnresolvedPolicy::Abort`].
pub struct DeclineAll;

impl Prompter for DeclineAll {
    fn confirm(&mut self, _id: GameId, _prediction: Option<&Prediction>) -> Decision {
        Decision::Decline
    }
}

/// Options controlling resolution.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub policy: UnresolvedPolicy,
    /// Catalog file that confirmed entries are appended to.
    pub catalog_path: PathBuf,
    /// Wait between attempts after a malformed store response.
    pub retry_delay: Duration,
    /// Extra attempts after the first malformed response.
    pub max_retries: u32,
}

impl ResolverOptions {
    pub fn new(policy: UnresolvedPolicy, catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            policy,
            catalog_path: catalog_path.into(),
            retry_delay: Duration::from_secs(10),
            max_retries: 3,
        }
    }
}

/// Resolves game IDs to destination folders for one run.
pub struct GameResolver<'a> {
    catalog: Catalog,
    source: &'a dyn MetadataSource,
    prompter: &'a mut dyn Prompter,
    options: ResolverOptions,
    resolved: HashMap<GameId, GameFolder>,
    store_requests: usize,
}

impl<'a> GameResolver<'a> {
    pub fn new(
        catalog: Catalog,
        source: &'a dyn MetadataSource,
        prompter: &'a mut dyn Prompter,
        options: ResolverOptions,
    ) -> Self {
        Self {
            catalog,
            source,
            prompter,
            options,
            resolved: HashMap::new(),
            store_requests: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of store requests issued so far, retries included.
    pub fn store_requests(&self) -> usize {
        self.store_requests
    }

    /// Resolve `id` to the folder its captures belong in.
    pub fn resolve(&mut self, id: GameId) -> Result<GameFolder, SyncError> {
        if let Some(folder) = self.resolved.get(&id) {
            return Ok(folder.clone());
        }

        if let Some(entry) = self.catalog.find_by_id(id) {
            let folder = entry.folder();
            log::debug!("Game ID {id} found in catalog: {folder}");
            self.resolved.insert(id, folder.clone());
            return Ok(folder);
        }

        log::info!("Game ID {id} not in catalog, asking the store");
        let prediction = match self.lookup(id)? {
            LookupOutcome::Found(prediction) if prediction.is_complete() => {
                let folder = prediction.folder();
                log::info!("Game ID {id} resolved by the store: {folder}");
                self.resolved.insert(id, folder.clone());
                return Ok(folder);
            }
            LookupOutcome::Found(prediction) => {
                log::warn!(
                    "Store knows game ID {id} as '{}' but has no release year",
                    prediction.name
                );
                Some(prediction)
            }
            LookupOutcome::NotFound => {
                log::warn!("Game ID {id} not found in the store");
                None
            }
        };

        self.handle_unresolved(id, prediction)
    }

    /// Query the store, retrying malformed responses with a fixed delay.
    fn lookup(&mut self, id: GameId) -> Result<LookupOutcome, SyncError> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            self.store_requests += 1;
            match self.source.app_details(id) {
                Ok(outcome) => return Ok(outcome),
                Err(e) if e.is_retryable() && attempts <= self.options.max_retries => {
                    log::warn!(
                        "{e}; retrying game ID {id} in {}s",
                        self.options.retry_delay.as_secs_f32()
                    );
                    std::thread::sleep(self.options.retry_delay);
                }
                Err(e) if e.is_retryable() => {
                    return Err(SyncError::MalformedResponse {
                        id,
                        attempts,
                        message: e.to_string(),
                    });
                }
                Err(source) => return Err(SyncError::Lookup { id, source }),
            }
        }
    }

    fn handle_unresolved(
        &mut self,
        id: GameId,
        prediction: Option<Prediction>,
    ) -> Result<GameFolder, SyncError> {
        if self.options.policy == UnresolvedPolicy::Abort {
            return Err(SyncError::UnresolvedGame { id });
        }

        let entry = match self.prompter.confirm(id, prediction.as_ref()) {
            Decision::Accept => match prediction {
                Some(p) => CatalogEntry::new(id, p.name, p.year.unwrap_or(0)),
                None => return Err(SyncError::UnresolvedGame { id }),
            },
            Decision::Correct { name, year } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(SyncError::UnresolvedGame { id });
                }
                CatalogEntry::new(id, name, year)
            }
            Decision::Decline => return Err(SyncError::UnresolvedGame { id }),
        };

        let folder = entry.folder().dir_name();
        match append_entry(&self.options.catalog_path, entry) {
            Ok(updated) => {
                log::info!("Game '{folder}' added to the catalog");
                self.catalog = updated;
                Err(SyncError::RerunRequired { id, folder })
            }
            Err(CatalogError::DuplicateEntry { .. }) => {
                log::warn!("Game ID {id} already exists in the catalog file; not updated");
                Err(SyncError::UnresolvedGame { id })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;

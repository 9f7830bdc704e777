//! Catalog data model.

use serde::{Deserialize, Serialize};
use shot_sorter_core::{GameFolder, GameId};

/// One known game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: GameId,
    pub name: String,
    /// Release year, `0` when unknown.
    #[serde(default)]
    pub year: u32,
}

impl CatalogEntry {
    pub fn new(id: GameId, name: impl Into<String>, year: u32) -> Self {
        Self {
            id,
            name: name.into(),
            year,
        }
    }

    /// Destination folder for this game's captures.
    pub fn folder(&self) -> GameFolder {
        GameFolder::new(self.name.clone(), self.year)
    }
}

/// The whole catalog document. Entry order is preserved on write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub games: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_id(&self, id: GameId) -> Option<&CatalogEntry> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// First ID that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<GameId> {
        let mut seen = std::collections::HashSet::new();
        self.games.iter().map(|g| g.id).find(|id| !seen.insert(*id))
    }

    /// Append an entry in memory. Returns `false` (and leaves the catalog
    /// untouched) when the ID is already present.
    pub fn push(&mut self, entry: CatalogEntry) -> bool {
        if self.contains(entry.id) {
            return false;
        }
        self.games.push(entry);
        true
    }
}

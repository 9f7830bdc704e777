use serde::{Deserialize, Serialize};

/// A numeric game identifier as assigned by the capture device.
///
/// For Steam titles this is the store application ID. Non-Steam shortcuts
/// get synthetic IDs which may be far outside the 32-bit app ID range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether this ID fits in the store's 32-bit application ID space.
    ///
    /// Shortcut IDs above this range make the store answer with a garbage
    /// sentinel instead of "not found", so callers should not query them.
    pub fn is_store_app(self) -> bool {
        self.0 <= u64::from(u32::MAX)
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a path segment or filename prefix is not a game ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameIdParseError(pub String);

impl std::fmt::Display for GameIdParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a numeric game ID: '{}'", self.0)
    }
}

impl std::error::Error for GameIdParseError {}

impl std::str::FromStr for GameId {
    type Err = GameIdParseError;

    /// Only plain ASCII digits are accepted; signs and whitespace are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GameIdParseError(s.to_string()));
        }
        s.parse::<u64>()
            .map(GameId)
            .map_err(|_| GameIdParseError(s.to_string()))
    }
}

/// Destination folder for a game: display name plus optional release year.
///
/// A year of `0` means unknown and is left out of the folder name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameFolder {
    pub name: String,
    pub year: u32,
}

impl GameFolder {
    pub fn new(name: impl Into<String>, year: u32) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }

    /// The directory name: `"Name (Year)"`, or just `"Name"` when the year is unknown.
    pub fn dir_name(&self) -> String {
        if self.year == 0 {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.year)
        }
    }
}

impl std::fmt::Display for GameFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dir_name())
    }
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;

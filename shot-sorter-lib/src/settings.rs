//! Run settings: paths, device layout, and store lookup tuning.
//!
//! Each field is resolved through a priority chain:
//!
//! 1. CLI override
//! 2. Environment variable (a `.env` file is loaded into the environment by the CLI)
//! 3. `~/.config/shot-sorter/settings.toml`
//! 4. Built-in default, where one exists

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use shot_sorter_core::DeviceLayout;
use shot_sorter_steam::DEFAULT_STORE_URL;

use crate::error::SyncError;

pub const ENV_SOURCE: &str = "SOURCE";
pub const ENV_DESTINATION: &str = "DESTINATION";
pub const ENV_CATALOG: &str = "GAME_IDS_JSON";
pub const ENV_DEVICE: &str = "DEVICE";
pub const ENV_STORE_URL: &str = "STORE_API_URL";
pub const ENV_RETRY_DELAY: &str = "LOOKUP_RETRY_DELAY_SECS";
pub const ENV_MAX_RETRIES: &str = "LOOKUP_MAX_RETRIES";

const DEFAULT_RETRY_DELAY_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Canonical path to the settings file: `~/.config/shot-sorter/settings.toml`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// Catalog location used when nothing else is configured.
pub fn default_catalog_path() -> PathBuf {
    config_dir().join("game-ids.json")
}

fn config_dir() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("shot-sorter")
}

/// Values given on the command line. `None` falls through to the next layer.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub layout: Option<DeviceLayout>,
}

/// `settings.toml` layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub paths: PathsSection,
    pub lookup: LookupSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub device: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LookupSection {
    pub store_url: Option<String>,
    pub retry_delay_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

impl SettingsFile {
    /// Read a settings file. A missing file is an empty one.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| SyncError::config(format!("{}: {e}", path.display())))
    }
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of the path and layout settings. `None` means unset.
#[derive(Debug, Clone)]
pub struct SettingSources {
    pub source: Option<SettingSource>,
    pub destination: Option<SettingSource>,
    pub catalog: SettingSource,
    pub layout: Option<SettingSource>,
}

/// Resolved settings.
///
/// Source, destination and layout are only needed for sorting, so they stay
/// optional here and are checked with the `require_*` accessors.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub catalog: PathBuf,
    pub layout: Option<DeviceLayout>,
    pub store_url: String,
    pub retry_delay: Duration,
    pub max_retries: u32,
    pub sources: SettingSources,
}

impl Settings {
    /// Resolve from the process environment and the default settings file.
    pub fn resolve(overrides: SettingsOverrides) -> Result<Self, SyncError> {
        let file = SettingsFile::load(&settings_path())?;
        Self::resolve_with(overrides, &|key: &str| std::env::var(key).ok(), &file)
    }

    /// Resolve against an explicit environment lookup and settings file.
    pub fn resolve_with(
        overrides: SettingsOverrides,
        env: &dyn Fn(&str) -> Option<String>,
        file: &SettingsFile,
    ) -> Result<Self, SyncError> {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let (source, source_from) = split(pick_path(
            overrides.source,
            ENV_SOURCE,
            &env,
            file.paths.source.clone(),
        ));
        let (destination, destination_from) = split(pick_path(
            overrides.destination,
            ENV_DESTINATION,
            &env,
            file.paths.destination.clone(),
        ));
        let (catalog, catalog_from) = pick_path(
            overrides.catalog,
            ENV_CATALOG,
            &env,
            file.paths.catalog.clone(),
        )
        .unwrap_or_else(|| (default_catalog_path(), SettingSource::Default));

        let (layout, layout_from) = if let Some(layout) = overrides.layout {
            (Some(layout), Some(SettingSource::Flag))
        } else if let Some(raw) = env(ENV_DEVICE) {
            (Some(parse_layout(&raw)?), Some(SettingSource::EnvVar(ENV_DEVICE)))
        } else if let Some(raw) = &file.paths.device {
            (Some(parse_layout(raw)?), Some(SettingSource::ConfigFile))
        } else {
            (None, None)
        };

        let store_url = env(ENV_STORE_URL)
            .or_else(|| file.lookup.store_url.clone())
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string());
        let retry_delay_secs = match env(ENV_RETRY_DELAY) {
            Some(raw) => parse_number(ENV_RETRY_DELAY, &raw)?,
            None => file
                .lookup
                .retry_delay_secs
                .unwrap_or(DEFAULT_RETRY_DELAY_SECS),
        };
        let max_retries = match env(ENV_MAX_RETRIES) {
            Some(raw) => parse_number(ENV_MAX_RETRIES, &raw)?,
            None => file.lookup.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };

        Ok(Self {
            source,
            destination,
            catalog,
            layout,
            store_url,
            retry_delay: Duration::from_secs(retry_delay_secs),
            max_retries,
            sources: SettingSources {
                source: source_from,
                destination: destination_from,
                catalog: catalog_from,
                layout: layout_from,
            },
        })
    }

    pub fn require_source(&self) -> Result<&Path, SyncError> {
        self.source
            .as_deref()
            .ok_or_else(|| missing(ENV_SOURCE, "source directory"))
    }

    pub fn require_destination(&self) -> Result<&Path, SyncError> {
        self.destination
            .as_deref()
            .ok_or_else(|| missing(ENV_DESTINATION, "destination directory"))
    }

    pub fn require_layout(&self) -> Result<DeviceLayout, SyncError> {
        self.layout
            .ok_or_else(|| missing(ENV_DEVICE, "device layout (DECK or GAMINGPC)"))
    }
}

fn split(picked: Option<(PathBuf, SettingSource)>) -> (Option<PathBuf>, Option<SettingSource>) {
    match picked {
        Some((path, from)) => (Some(path), Some(from)),
        None => (None, None),
    }
}

fn pick_path(
    flag: Option<PathBuf>,
    var: &'static str,
    env: &dyn Fn(&str) -> Option<String>,
    from_file: Option<PathBuf>,
) -> Option<(PathBuf, SettingSource)> {
    if let Some(p) = flag {
        return Some((p, SettingSource::Flag));
    }
    if let Some(v) = env(var) {
        return Some((PathBuf::from(v), SettingSource::EnvVar(var)));
    }
    from_file.map(|p| (p, SettingSource::ConfigFile))
}

fn parse_layout(raw: &str) -> Result<DeviceLayout, SyncError> {
    raw.parse().map_err(|e| SyncError::config(format!("{e}")))
}

fn parse_number<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T, SyncError> {
    raw.trim()
        .parse()
        .map_err(|_| SyncError::config(format!("{var} must be a whole number, got '{raw}'")))
}

fn missing(var: &str, what: &str) -> SyncError {
    SyncError::config(format!(
        "No {what} configured. Set {var} in the environment or .env, pass it on the command line, or add it to {}",
        settings_path().display()
    ))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;

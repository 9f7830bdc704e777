use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shot_sorter_lib::catalog::{CatalogEntry, append_entry, load_catalog_or_default};
use shot_sorter_lib::{GameId, Settings, SettingsOverrides};

use crate::CliError;

pub(crate) fn run_catalog_list(overrides: SettingsOverrides) -> Result<(), CliError> {
    let settings = Settings::resolve(overrides)?;
    let catalog = load_catalog_or_default(&settings.catalog)?;

    log::info!(
        "{} ({} games)",
        settings
            .catalog
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        catalog.len(),
    );
    crate::log_blank();

    let mut entries: Vec<&CatalogEntry> = catalog.games.iter().collect();
    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    for entry in entries {
        log::info!(
            "  {:>10}  {}",
            entry.id.if_supports_color(Stdout, |t| t.dimmed()),
            entry.folder(),
        );
    }
    Ok(())
}

pub(crate) fn run_catalog_add(
    overrides: SettingsOverrides,
    id: u64,
    name: String,
    year: Option<u32>,
) -> Result<(), CliError> {
    let settings = Settings::resolve(overrides)?;
    let entry = CatalogEntry::new(GameId::new(id), name.trim(), year.unwrap_or(0));
    let folder = entry.folder();

    append_entry(&settings.catalog, entry)?;
    log::info!(
        "Game '{}' added to {}",
        folder.if_supports_color(Stdout, |t| t.green()),
        settings.catalog.display(),
    );
    Ok(())
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shot_sorter_lib::catalog::load_catalog_or_default;
use shot_sorter_lib::steam::{LookupOutcome, MetadataSource};
use shot_sorter_lib::{GameId, Settings, SettingsOverrides};

use crate::CliError;

/// Show what the catalog and the store know about one game ID.
pub(crate) fn run_lookup(overrides: SettingsOverrides, id: u64) -> Result<(), CliError> {
    let id = GameId::new(id);
    let settings = Settings::resolve(overrides)?;

    let catalog = load_catalog_or_default(&settings.catalog)?;
    match catalog.find_by_id(id) {
        Some(entry) => log::info!(
            "  Catalog: {}",
            entry.folder().if_supports_color(Stdout, |t| t.green()),
        ),
        None => log::info!(
            "  Catalog: {}",
            "not present".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    let store = crate::commands::store_client(&settings)?;
    match store.app_details(id)? {
        LookupOutcome::Found(prediction) => {
            log::info!(
                "  Store:   {}",
                prediction.if_supports_color(Stdout, |t| t.cyan()),
            );
            if !prediction.is_complete() {
                log::warn!("  The store has no release year for this game");
            }
        }
        LookupOutcome::NotFound => log::info!(
            "  Store:   {}",
            "not found".if_supports_color(Stdout, |t| t.red()),
        ),
    }

    Ok(())
}

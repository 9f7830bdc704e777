use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shot_sorter_lib::{SettingSource, Settings, SettingsOverrides, settings_path};

use crate::CliError;

/// Show every resolved setting and where it came from.
pub(crate) fn run_config_show(overrides: SettingsOverrides) -> Result<(), CliError> {
    let settings = Settings::resolve(overrides)?;
    let path = settings_path();

    log::info!(
        "{}",
        "shot-sorter Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    let status = if path.exists() {
        "(exists)"
    } else {
        "(not found)"
    };
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status.if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    let show = |label: &str, value: Option<String>, source: Option<&SettingSource>| {
        match (value, source) {
            (Some(value), Some(source)) => log::info!(
                "  {label:<12} {value} {}",
                format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
            ),
            _ => log::info!(
                "  {label:<12} {}",
                "not set".if_supports_color(Stdout, |t| t.red()),
            ),
        }
    };

    show(
        "source",
        settings.source.as_ref().map(|p| p.display().to_string()),
        settings.sources.source.as_ref(),
    );
    show(
        "destination",
        settings.destination.as_ref().map(|p| p.display().to_string()),
        settings.sources.destination.as_ref(),
    );
    show(
        "catalog",
        Some(settings.catalog.display().to_string()),
        Some(&settings.sources.catalog),
    );
    show(
        "device",
        settings.layout.map(|l| format!("{} ({})", l.key(), l)),
        settings.sources.layout.as_ref(),
    );
    crate::log_blank();
    log::info!("  {:<12} {}", "store", settings.store_url);
    log::info!(
        "  {:<12} {}s delay, {} retries",
        "retries",
        settings.retry_delay.as_secs(),
        settings.max_retries
    );
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shot_sorter_lib::catalog::{load_catalog, load_catalog_or_default};
use shot_sorter_lib::{
    DeclineAll, GameResolver, Prompter, ResolverOptions, Settings, SettingsOverrides, SyncError,
    SyncOptions, SyncProgress, UnresolvedPolicy, synchronize,
};

use crate::CliError;
use crate::prompt::TerminalPrompter;

pub(crate) fn run_sync(
    overrides: SettingsOverrides,
    nocreate: bool,
    dry_run: bool,
    quiet: bool,
    started: Instant,
) -> Result<(), CliError> {
    let settings = Settings::resolve(overrides)?;
    let source = settings.require_source()?;
    let destination = settings.require_destination()?;
    let layout = settings.require_layout()?;

    log::info!(
        "Sorting {} captures from {}",
        layout,
        source.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  into {}",
        destination.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be copied".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    // Unattended runs require an existing catalog.
    let policy = if nocreate {
        UnresolvedPolicy::Abort
    } else {
        UnresolvedPolicy::Prompt
    };
    let catalog = match policy {
        UnresolvedPolicy::Abort => load_catalog(&settings.catalog)?,
        UnresolvedPolicy::Prompt => load_catalog_or_default(&settings.catalog)?,
    };
    log::debug!(
        "Loaded {} catalog entries from {}",
        catalog.len(),
        settings.catalog.display()
    );

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb
    };
    let _spinner = crate::logging::attach_spinner(&pb);

    let store = crate::commands::store_client(&settings)?;
    let mut unattended = DeclineAll;
    let mut terminal = TerminalPrompter::new(
        std::io::stdin().lock(),
        std::io::stdout(),
        Some(pb.clone()),
    );
    let prompter: &mut dyn Prompter = match policy {
        UnresolvedPolicy::Abort => &mut unattended,
        UnresolvedPolicy::Prompt => &mut terminal,
    };

    let mut options = ResolverOptions::new(policy, settings.catalog.clone());
    options.retry_delay = settings.retry_delay;
    options.max_retries = settings.max_retries;
    let mut resolver = GameResolver::new(catalog, &store, prompter, options);

    let progress_callback = |progress: SyncProgress| match progress {
        SyncProgress::Visiting { ref path } => {
            if let Some(name) = path.file_name() {
                pb.set_message(format!("Checking {}", name.to_string_lossy()));
            }
            pb.tick();
        }
        SyncProgress::Resolved { id, ref folder } => {
            pb.set_message(format!("{id} → {folder}"));
            pb.tick();
        }
        SyncProgress::Copied { ref to, .. } => {
            pb.set_message(format!("Copied {}", to.display()));
            pb.tick();
        }
        SyncProgress::Done => pb.finish_and_clear(),
    };

    let result = synchronize(
        source,
        destination,
        layout,
        &mut resolver,
        &SyncOptions { dry_run },
        &progress_callback,
    );
    pb.finish_and_clear();

    let summary = match result {
        Ok(summary) => summary,
        Err(SyncError::RerunRequired { id, folder }) => {
            log::info!(
                "Added {} (ID {id}) to {}. {}",
                folder.if_supports_color(Stdout, |t| t.green()),
                settings.catalog.display(),
                "Rerun now.".if_supports_color(Stdout, |t| t.bold()),
            );
            return Ok(());
        }
        Err(e @ SyncError::UnresolvedGame { .. }) if nocreate => {
            log::warn!("Exiting now, --nocreate is set");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let completed_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let verb = if dry_run { "would copy" } else { "copied" };
    log::info!(
        "{completed_at} - Created {} directories and {verb} {} images",
        summary.directories_created.if_supports_color(Stdout, |t| t.bold()),
        summary.files_copied.if_supports_color(Stdout, |t| t.bold()),
    );
    if summary.files_existing > 0 {
        log::info!(
            "{}",
            format!("{} already present", summary.files_existing)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if summary.files_skipped > 0 {
        log::warn!("{} files did not look like captures and were skipped", summary.files_skipped);
    }
    log::debug!("Store requests: {}", resolver.store_requests());
    log::info!("Time taken: {:.4} seconds", started.elapsed().as_secs_f64());

    Ok(())
}

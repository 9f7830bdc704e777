//! Console logger.
//!
//! Info and below go to stdout, warnings and errors to stderr. `--verbose`
//! adds timestamps and debug output from our own crates; `--logfile` mirrors
//! every line into a file with colour codes stripped.
//!
//! While a spinner is attached, console lines are printed with the spinner
//! suspended so the two don't share a terminal row.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use indicatif::ProgressBar;
use log::{Level, LevelFilter, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

/// Log targets that get the full configured level; everything else
/// (HTTP stack internals) is capped at warnings.
const OWN_TARGET_PREFIX: &str = "shot_sorter";

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Detaches the spinner from the logger when dropped.
#[must_use = "the spinner is detached as soon as the guard is dropped"]
pub(crate) struct SpinnerGuard(());

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = SPINNER.lock() {
            *slot = None;
        }
    }
}

/// Route console output around `pb` until the returned guard is dropped.
///
/// Nothing may log from inside `pb.suspend`: the bar's state lock is held
/// there and the logger would take it again.
pub(crate) fn attach_spinner(pb: &ProgressBar) -> SpinnerGuard {
    if let Ok(mut slot) = SPINNER.lock() {
        *slot = Some(pb.clone());
    }
    SpinnerGuard(())
}

fn attached_spinner() -> Option<ProgressBar> {
    SPINNER.lock().ok().and_then(|slot| slot.clone())
}

fn print_line(level: Level, line: &str) {
    match level {
        Level::Error => eprintln!("{}", line.if_supports_color(Stderr, |t| t.red())),
        Level::Warn => eprintln!("{}", line.if_supports_color(Stderr, |t| t.yellow())),
        _ => println!("{line}"),
    }
}

struct CliLogger {
    level: LevelFilter,
    verbose: bool,
    file: Option<Mutex<File>>,
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.target().starts_with(OWN_TARGET_PREFIX) {
            metadata.level() <= self.level
        } else {
            metadata.level() <= Level::Warn && metadata.level() <= self.level
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let line = if self.verbose {
            format!(
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            )
        } else {
            message
        };

        match attached_spinner() {
            Some(pb) => pb.suspend(|| print_line(record.level(), &line)),
            None => print_line(record.level(), &line),
        }

        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.write_all(&strip_ansi_escapes::strip(line.as_bytes()));
                let _ = f.write_all(b"\n");
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the CLI logger. Call once, before anything logs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = match logfile {
        Some(path) => Some(Mutex::new(File::create(path)?)),
        None => None,
    };

    log::set_boxed_logger(Box::new(CliLogger {
        level,
        verbose,
        file,
    }))
    .map_err(|e| CliError::logging(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

/// Print an empty line through the logger so it also lands in the log file.
pub(crate) fn log_blank() {
    log::info!("");
}

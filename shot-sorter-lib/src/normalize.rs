//! Capture filename normalization.
//!
//! Both devices embed a `YYYYMMDDHHMMSS` timestamp in their filenames. These
//! functions rewrite it as `YYYY-MM-DD at HH-MM-SS.<ext>` so captures sort
//! and read naturally. Anything that doesn't match is returned untouched.

use std::sync::LazyLock;

use regex::Regex;
use shot_sorter_core::DeviceLayout;

static DECK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})_1\.(\w+)").expect("static pattern")
});

static PC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+_)?(\d{4})(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})").expect("static pattern")
});

static PC_BARE_TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{14}_").expect("static pattern"));

/// Steam Deck captures: `20240721231538_1.png` → `2024-07-21 at 23-15-38.png`.
pub fn normalize_deck_filename(filename: &str) -> String {
    match DECK_RE.captures(filename) {
        Some(c) => format!(
            "{}-{}-{} at {}-{}-{}.{}",
            &c[1], &c[2], &c[3], &c[4], &c[5], &c[6], &c[7]
        ),
        None => filename.to_string(),
    }
}

/// Gaming PC captures: `612880_20240721231538_1.jpg` → `2024-07-21 at 23-15-38.png`.
///
/// The output extension is always `.png`, whatever the input had. A name
/// without a timestamp loses its `<gameId>_` prefix and is otherwise kept,
/// since the game folder already carries the ID.
///
/// The prefix is optional here so a bare timestamp still normalizes;
/// [`pc_game_id_prefix`] decides whether a file has an ID at all.
pub fn normalize_pc_filename(filename: &str) -> String {
    if let Some(c) = PC_RE.captures(filename) {
        return format!(
            "{}-{}-{} at {}-{}-{}.png",
            &c[1], &c[2], &c[3], &c[4], &c[5], &c[6]
        );
    }
    match pc_game_id_prefix(filename) {
        Some(prefix) => {
            let rest = &filename[prefix.len() + 1..];
            if rest.is_empty() || rest.starts_with('.') {
                filename.to_string()
            } else {
                rest.to_string()
            }
        }
        None => filename.to_string(),
    }
}

/// The `<gameId>` in a `<gameId>_…` PC capture name.
///
/// `None` when there is no numeric prefix, or when the name starts with a
/// bare `YYYYMMDDhhmmss_` timestamp: that is a capture without an ID, not
/// a game numbered by its timestamp.
pub fn pc_game_id_prefix(filename: &str) -> Option<&str> {
    if PC_BARE_TIMESTAMP_RE.is_match(filename) {
        return None;
    }
    let (prefix, _) = filename.split_once('_')?;
    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
        Some(prefix)
    } else {
        None
    }
}

/// Normalize a filename using the parser for `layout`.
pub fn normalize_filename(layout: DeviceLayout, filename: &str) -> String {
    match layout {
        DeviceLayout::SteamDeck => normalize_deck_filename(filename),
        DeviceLayout::GamingPc => normalize_pc_filename(filename),
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;

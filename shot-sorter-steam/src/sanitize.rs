use std::sync::LazyLock;

use regex::Regex;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("static pattern"));

/// Characters dropped outright after the substitutions have run.
const STRIPPED: &[char] = &[
    '\u{00AE}', '\u{2122}', '\u{00A9}', '\\', '/', '*', '?', ':', '"', '<', '>', '|',
];

/// Clean a store title so it is usable as a single path segment.
///
/// Colons become `" -"`, typographic quotes are folded to ASCII, `'s` becomes
/// `"s -"`, remaining apostrophes are dropped, then trademark symbols and
/// characters illegal in filenames are removed and the result is trimmed.
pub fn sanitize_name(raw: &str) -> String {
    let name = raw
        .replace(':', " -")
        .replace(['\u{2019}', '\u{2018}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace("'s", "s -")
        .replace('\'', "");
    let name: String = name.chars().filter(|c| !STRIPPED.contains(c)).collect();
    name.trim().to_string()
}

/// Pull a release year out of a free-form store date ("21 Jul, 2024",
/// "Q3 2025", "Coming soon").
///
/// Tries a `19xx`/`20xx` word match first, then the last whitespace token.
pub fn extract_year(date: &str) -> Option<u32> {
    if let Some(m) = YEAR_RE.find(date) {
        return m.as_str().parse().ok();
    }
    date.split_whitespace()
        .last()
        .and_then(|token| token.parse::<u32>().ok())
        .filter(|year| (1900..=2099).contains(year))
}

#[cfg(test)]
#[path = "tests/sanitize_tests.rs"]
mod tests;

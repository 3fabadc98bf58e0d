// Isolation of the interesting part of a passage page.
//
// The page is several thousand lines of menus and scripts; the passage,
// its footnotes and the copyright sit between the `passage-display`
// heading and the first script block that follows it.

use regex::Regex;
use std::sync::LazyLock;

/// Line that opens the interesting range (both quote styles occur).
pub static START_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<h1 class=['"]passage-display['"]>"#).expect("START_MARKER: hardcoded regex is valid")
});

/// Line that closes the interesting range.
pub static END_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<script ").expect("END_MARKER: hardcoded regex is valid"));

/// Keep the trimmed, non-blank lines between a start-marker line (inclusive)
/// and an end-marker line (exclusive).
///
/// The start test runs before the end test on the same line, so a line
/// matching both is dropped. A missing end marker runs to the end of input;
/// a missing start marker yields an empty slice, which the caller treats as
/// fatal.
pub fn interesting_slice<'a>(lines: &[&'a str], start: &Regex, end: &Regex) -> Vec<&'a str> {
    let mut in_range = false;
    let mut kept = Vec::new();

    for line in lines {
        if start.is_match(line) {
            in_range = true;
        }
        if end.is_match(line) {
            in_range = false;
        }
        if !in_range {
            continue;
        }

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            kept.push(trimmed);
        }
    }

    kept
}

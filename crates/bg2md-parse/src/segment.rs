// Joining the interesting slice into one lump and cutting it into working
// lines at closing tags.
//
// The source markup wraps lines arbitrarily, so line boundaries carry no
// meaning; closing paragraph, list and heading tags do.

use bg2md_model::PassageError;
use regex::Regex;
use std::sync::LazyLock;

/// Version-selector entries: hundreds of them, none useful.
pub static OPTION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<option.*</option>").expect("OPTION_TAG: hardcoded regex is valid"));

/// Shortest run of text ending at the next recognized closing tag.
static WORKING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*?(?:</p>|</li>|</ol>|</h1>|</h4>)").expect("WORKING_LINE: hardcoded regex is valid")
});

/// Join lines with single spaces, skipping any line after the first that
/// matches one of `filters`.
///
/// The first line is the start-marker heading and is always kept, even when
/// the page squeezes option tags onto it.
pub fn join_lump(lines: &[&str], filters: &[&Regex]) -> String {
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };

    std::iter::once(first)
        .chain(rest.iter().filter(|line| !filters.iter().any(|f| f.is_match(line))))
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a lump into working lines, each ending at a closing tag.
///
/// Fragments come out in source order, trimmed. Text after the last closing
/// tag is dropped.
pub fn split_working_lines(lump: &str) -> Result<Vec<String>, PassageError> {
    if lump.is_empty() {
        return Err(PassageError::EmptyLump);
    }

    Ok(WORKING_LINE
        .find_iter(lump)
        .map(|m| m.as_str().trim().to_string())
        .collect())
}

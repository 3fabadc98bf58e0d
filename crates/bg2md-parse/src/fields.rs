// Single pass over the working lines collecting reference, version,
// passage body, copyright, footnotes and cross-references.

use bg2md_model::{ParsedFields, PassageError};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A cheap "does this line carry X" test paired with the pattern that pulls
/// X out of it.
pub struct Detector {
    pub name: &'static str,
    detect: Regex,
    capture: Regex,
}

impl Detector {
    fn new(name: &'static str, detect: &str, capture: &str) -> Self {
        Self {
            name,
            detect: Regex::new(detect).expect("detector: hardcoded regex is valid"),
            capture: Regex::new(capture).expect("detector capture: hardcoded regex is valid"),
        }
    }

    /// Every payload in `line`, in order. Empty when the detector does not fire.
    pub fn payloads(&self, line: &str) -> Vec<String> {
        if !self.detect.is_match(line) {
            return Vec::new();
        }
        let found: Vec<String> = self.capture.captures_iter(line).map(|c| joined_groups(&c)).collect();
        tracing::trace!(detector = self.name, matches = found.len(), "Detector fired");
        found
    }
}

/// Concatenate all capture groups of a match (unmatched groups add nothing).
/// A pattern without groups yields the whole match.
fn joined_groups(caps: &Captures) -> String {
    if caps.len() == 1 {
        return caps[0].to_string();
    }
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .collect()
}

pub static REFERENCE: LazyLock<Detector> = LazyLock::new(|| {
    Detector::new(
        "reference",
        r#"(<div class='bcv'><div class="dropdown-display"><div class="dropdown-display-text">|<span class="passage-display-bcv">).*?(</div>|</span>)"#,
        r#"(?:<div class='bcv'><div class="dropdown-display"><div class="dropdown-display-text">|<span class="passage-display-bcv">)(.*?)(?:</div>|</span>)"#,
    )
});

pub static VERSION: LazyLock<Detector> = LazyLock::new(|| {
    Detector::new(
        "version",
        r#"(<div class='translation'><div class="dropdown-display"><div class="dropdown-display-text">|<span class="passage-display-version">).*?(</div>|</span>)"#,
        r#"(?:<div class='translation'><div class="dropdown-display"><div class="dropdown-display-text">|<span class="passage-display-version">)(.*?)(?:</div>|</span>)"#,
    )
});

pub static PASSAGE: LazyLock<Detector> = LazyLock::new(|| {
    Detector::new(
        "passage",
        r"(<p><span id=|<p class=|<p>\s?<span class=|<h3).*?(?:</p>|</h3>)",
        r"(?:<p><span id=|<p class=|<p>\s?<span class=|<h3).*?(?:</p>|</h3>)",
    )
});

pub static COPYRIGHT: LazyLock<Detector> = LazyLock::new(|| {
    Detector::new("copyright", r#"<div class="publisher-info"#, r"<p>(.*)</p>")
});

pub static FOOTNOTE: LazyLock<Detector> = LazyLock::new(|| {
    Detector::new(
        "footnote",
        r"<span class='footnote-text'>.*?</span>",
        r"title=.*?>(.*?)</a>( )<span class='footnote-text'>(.*)</span></li>",
    )
});

pub static CROSSREF: LazyLock<Detector> = LazyLock::new(|| {
    Detector::new(
        "crossref",
        r#"<a class="crossref-link".*?">.*?</a></li>"#,
        r#"<a class="crossref-link".*?">(.*)?</a></li>"#,
    )
});

/// Scan working lines once, left to right.
///
/// Reference, version and copyright keep the last value seen anywhere in the
/// page. The site emits the same value in its legacy and current markup, so
/// last-wins and first-wins normally agree; last-wins is what the tool has
/// always done. Passage text, footnotes and cross-references accumulate in
/// document order.
pub fn collect_fields<S: AsRef<str>>(working_lines: &[S]) -> Result<ParsedFields, PassageError> {
    let mut fields = ParsedFields::default();

    for line in working_lines {
        let line = line.as_ref();

        for reference in REFERENCE.payloads(line) {
            fields.full_reference = reference;
        }
        for version in VERSION.payloads(line) {
            fields.version = version;
        }
        for fragment in PASSAGE.payloads(line) {
            fields.passage.push_str(&fragment);
        }
        for copyright in COPYRIGHT.payloads(line) {
            fields.copyright = copyright;
        }
        fields.footnotes.extend(FOOTNOTE.payloads(line));
        fields.crossrefs.extend(CROSSREF.payloads(line));
    }

    if fields.passage.is_empty() {
        return Err(PassageError::PassageNotFound);
    }

    tracing::info!(
        reference = %fields.full_reference,
        version = %fields.version,
        passage_bytes = fields.passage.len(),
        footnotes = fields.footnotes.len(),
        crossrefs = fields.crossrefs.len(),
        "Collected fields"
    );
    tracing::debug!(passage = %fields.passage, "Raw passage");

    Ok(fields)
}

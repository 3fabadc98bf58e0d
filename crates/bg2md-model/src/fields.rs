use serde::{Deserialize, Serialize};

/// Everything pulled out of one passage page.
///
/// `passage` and `footnotes` start as raw HTML fragments and are replaced by
/// their Markdown form before rendering. `crossrefs` are used as found.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedFields {
    /// Passage reference as displayed by the site (e.g. "John 3:1-3").
    pub full_reference: String,
    /// Translation name (e.g. "New English Translation (NET Bible)").
    pub version: String,
    /// Passage body, concatenated in verse order.
    pub passage: String,
    pub copyright: String,
    pub footnotes: Vec<String>,
    pub crossrefs: Vec<String>,
}

use serde::{Deserialize, Serialize};

/// Bible version looked up when none is given.
pub const DEFAULT_VERSION: &str = "NET";

/// Output toggles, fixed once at startup and read by every later stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render the words of Jesus in bold.
    pub bold_words: bool,
    /// Append the publisher's copyright notice.
    pub copyright: bool,
    /// Keep editorial sub-headings as `##` headings.
    pub headers: bool,
    pub footnotes: bool,
    /// Keep verse and chapter numbers.
    pub numbering: bool,
    pub crossrefs: bool,
    /// Put chapters and verses on their own lines as H5/H6 headings.
    pub newline: bool,
    /// BibleGateway version code (e.g. "NET", "NIVUK").
    pub version_code: String,
    /// Local HTML file to read instead of doing a live lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_file: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bold_words: false,
            copyright: true,
            headers: true,
            footnotes: true,
            numbering: true,
            crossrefs: true,
            newline: false,
            version_code: DEFAULT_VERSION.to_string(),
            test_file: None,
        }
    }
}

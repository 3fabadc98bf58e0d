use serde::{Deserialize, Serialize};

/// Where a passage page came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "location")]
pub enum Origin {
    /// Live lookup URL.
    Url(String),
    /// Local HTML file (offline/test mode).
    File(String),
}

/// A passage page as retrieved, already normalized to NFC UTF-8 text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub origin: Origin,
    /// RFC 3339 timestamp of the retrieval.
    pub fetched_at: String,
    pub text: String,
}

impl RawDocument {
    /// Split the body into lines. `\n`, `\r\n` and a lone `\r` all end a line;
    /// the empty pieces a `\r\n` pair leaves behind are harmless because the
    /// extractor drops blank lines.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split(['\r', '\n']).collect()
    }

    /// Short human-readable description of the origin, for logging.
    pub fn describe_origin(&self) -> &str {
        match &self.origin {
            Origin::Url(url) => url,
            Origin::File(path) => path,
        }
    }
}

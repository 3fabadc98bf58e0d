use thiserror::Error;

/// Fatal conditions for a single passage conversion.
///
/// None of these are retried; the caller reports the message and stops.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PassageError {
    /// The start marker never appeared in the raw document.
    #[error("found no useful lines in HTML data")]
    NoContentFound,

    /// Nothing was left to split after option lists were filtered out.
    #[error("found no 'interesting' text")]
    EmptyLump,

    /// No working line carried passage text.
    #[error("cannot parse passage text")]
    PassageNotFound,

    /// The page could not be retrieved (network or local file).
    #[error("passage lookup failed: {0}")]
    UpstreamFetchFailed(String),
}

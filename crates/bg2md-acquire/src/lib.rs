use bg2md_model::PassageError;

pub mod biblegateway;
pub mod local;
pub mod normalize;
pub mod output;
pub mod types;

use types::{Origin, RawDocument};

/// Where to get the passage page from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Live lookup of `reference` in Bible version `version`.
    Live { reference: Vec<String>, version: String },
    /// A saved HTML file; no network access.
    File(String),
}

/// Retrieve a passage page.
///
/// Any failure (bad status, transport error, unreadable file) is reported as
/// `PassageError::UpstreamFetchFailed` carrying the full error chain.
pub async fn acquire(source: &Source) -> Result<RawDocument, PassageError> {
    let (origin, text) = match source {
        Source::Live { reference, version } => {
            let url = biblegateway::lookup_url(reference, version).map_err(upstream)?;
            tracing::info!(url = %url, "Calling BibleGateway");
            let text = biblegateway::fetch_page(&url).await.map_err(upstream)?;
            (Origin::Url(url.to_string()), text)
        }
        Source::File(path) => {
            tracing::info!(path = %path, "Using test data");
            let text = local::read_page(path).await.map_err(upstream)?;
            (Origin::File(path.clone()), text)
        }
    };

    tracing::info!(bytes = text.len(), "Received HTML");

    Ok(RawDocument {
        origin,
        fetched_at: chrono::Utc::now().to_rfc3339(),
        text,
    })
}

fn upstream(err: anyhow::Error) -> PassageError {
    PassageError::UpstreamFetchFailed(format!("{err:#}"))
}

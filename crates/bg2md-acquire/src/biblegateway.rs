use anyhow::{Context, Result};
use reqwest::Url;

use crate::normalize;

const BASE_URL: &str = "https://www.biblegateway.com/passage/";

/// Build the print-interface lookup URL for a passage.
///
/// `reference` words are joined without separators, so "John 3:16" and
/// "John3:16" give the same lookup and the caller never needs to quote.
pub fn lookup_url(reference: &[String], version: &str) -> Result<Url> {
    let search = reference.concat();
    Url::parse_with_params(
        BASE_URL,
        &[
            ("interface", "print"),
            ("version", version),
            ("search", search.as_str()),
        ],
    )
    .context("Failed to build lookup URL")
}

/// Fetch a passage page and return its normalized body.
pub async fn fetch_page(url: &Url) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent("bg2md/0.1 (passage to markdown tool)")
        .build()?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .context("Failed to fetch page")?;

    let status = response.status();
    anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

    let bytes = response.bytes().await.context("Failed to read response body")?;
    Ok(normalize::decode_bytes(&bytes))
}

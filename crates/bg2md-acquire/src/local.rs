use anyhow::{Context, Result};

use crate::normalize;

/// Read a saved passage page from disk (offline/test mode).
pub async fn read_page(path: &str) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read test file {path}"))?;
    Ok(normalize::decode_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_page() {
        let path = std::env::temp_dir().join(format!("bg2md-local-{}.html", std::process::id()));
        std::fs::write(&path, "\u{FEFF}<p>In the beginning</p>\n").unwrap();

        let text = read_page(&path.to_string_lossy()).await.unwrap();
        assert_eq!(text, "<p>In the beginning</p>\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_read_missing_page() {
        let err = read_page("/definitely/not/here.html").await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read test file"));
    }
}

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the raw HTML of a fetched page to `path` so it can be replayed later
/// with `--test` instead of calling the service again.
///
/// Creates missing parent directories.
pub fn cache_html(path: &str, html: &str) -> Result<()> {
    let path = Path::new(path);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Cached raw HTML");
    Ok(())
}

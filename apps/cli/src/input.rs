use std::path::Path;

use anyhow::Result;
use tokio::fs;

/// Read the input file and return its non-blank lines, trimmed.
pub async fn read_links(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).await?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

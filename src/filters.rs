use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Splits a `--fs` value into labels. An empty string means no filtering;
/// otherwise elements are taken verbatim, empty ones included.
pub fn parse_filter_list(list: &str) -> HashSet<String> {
    if list.is_empty() {
        return HashSet::new();
    }
    list.split(',').map(str::to_string).collect()
}

/// One label per line. Blank lines and `#` comments are skipped.
pub fn parse_filter_file(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_filter_file(path: &Path) -> Result<HashSet<String>> {
    let start_time = Instant::now();
    info!(action = "load", component = "filter_file", file_path = ?path, "Loading filter labels from file");

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter file {:?}", path))?;
    let labels = parse_filter_file(&content);

    info!(
        action = "loaded",
        component = "filter_file",
        label_count = labels.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded filter labels from file"
    );
    Ok(labels)
}

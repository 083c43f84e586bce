// src/file/mod.rs
use anyhow::{Context, Result};
use serde_json::Value;
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::model::{parse_timestamp, ResultEntry};

pub const DEFAULT_PLOT_FILE: &str = "plots.json";
pub const EXPORT_FILE_NAME: &str = "ai_generated_plots.json";
pub const EXPORT_MIME: &str = "application/json";

#[derive(Debug)]
struct CachedLoad {
    path: PathBuf,
    content: String,
    entries: Vec<ResultEntry>,
}

// Loads result entries from the plot file. Repeated loads of an unchanged
// file reuse the parsed entries; the cache is keyed by path + content and
// invalidates itself whenever the file content differs.
#[derive(Debug)]
pub struct ResultLoader {
    cache: Option<CachedLoad>,
    caching: bool,
}

impl ResultLoader {
    pub fn new() -> Self {
        Self {
            cache: None,
            caching: true,
        }
    }

    /// Loader that re-parses on every call; used by tests.
    pub fn uncached() -> Self {
        Self {
            cache: None,
            caching: false,
        }
    }

    /// Load, validate and sort the result list. A missing file is not an
    /// error and yields an empty snapshot; malformed JSON is propagated.
    /// The returned slice is read-only and valid until the next load.
    pub fn load(&mut self, path: &Path) -> Result<&[ResultEntry]> {
        if !path.exists() {
            self.cache = None;
            return Ok(&[]);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plot file: {}", path.display()))?;

        let reusable = self.caching
            && self.cache.as_ref().map_or(false, |cached| {
                cached.path.as_path() == path && cached.content == content
            });

        if !reusable {
            let entries = parse_results(&content)
                .with_context(|| format!("Failed to parse plot file: {}", path.display()))?;
            self.cache = Some(CachedLoad {
                path: path.to_path_buf(),
                content,
                entries,
            });
        }

        Ok(self
            .cache
            .as_ref()
            .map(|cached| cached.entries.as_slice())
            .unwrap_or(&[]))
    }
}

fn parse_results(content: &str) -> Result<Vec<ResultEntry>> {
    let raw: Value = serde_json::from_str(content).context("Invalid JSON")?;

    // A single top-level object is treated as a one-element list
    let items = match raw {
        Value::Array(items) => items,
        single => vec![single],
    };

    let mut entries = Vec::new();
    for item in items {
        if item.get("plot").is_none() {
            continue;
        }
        match serde_json::from_value::<ResultEntry>(item) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("Discarding result entry with invalid shape: {}", err),
        }
    }

    // Newest first; unparsable timestamps carry the epoch floor and sort
    // last, keeping their original relative order
    entries.sort_by_key(|entry| Reverse(parse_timestamp(entry)));

    Ok(entries)
}

/// Serialize the full (unfiltered) result list as the downloadable artifact.
pub fn export_results(entries: &[ResultEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize result list")
}

pub fn write_export(entries: &[ResultEntry], path: &Path) -> Result<()> {
    let json = export_results(entries)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write export file: {}", path.display()))
}

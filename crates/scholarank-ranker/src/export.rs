//! Output artifacts: JSON rows, CSV rows, topic bundles.

use std::collections::BTreeMap;
use std::path::Path;

use scholarank_common::Result;
use serde::Serialize;
use tracing::info;

use crate::pipeline::{BundleEntry, RankedPaper};

/// Fixed CSV header; matches the field order of `RankedPaper`.
pub const CSV_COLUMNS: [&str; 10] = [
    "score",
    "relevance",
    "impact",
    "recency",
    "year",
    "citations",
    "title",
    "venue",
    "url",
    "score_note",
];

/// Output encodings, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// `.json` (any case) is JSON; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }
}

/// Write rows in the format the path's extension asks for.
pub fn write_rows(path: &Path, rows: &[RankedPaper]) -> Result<()> {
    match OutputFormat::from_path(path) {
        OutputFormat::Json => write_json(path, rows),
        OutputFormat::Csv => write_csv(path, rows),
    }
}

/// Pretty JSON array of flat row objects.
pub fn write_json(path: &Path, rows: &[RankedPaper]) -> Result<()> {
    write_pretty_json(path, rows)?;
    info!(path = %path.display(), rows = rows.len(), "Wrote JSON results");
    Ok(())
}

/// CSV with the `CSV_COLUMNS` header, written even when there are no rows.
/// Missing year or citation count is an empty cell.
pub fn write_csv(path: &Path, rows: &[RankedPaper]) -> Result<()> {
    ensure_parent(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    wtr.write_record(CSV_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = rows.len(), "Wrote CSV results");
    Ok(())
}

/// Topic bundles as a pretty JSON object keyed by hit.
pub fn write_bundles(path: &Path, bundles: &BTreeMap<String, Vec<BundleEntry>>) -> Result<()> {
    write_pretty_json(path, bundles)?;
    info!(path = %path.display(), topics = bundles.len(), "Wrote topic bundles");
    Ok(())
}

fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    std::fs::write(path, body)?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

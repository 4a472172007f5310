//! Local corpus files.
//!
//! Accepted shapes: a JSON array of paper objects, or an object whose `data`
//! key holds such an array (the shape Semantic Scholar search returns).
//! Array entries that are not objects are skipped.

use std::path::Path;

use scholarank_common::{Result, ScholarankError};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::models::PaperRecord;

/// Read and validate a corpus file.
#[instrument]
pub fn load_corpus(path: &Path) -> Result<Vec<PaperRecord>> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    let papers = parse_corpus(value)?;
    debug!(count = papers.len(), "Loaded corpus");
    Ok(papers)
}

/// Validate the corpus shape and coerce each entry.
pub fn parse_corpus(value: Value) -> Result<Vec<PaperRecord>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return Err(invalid_shape()),
        },
        _ => return Err(invalid_shape()),
    };

    let total = items.len();
    let papers: Vec<PaperRecord> = items
        .iter()
        .filter(|item| item.is_object())
        .map(PaperRecord::from_json)
        .collect();

    if papers.len() < total {
        warn!(skipped = total - papers.len(), "Skipped non-object corpus entries");
    }
    Ok(papers)
}

/// Write records back out in the corpus shape `load_corpus` reads.
pub fn write_corpus(path: &Path, papers: &[PaperRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut body = serde_json::to_string_pretty(papers)?;
    body.push('\n');
    std::fs::write(path, body)?;
    Ok(())
}

fn invalid_shape() -> ScholarankError {
    ScholarankError::InvalidCorpus(
        "input JSON must be a list of paper objects (or an object with key 'data')".to_string(),
    )
}

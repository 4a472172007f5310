//! Corpus pipeline: score every record, rank, group by topic.

use std::collections::BTreeMap;

use scholarank_ingestion::PaperRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scorer::score_paper;
use crate::weights::ScoreConfig;

/// One exported row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPaper {
    pub score: u32,
    pub relevance: u32,
    pub impact: u32,
    pub recency: u32,
    pub year: Option<i64>,
    pub citations: Option<i64>,
    pub title: String,
    pub venue: String,
    pub url: String,
    pub score_note: String,
    #[serde(skip)]
    pub hits: Vec<String>,
}

impl RankedPaper {
    fn from_scored(paper: &PaperRecord, cfg: &ScoreConfig, reference_year: i64) -> Self {
        let s = score_paper(paper, cfg, reference_year);
        Self {
            score: s.total,
            relevance: s.relevance,
            impact: s.impact,
            recency: s.recency,
            year: paper.year,
            citations: paper.citation_count,
            title: paper.title.clone().unwrap_or_default(),
            venue: paper.venue.clone().unwrap_or_default(),
            url: paper.link().unwrap_or_default().to_string(),
            score_note: s.note,
            hits: s.hits,
        }
    }

    fn sort_key(&self) -> (u32, i64) {
        (self.score, self.year.unwrap_or(0))
    }
}

/// Score and rank a corpus: highest score first, newer year first on ties.
/// Rows tied on both keep their input order.
pub fn rank_papers(papers: &[PaperRecord], cfg: &ScoreConfig, reference_year: i64) -> Vec<RankedPaper> {
    let mut rows: Vec<RankedPaper> = papers
        .iter()
        .map(|p| RankedPaper::from_scored(p, cfg, reference_year))
        .collect();
    rows.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

    debug!(
        count = rows.len(),
        top = rows.first().map(|r| r.score).unwrap_or(0),
        "Ranked corpus"
    );
    rows
}

/// A ranked row filed under one of its hits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleEntry {
    pub score: u32,
    pub year: Option<i64>,
    pub title: String,
    pub url: String,
}

/// Group ranked rows under every hit they matched, keeping rank order.
pub fn topic_bundles(rows: &[RankedPaper]) -> BTreeMap<String, Vec<BundleEntry>> {
    let mut bundles: BTreeMap<String, Vec<BundleEntry>> = BTreeMap::new();
    for row in rows {
        for hit in &row.hits {
            bundles.entry(hit.clone()).or_default().push(BundleEntry {
                score: row.score,
                year: row.year,
                title: row.title.clone(),
                url: row.url.clone(),
            });
        }
    }
    bundles
}

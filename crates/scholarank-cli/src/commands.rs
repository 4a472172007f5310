//! `search` and `analyze` subcommand bodies.

use std::path::Path;

use anyhow::Context;
use scholarank_ingestion::corpus::{load_corpus, write_corpus};
use scholarank_ingestion::sources::LiteratureSource;
use scholarank_ranker::export::{write_bundles, write_csv, write_json, write_rows};
use scholarank_ranker::pipeline::topic_bundles;
use scholarank_ranker::{rank_papers, RankedPaper, ScoreConfig};
use tracing::{info, warn};

pub const RESULTS_JSON: &str = "results.json";
pub const RESULTS_CSV: &str = "results.csv";
pub const CORPUS_JSON: &str = "corpus.json";

/// Search a live source, rank what comes back and write
/// `results.json`, `results.csv` and the raw `corpus.json` under `outdir`.
///
/// A rate-limited source degrades to an empty result set; any other
/// source failure aborts.
pub async fn run_search(
    source: &dyn LiteratureSource,
    query: &str,
    limit: usize,
    outdir: &Path,
    cfg: &ScoreConfig,
    reference_year: i64,
) -> anyhow::Result<Vec<RankedPaper>> {
    let papers = match source.search(query, limit).await {
        Ok(papers) => papers,
        Err(e) if e.is_rate_limited() => {
            warn!(source = source.name(), "{e}");
            warn!("Continuing with an empty result set");
            Vec::new()
        }
        Err(e) => {
            return Err(e).with_context(|| format!("{} search failed", source.name()));
        }
    };
    info!(source = source.name(), query, count = papers.len(), "Search returned");

    let rows = rank_papers(&papers, cfg, reference_year);
    write_corpus(&outdir.join(CORPUS_JSON), &papers)?;
    write_json(&outdir.join(RESULTS_JSON), &rows)?;
    write_csv(&outdir.join(RESULTS_CSV), &rows)?;
    log_top(&rows);
    Ok(rows)
}

/// Score a local corpus file. The output format follows the extension of
/// `output`; `bundles` additionally writes the per-topic grouping.
pub fn run_analyze(
    input: &Path,
    output: &Path,
    bundles: Option<&Path>,
    cfg: &ScoreConfig,
    reference_year: i64,
) -> anyhow::Result<Vec<RankedPaper>> {
    let papers = load_corpus(input)
        .with_context(|| format!("loading corpus {}", input.display()))?;
    let rows = rank_papers(&papers, cfg, reference_year);

    write_rows(output, &rows)?;
    if let Some(path) = bundles {
        write_bundles(path, &topic_bundles(&rows))?;
    }
    log_top(&rows);
    Ok(rows)
}

fn log_top(rows: &[RankedPaper]) {
    match rows.first() {
        Some(top) => info!(papers = rows.len(), top_score = top.score, top = %top.title, "Ranking complete"),
        None => info!("Ranking complete: no papers"),
    }
}

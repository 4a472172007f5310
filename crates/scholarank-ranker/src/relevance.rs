//! Keyword relevance: exact substring hits of configured phrases.

use std::collections::{BTreeMap, HashSet};

use crate::normalise::normalise_phrase;
use crate::weights::{RelevancePolicy, ScoreConfig};

/// Prefix of hits produced by preferred-author matches.
pub const AUTHOR_HIT_PREFIX: &str = "author:";

/// Relevance points plus the hits that earned them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelevanceOutcome {
    /// Already capped at `weights.relevance_max`.
    pub points: u32,
    /// Unique hits, heaviest first, ties in lexical order.
    pub hits: Vec<String>,
}

/// Candidate phrases with their weights, normalised and de-duplicated.
///
/// `weighted`: the keyword map, plus topic keywords at `points_per_hit`.
/// `flat`: the union of both lists, every phrase weighing `points_per_hit`.
/// Empty phrases and stopwords never match.
pub fn candidate_keywords(cfg: &ScoreConfig) -> BTreeMap<String, u32> {
    let stopwords: HashSet<String> = cfg
        .relevance
        .stopwords
        .iter()
        .map(|s| normalise_phrase(s))
        .collect();
    let pph = cfg.relevance.points_per_hit;

    let weighted = cfg.keywords.iter().map(|(k, w)| match cfg.relevance.policy {
        RelevancePolicy::Weighted => (k.as_str(), *w),
        RelevancePolicy::Flat => (k.as_str(), pph),
    });
    let topics = cfg.topic_keywords.iter().map(|k| (k.as_str(), pph));

    let mut out = BTreeMap::new();
    for (phrase, weight) in weighted.chain(topics) {
        let k = normalise_phrase(phrase);
        if k.is_empty() || stopwords.contains(&k) {
            continue;
        }
        out.entry(k).or_insert(weight);
    }
    out
}

/// Score already-tokenized text (and the paper's authors) against `cfg`.
pub fn relevance_points<'a>(
    text: &str,
    authors: impl IntoIterator<Item = &'a str>,
    cfg: &ScoreConfig,
) -> RelevanceOutcome {
    let pph = cfg.relevance.points_per_hit;

    let mut hits: Vec<(String, u32)> = candidate_keywords(cfg)
        .into_iter()
        .filter(|(k, _)| text.contains(k.as_str()))
        .collect();

    if !cfg.preferred_authors.is_empty() {
        let paper_authors: HashSet<String> =
            authors.into_iter().map(normalise_phrase).collect();
        let preferred: HashSet<String> = cfg
            .preferred_authors
            .iter()
            .map(|a| normalise_phrase(a))
            .filter(|a| !a.is_empty())
            .collect();
        for name in preferred.intersection(&paper_authors) {
            hits.push((format!("{AUTHOR_HIT_PREFIX}{name}"), pph));
        }
    }

    hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let raw = match cfg.relevance.policy {
        RelevancePolicy::Weighted => hits.iter().fold(0u32, |acc, (_, w)| acc.saturating_add(*w)),
        RelevancePolicy::Flat => {
            let counted = (hits.len() as u32).min(cfg.relevance.max_unique_hits);
            counted.saturating_mul(pph)
        }
    };

    RelevanceOutcome {
        points: raw.min(cfg.weights.relevance_max),
        hits: hits.into_iter().map(|(k, _)| k).collect(),
    }
}

//! Scoring configuration: category caps, keyword weights, stopwords.
//!
//! Every section carries `#[serde(default)]`, so a config file only needs
//! the fields it overrides. `{"weights": {"impact_max": 30}}` changes the
//! impact cap and leaves everything else, including the other caps, alone.

use std::collections::BTreeMap;

use scholarank_common::{Result, ScholarankError};
use serde::{Deserialize, Serialize};

/// Hard ceiling of the total score.
pub const MAX_TOTAL: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub weights: CategoryMax,
    pub relevance: RelevanceConfig,
    /// Keyword phrase → points when the phrase appears.
    pub keywords: BTreeMap<String, u32>,
    /// Extra phrases with no explicit weight.
    pub topic_keywords: Vec<String>,
    /// Author names that count as a relevance hit when they co-author a paper.
    pub preferred_authors: Vec<String>,
}

/// Maximum points per sub-score category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryMax {
    pub relevance_max: u32,
    pub impact_max: u32,
    pub recency_max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    pub policy: RelevancePolicy,
    /// Points per unique hit (`flat`), and the weight of unweighted hits (`weighted`).
    pub points_per_hit: u32,
    /// `flat` only: hits beyond this many earn nothing.
    pub max_unique_hits: u32,
    /// How many hits the score note lists.
    pub max_reported_hits: usize,
    pub stopwords: Vec<String>,
}

/// How keyword hits turn into relevance points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelevancePolicy {
    /// Sum of the weights of matched keywords.
    #[default]
    Weighted,
    /// `min(max_unique_hits, hits) * points_per_hit`.
    Flat,
}

impl Default for CategoryMax {
    fn default() -> Self {
        Self {
            relevance_max: 60,
            impact_max: 20,
            recency_max: 20,
        }
    }
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            policy: RelevancePolicy::Weighted,
            points_per_hit: 6,
            max_unique_hits: 10,
            max_reported_hits: 6,
            stopwords: [
                "and", "the", "with", "from", "into", "for", "to", "of", "in", "on", "by",
                "using", "based", "approach", "framework", "system", "model", "data",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        let keywords: BTreeMap<String, u32> = [
            // multi-word, specific concepts
            ("emotion regulation", 18),
            ("affective computing", 18),
            ("ecological momentary assessment", 18),
            ("experience sampling", 14),
            ("digital mental health", 16),
            ("resilience", 10),
            ("mental health", 10),
            ("wearable", 8),
            ("multimodal", 8),
            // generic
            ("emotion", 3),
        ]
        .iter()
        .map(|(k, w)| (k.to_string(), *w))
        .collect();

        Self {
            weights: CategoryMax::default(),
            relevance: RelevanceConfig::default(),
            keywords,
            topic_keywords: vec![],
            preferred_authors: vec![],
        }
    }
}

impl ScoreConfig {
    /// Reject caps the total could never honour.
    pub fn validate(&self) -> Result<()> {
        let caps = [
            ("relevance_max", self.weights.relevance_max),
            ("impact_max", self.weights.impact_max),
            ("recency_max", self.weights.recency_max),
        ];
        for (name, cap) in caps {
            if cap > MAX_TOTAL {
                return Err(ScholarankError::Config(format!(
                    "weights.{name} = {cap} exceeds the total cap of {MAX_TOTAL}"
                )));
            }
        }

        let sum: u32 = caps.iter().map(|(_, cap)| cap).sum();
        if sum > MAX_TOTAL {
            tracing::debug!(sum, "Category caps exceed {MAX_TOTAL}; totals will be clipped");
        }
        if self.keywords.is_empty() && self.topic_keywords.is_empty() {
            tracing::warn!("No keywords configured; relevance will always be 0");
        }
        Ok(())
    }
}

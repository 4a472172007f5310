//! Per-paper score: relevance + impact + recency, capped at 100.

use scholarank_ingestion::PaperRecord;
use serde::Serialize;

use crate::normalise::tokenize;
use crate::relevance::relevance_points;
use crate::weights::{ScoreConfig, MAX_TOTAL};

/// Years over which recency decays to zero.
pub const RECENCY_WINDOW_YEARS: i64 = 10;

/// (minimum citations, percent of `impact_max`), highest tier first.
const IMPACT_TIERS: [(i64, u64); 7] = [
    (500, 100),
    (200, 85),
    (100, 70),
    (50, 55),
    (20, 40),
    (10, 25),
    (1, 10),
];

/// Scoring breakdown for one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub total: u32,
    pub relevance: u32,
    pub impact: u32,
    pub recency: u32,
    pub hits: Vec<String>,
    pub note: String,
}

/// Bucketed citation impact in `[0, max_points]`.
///
/// Stepwise rather than linear so a highly cited paper cannot drown out
/// relevance. Missing or negative counts score 0.
pub fn impact_points(citations: Option<i64>, max_points: u32) -> u32 {
    let c = citations.unwrap_or(0).max(0);
    let pct = IMPACT_TIERS
        .iter()
        .find(|(min, _)| c >= *min)
        .map(|(_, pct)| *pct)
        .unwrap_or(0);
    (u64::from(max_points) * pct / 100) as u32
}

/// Linear decay from `max_points` (this year) to 0 (ten or more years old).
///
/// `reference_year` is always supplied by the caller. Missing or
/// non-positive years score 0. Halves round to even.
pub fn recency_points(year: Option<i64>, max_points: u32, reference_year: i64) -> u32 {
    let y = year.unwrap_or(0);
    if y <= 0 {
        return 0;
    }
    let age = (reference_year - y).max(0);
    if age >= RECENCY_WINDOW_YEARS {
        return 0;
    }

    let scaled = i64::from(max_points) * (RECENCY_WINDOW_YEARS - age);
    let (q, r) = (scaled / RECENCY_WINDOW_YEARS, scaled % RECENCY_WINDOW_YEARS);
    let rounded = if r * 2 > RECENCY_WINDOW_YEARS || (r * 2 == RECENCY_WINDOW_YEARS && q % 2 == 1) {
        q + 1
    } else {
        q
    };
    rounded as u32
}

/// Score one paper. Pure: the same record, config and year always give the same result.
pub fn score_paper(paper: &PaperRecord, cfg: &ScoreConfig, reference_year: i64) -> ScoreResult {
    let text = tokenize(&paper.scoring_text());
    let rel = relevance_points(&text, paper.author_names(), cfg);

    let relevance = rel.points.min(cfg.weights.relevance_max);
    let impact = impact_points(paper.citation_count, cfg.weights.impact_max)
        .min(cfg.weights.impact_max);
    let recency = recency_points(paper.year, cfg.weights.recency_max, reference_year)
        .min(cfg.weights.recency_max);
    let total = relevance
        .saturating_add(impact)
        .saturating_add(recency)
        .min(MAX_TOTAL);

    let mut note_bits = Vec::new();
    if !rel.hits.is_empty() {
        let shown: Vec<&str> = rel
            .hits
            .iter()
            .take(cfg.relevance.max_reported_hits)
            .map(String::as_str)
            .collect();
        note_bits.push(format!("hits: {}", shown.join(", ")));
    }
    if let Some(c) = paper.citation_count {
        note_bits.push(format!("citations={c}"));
    }
    if let Some(y) = paper.year.filter(|y| *y > 0) {
        note_bits.push(format!("year={y}"));
    }

    ScoreResult {
        total,
        relevance,
        impact,
        recency,
        hits: rel.hits,
        note: note_bits.join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 2026;

    fn paper(abstract_text: &str, citations: Option<i64>, year: Option<i64>) -> PaperRecord {
        PaperRecord {
            abstract_text: Some(abstract_text.to_string()),
            citation_count: citations,
            year,
            ..Default::default()
        }
    }

    #[test]
    fn test_impact_tiers_at_default_max() {
        let expected = [
            (0, 0), (1, 2), (9, 2), (10, 5), (19, 5), (20, 8), (50, 11),
            (100, 14), (199, 14), (200, 17), (499, 17), (500, 20), (100_000, 20),
        ];
        for (c, pts) in expected {
            assert_eq!(impact_points(Some(c), 20), pts, "citations={c}");
        }
        assert_eq!(impact_points(None, 20), 0);
        assert_eq!(impact_points(Some(-40), 20), 0);
    }

    #[test]
    fn test_impact_monotonic() {
        let mut last = 0;
        for c in 0..1_000 {
            let pts = impact_points(Some(c), 33);
            assert!(pts >= last, "dropped at {c}");
            assert!(pts <= 33);
            last = pts;
        }
    }

    #[test]
    fn test_recency_decay() {
        assert_eq!(recency_points(Some(YEAR), 20, YEAR), 20);
        assert_eq!(recency_points(Some(YEAR - 2), 20, YEAR), 16);
        assert_eq!(recency_points(Some(YEAR - 9), 20, YEAR), 2);
        assert_eq!(recency_points(Some(YEAR - 10), 20, YEAR), 0);
        assert_eq!(recency_points(Some(YEAR - 40), 20, YEAR), 0);
        // future years are age 0
        assert_eq!(recency_points(Some(YEAR + 3), 20, YEAR), 20);
    }

    #[test]
    fn test_recency_missing_or_nonpositive_year() {
        assert_eq!(recency_points(None, 20, YEAR), 0);
        assert_eq!(recency_points(Some(0), 20, YEAR), 0);
        assert_eq!(recency_points(Some(-300), 20, YEAR), 0);
    }

    #[test]
    fn test_recency_rounds_half_to_even() {
        // 15 * 0.5 = 7.5 -> 8, 15 * 0.7 = 10.5 -> 10, 15 * 0.9 = 13.5 -> 14
        assert_eq!(recency_points(Some(YEAR - 5), 15, YEAR), 8);
        assert_eq!(recency_points(Some(YEAR - 3), 15, YEAR), 10);
        assert_eq!(recency_points(Some(YEAR - 1), 15, YEAR), 14);
    }

    #[test]
    fn test_recency_non_increasing_in_age() {
        let mut last = u32::MAX;
        for age in 0..15 {
            let pts = recency_points(Some(YEAR - age), 17, YEAR);
            assert!(pts <= last);
            last = pts;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_worked_example() {
        let cfg = ScoreConfig::default();
        let p = paper(
            "We study emotion regulation using wearable sensors",
            Some(120),
            Some(YEAR - 2),
        );
        let s = score_paper(&p, &cfg, YEAR);
        assert!(s.hits.contains(&"emotion regulation".to_string()));
        assert!(s.hits.contains(&"wearable".to_string()));
        assert_eq!(s.impact, 14);
        assert_eq!(s.recency, 16);
        assert_eq!(s.relevance, 29);
        assert_eq!(s.total, 59);
        assert_eq!(
            s.note,
            "hits: emotion regulation, wearable, emotion; citations=120; year=2024"
        );
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let s = score_paper(&PaperRecord::default(), &ScoreConfig::default(), YEAR);
        assert_eq!(s.total, 0);
        assert_eq!((s.relevance, s.impact, s.recency), (0, 0, 0));
        assert_eq!(s.note, "");
    }

    #[test]
    fn test_total_capped_at_100() {
        let mut cfg = ScoreConfig::default();
        cfg.weights.relevance_max = 100;
        cfg.weights.impact_max = 100;
        cfg.weights.recency_max = 100;
        let p = PaperRecord {
            title: Some("Affective computing for digital mental health".to_string()),
            abstract_text: Some("Emotion regulation via ecological momentary assessment".to_string()),
            citation_count: Some(900),
            year: Some(YEAR),
            ..Default::default()
        };
        let s = score_paper(&p, &cfg, YEAR);
        assert_eq!(s.total, 100);
        assert!(s.relevance <= 100 && s.impact <= 100 && s.recency <= 100);
    }

    #[test]
    fn test_note_limits_reported_hits() {
        let mut cfg = ScoreConfig::default();
        cfg.relevance.max_reported_hits = 1;
        let p = paper("emotion regulation with wearable devices", None, None);
        let s = score_paper(&p, &cfg, YEAR);
        assert_eq!(s.note, "hits: emotion regulation");
        assert_eq!(s.hits.len(), 3);
    }

    #[test]
    fn test_zero_citations_still_noted() {
        let s = score_paper(&paper("", Some(0), None), &ScoreConfig::default(), YEAR);
        assert_eq!(s.note, "citations=0");
        assert_eq!(s.total, 0);
    }

    #[test]
    fn test_venue_and_title_are_matched() {
        let p = PaperRecord {
            title: Some("Resilience".to_string()),
            venue: Some("Journal of Multimodal Interaction".to_string()),
            ..Default::default()
        };
        let s = score_paper(&p, &ScoreConfig::default(), YEAR);
        assert_eq!(s.relevance, 18);
    }
}

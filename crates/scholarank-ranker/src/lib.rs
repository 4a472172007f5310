//! scholarank-ranker — Deterministic paper relevance scoring.
//!
//! total = relevance (keyword hits) + impact (citation buckets) + recency
//! (10-year linear decay), each capped by `ScoreConfig`, sum capped at 100.

pub mod export;
pub mod normalise;
pub mod pipeline;
pub mod relevance;
pub mod scorer;
pub mod weights;

pub use pipeline::{rank_papers, RankedPaper};
pub use scorer::{score_paper, ScoreResult};
pub use weights::ScoreConfig;

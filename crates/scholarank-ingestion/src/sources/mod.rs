//! Literature source clients.

pub mod semantic_scholar;

use async_trait::async_trait;
use scholarank_common::Result;
use crate::models::PaperRecord;

/// Common interface for remote paper-search clients.
#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Search for papers matching a query, returns coerced records.
    ///
    /// A rate-limited response must surface as `ScholarankError::RateLimited`
    /// so callers can tell it apart from other transport failures.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<PaperRecord>>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

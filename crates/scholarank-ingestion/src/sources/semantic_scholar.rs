//! Semantic Scholar Graph API client.
//!
//! Endpoint: https://api.semanticscholar.org/graph/v1/paper/search
//!
//! One request per search, fixed timeout, no retries. The public tier is
//! rate limited; an API key in `x-api-key` raises the limit.

use async_trait::async_trait;
use reqwest::StatusCode;
use scholarank_common::sandbox::SandboxClient as Client;
use scholarank_common::{Result, ScholarankError};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::models::PaperRecord;
use super::LiteratureSource;

pub const S2_API_BASE: &str = "https://api.semanticscholar.org/graph/v1";
pub const API_KEY_ENV: &str = "SEMANTIC_SCHOLAR_API_KEY";
const SEARCH_FIELDS: &str = "title,year,authors,venue,abstract,url,externalIds,citationCount";
const SOURCE_NAME: &str = "Semantic Scholar";
const RATE_LIMIT_HINT: &str =
    "Set SEMANTIC_SCHOLAR_API_KEY in your .env to increase limits, or retry later.";

pub struct SemanticScholarClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl SemanticScholarClient {
    pub fn new(api_key: Option<SecretString>) -> Result<Self> {
        Ok(Self {
            client: Client::new()?,
            base_url: S2_API_BASE.to_string(),
            api_key,
        })
    }

    /// Client keyed from `SEMANTIC_SCHOLAR_API_KEY`, if set and non-empty.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(SecretString::from);
        Self::new(key)
    }

    /// Point the client at another Graph API compatible host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl LiteratureSource for SemanticScholarClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<PaperRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }

        let url = format!("{}/paper/search", self.base_url);
        let limit = max_results.to_string();
        let mut request = self.client
            .get(&url)?
            .query(&[("query", query), ("limit", limit.as_str()), ("fields", SEARCH_FIELDS)]);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key.expose_secret());
        }

        let resp = request.send().await?;
        check_status(resp.status(), &url)?;
        let body: serde_json::Value = resp.json().await?;

        let papers = parse_search_response(&body);
        debug!(count = papers.len(), "Semantic Scholar search returned results");
        Ok(papers)
    }

    fn name(&self) -> &'static str {
        SOURCE_NAME
    }
}

/// 429 is its own failure mode; every other non-2xx is a generic HTTP error.
fn check_status(status: StatusCode, url: &str) -> Result<()> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ScholarankError::RateLimited {
            source_name: SOURCE_NAME,
            hint: RATE_LIMIT_HINT,
        });
    }
    if !status.is_success() {
        return Err(ScholarankError::HttpStatus { status, url: url.to_string() });
    }
    Ok(())
}

fn parse_search_response(body: &serde_json::Value) -> Vec<PaperRecord> {
    body["data"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .map(PaperRecord::from_json)
                .collect()
        })
        .unwrap_or_default()
}

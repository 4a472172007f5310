use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::ScholarankError;

/// Fixed timeout for every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("scholarank/", env!("CARGO_PKG_VERSION"));

/// An HTTP client that only talks to approved hosts.
///
/// The paper-search API is the only remote dependency; loopback hosts stay
/// on the list so the clients can be pointed at a local stand-in.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist and the fixed request timeout.
    pub fn new() -> Result<Self, ScholarankError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ScholarankError> {
        let allowlist = [
            "api.semanticscholar.org", // Semantic Scholar Graph API
            "localhost",
            "127.0.0.1",
        ]
        .iter()
        .map(|d| d.to_string())
        .collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScholarankError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Adds a host (and its subdomains) to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// Builds a GET request, refusing hosts outside the allowlist.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, ScholarankError> {
        if !self.is_allowed(url) {
            tracing::warn!(url, "Blocked request to host outside allowlist");
            return Err(ScholarankError::SecurityError(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allowlist() {
        let client = SandboxClient::new().unwrap();
        assert!(client.is_allowed("https://api.semanticscholar.org/graph/v1/paper/search"));
        assert!(client.is_allowed("http://127.0.0.1:8080/paper/search"));
        assert!(!client.is_allowed("https://example.com/paper/search"));
        assert!(!client.is_allowed("not a url"));
    }

    #[test]
    fn test_allow_domain_covers_subdomains() {
        let mut client = SandboxClient::new().unwrap();
        client.allow_domain("example.org");
        assert!(client.is_allowed("https://api.example.org/x"));
        assert!(!client.is_allowed("https://badexample.org/x"));
    }

    #[test]
    fn test_get_rejects_blocked_host() {
        let client = SandboxClient::new().unwrap();
        let err = client.get("https://example.com/").unwrap_err();
        assert!(matches!(err, ScholarankError::SecurityError(_)));
    }
}

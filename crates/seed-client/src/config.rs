//! Connection settings for the target service.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SCHEMA: &str = "default";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the target lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Value of the `schema` header sent with queries.
    pub schema: String,
    /// Per-request timeout. Exceeding it is a transport error.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            schema: DEFAULT_SCHEMA.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Record ingestion endpoint.
    pub fn ingest_url(&self) -> String {
        format!("{}/http", self.base_url)
    }

    /// GraphQL query endpoint.
    pub fn query_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }
}

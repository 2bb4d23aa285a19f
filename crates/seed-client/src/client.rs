//! Target client trait and its reqwest implementation.

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::response::QueryResponse;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use tracing::debug;

/// Operations the seeder needs from the target system.
///
/// Each call is one network round trip. Implementations must not retry.
#[async_trait]
pub trait TargetClient: Send + Sync {
    /// Send one record to the ingestion endpoint.
    async fn submit(&self, record: &Value) -> Result<(), TransportError>;

    /// Run a query against the query endpoint.
    async fn query(&self, query: &str) -> Result<QueryResponse, TransportError>;
}

/// [`TargetClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTargetClient {
    client: Client,
    config: ClientConfig,
}

impl HttpTargetClient {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Turn a non-2xx response into [`TransportError::Status`].
async fn check_status(endpoint: &str, response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TransportError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl TargetClient for HttpTargetClient {
    async fn submit(&self, record: &Value) -> Result<(), TransportError> {
        let endpoint = self.config.ingest_url();
        debug!("POST {endpoint}");

        let response = self
            .client
            .post(&endpoint)
            .json(record)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        check_status(&endpoint, response).await?;
        Ok(())
    }

    async fn query(&self, query: &str) -> Result<QueryResponse, TransportError> {
        let endpoint = self.config.query_url();
        debug!("POST {endpoint} (schema={})", self.config.schema);

        let response = self
            .client
            .post(&endpoint)
            .header("schema", self.config.schema.as_str())
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        let response = check_status(&endpoint, response).await?;
        response
            .json::<QueryResponse>()
            .await
            .map_err(|source| TransportError::Request { endpoint, source })
    }
}

//! Error types for the target client.

use thiserror::Error;

/// Failures talking to the target. Every variant is fatal to a seeding run.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection failure, timeout, or undecodable response body.
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl TransportError {
    /// HTTP status for [`TransportError::Status`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Error types for the populator.

use crate::progress::Phase;
use seed_client::TransportError;
use thiserror::Error;

/// Errors that abort a seeding run.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// A record could not be delivered. Earlier records stay in the target.
    #[error("Failed to submit {phase} #{index}: {source}")]
    Submit {
        phase: Phase,
        index: u64,
        #[source]
        source: TransportError,
    },

    /// The agent correlation query failed at the transport level.
    #[error("Agent correlation query failed: {0}")]
    Correlation(#[source] TransportError),

    /// Estates were requested but the target knows no agents to reference.
    #[error("Target reports no agents; cannot generate {requested} estates")]
    NoAgents { requested: u64 },

    /// Record serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PopulatorError {
    /// The underlying transport failure, if this error is one.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            PopulatorError::Submit { source, .. } => Some(source),
            PopulatorError::Correlation(source) => Some(source),
            _ => None,
        }
    }
}

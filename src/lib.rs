//! estate-seed library
//!
//! Seeds a remote service with synthetic agents and estates so it can be
//! load-tested or demoed with realistic data volumes.
//!
//! # Crates
//!
//! - `seed_generator` - random field library and schema variants
//! - `seed_client` - ingestion and query client for the target
//! - `seed_populate` - the two-phase populator
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 Favihome agents, then 1000 estates referencing them
//! estate-seed --agent 100 --estate 1000 --type 1
//!
//! # Estate Inc estates only, against a remote target
//! estate-seed --estate 500 --type 2 --url http://tdg:8080
//!
//! # No counts: prompt for counts and generator type
//! estate-seed
//! ```

use clap::Args;
use seed_client::config::{DEFAULT_BASE_URL, DEFAULT_SCHEMA};
use seed_client::ClientConfig;

pub mod config;
pub mod seed;

pub use seed_client as client;
pub use seed_generator as generator;
pub use seed_populate as populate;

#[derive(Args, Clone, Debug)]
pub struct TargetOpts {
    /// Base URL of the target service
    #[arg(long = "url", default_value = DEFAULT_BASE_URL, env = "ESTATE_SEED_URL")]
    pub target_url: String,

    /// Schema header sent with queries
    #[arg(long = "schema", default_value = DEFAULT_SCHEMA, env = "ESTATE_SEED_SCHEMA")]
    pub target_schema: String,

    /// Per-request timeout (e.g. "10s", "500ms", "1m", or plain seconds)
    #[arg(long, default_value = "10s", env = "ESTATE_SEED_TIMEOUT")]
    pub timeout: String,
}

impl TargetOpts {
    /// Build the client configuration, validating the timeout.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let timeout = config::parse_duration(&self.timeout)?;
        Ok(ClientConfig::new(self.target_url.as_str())
            .with_schema(self.target_schema.as_str())
            .with_timeout(timeout))
    }
}

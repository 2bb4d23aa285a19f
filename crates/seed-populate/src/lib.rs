//! Agent and estate populator for estate-seed.
//!
//! The populator runs two phases in order:
//!
//! 1. **Agents**: generate and submit the requested number of agents.
//! 2. **Estates**: query the target once for every known agent uuid, then
//!    generate and submit estates that each reference one of those uuids.
//!
//! Estates never reference an identifier minted on the client; the target
//! is the only authority on agent identity.
//!
//! # Example
//!
//! ```ignore
//! use seed_client::{ClientConfig, HttpTargetClient};
//! use seed_generator::SchemaVariant;
//! use seed_populate::SeedPopulator;
//!
//! let client = HttpTargetClient::new(ClientConfig::default())?;
//! let mut populator = SeedPopulator::new(client, SchemaVariant::Favihome, Some(42));
//!
//! let metrics = populator.populate(100, 1000).await?;
//! println!("Submitted {} records in {:?}", metrics.records_submitted(), metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod metrics;
pub mod populator;
pub mod progress;

pub use args::SeedArgs;
pub use error::PopulatorError;
pub use metrics::{PhaseMetrics, PopulateMetrics};
pub use populator::{Correlation, SeedPopulator, AGENT_QUERY};
pub use progress::{Phase, ProgressSchedule};

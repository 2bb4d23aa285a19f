//! Record generator for the estate-seed data seeder.
//!
//! This crate produces synthetic agent and estate records in one of the
//! supported schema dialects. All randomness flows through [`RandomFields`],
//! which owns a `StdRng` so a run can be reproduced from a seed.
//!
//! # Architecture
//!
//! ```text
//! SchemaVariant (1 = Favihome, 2 = EstateInc)
//!        │
//!        ▼
//! ┌──────────────────────┐      ┌──────────────────┐
//! │ dyn RecordGenerator  │─────▶│   RandomFields   │
//! │  - make_agent        │      │  - rng (StdRng)  │
//! │  - make_estate(uuid) │      │  - catalogs      │
//! └──────────┬───────────┘      └──────────────────┘
//!            │
//!            ▼
//!   AgentRecord / EstateRecord (serialize to the wire JSON)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{RandomFields, SchemaVariant};
//!
//! let variant = SchemaVariant::from_selector(1).unwrap();
//! let generator = variant.generator();
//! let mut fields = RandomFields::seeded(42);
//!
//! let agent = generator.make_agent(&mut fields);
//! let estate = generator.make_estate(&mut fields, "0b7c6d5e-agent");
//! assert_eq!(estate.agent_reference(), "0b7c6d5e-agent");
//! # let _ = agent;
//! ```

pub mod catalog;
pub mod fields;
pub mod variants;

pub use catalog::{EstateType, Renovation, TransactionAction, DISTRICTS};
pub use fields::RandomFields;
pub use variants::{
    AgentRecord, ConfigError, EstateInc, EstateRecord, Favihome, RecordGenerator, SchemaVariant,
};

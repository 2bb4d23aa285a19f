//! Network boundary of the estate-seed data seeder.
//!
//! The target exposes two endpoints:
//!
//! - `POST {base}/http` ingests a single JSON record.
//! - `POST {base}/graphql` runs a query; the `schema` header names the
//!   namespace. The response is `{"data": ..., "errors": ...}`.
//!
//! Transport failures (connection errors, timeouts, non-2xx statuses) are
//! [`TransportError`]s and are always fatal to the caller. Application
//! errors inside a query envelope are not: they surface through
//! [`QueryResponse::application_errors`] next to whatever `data` came back.

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::{HttpTargetClient, TargetClient};
pub use config::ClientConfig;
pub use error::TransportError;
pub use response::QueryResponse;

//! Configuration helpers shared by the CLI handlers.

pub mod duration;

pub use duration::parse_duration;

//! Seed command handler.
//!
//! Resolves what to generate (from flags or an interactive prompt) and
//! runs the populator once against the target.

pub mod prompt;
pub mod run;

pub use prompt::{resolve_request, DialoguerPrompt, Prompter, SeedRequest};
pub use run::run_seed;

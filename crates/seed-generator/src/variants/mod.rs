//! Schema dialects for agent and estate records.
//!
//! Each dialect is a [`RecordGenerator`]. The orchestrator only sees the
//! trait, so adding a dialect means adding an implementation and a row in
//! [`SchemaVariant::ALL`].

pub mod estate_inc;
pub mod favihome;

pub use estate_inc::{EstateInc, EstateIncAgent, EstateIncEstate};
pub use favihome::{Favihome, FavihomeAgent, FavihomeEstate};

use crate::fields::RandomFields;
use serde::Serialize;

/// Error type for variant selection.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Selector does not name a known dialect
    #[error("Unknown number of generators type: {0}")]
    UnknownVariant(u8),
}

/// Produces records in one schema dialect.
pub trait RecordGenerator: Send + Sync {
    /// Build one agent record.
    fn make_agent(&self, fields: &mut RandomFields) -> AgentRecord;

    /// Build one estate record pointing at an agent the target already knows.
    fn make_estate(&self, fields: &mut RandomFields, agent_reference: &str) -> EstateRecord;
}

/// An agent record in any dialect. Serializes to the dialect's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AgentRecord {
    Favihome(FavihomeAgent),
    EstateInc(EstateIncAgent),
}

/// An estate record in any dialect. Serializes to the dialect's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EstateRecord {
    Favihome(FavihomeEstate),
    EstateInc(EstateIncEstate),
}

impl EstateRecord {
    /// The agent uuid this estate points at.
    pub fn agent_reference(&self) -> &str {
        match self {
            EstateRecord::Favihome(estate) => &estate.agent_uuid,
            EstateRecord::EstateInc(estate) => &estate.estate.agent_uuid,
        }
    }
}

/// The closed set of supported dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    Favihome,
    EstateInc,
}

impl SchemaVariant {
    /// Numeric selector to dialect. Selectors are what the CLI accepts.
    pub const ALL: [(u8, SchemaVariant); 2] = [
        (1, SchemaVariant::Favihome),
        (2, SchemaVariant::EstateInc),
    ];

    /// Look up a dialect by its numeric selector.
    pub fn from_selector(selector: u8) -> Result<Self, ConfigError> {
        Self::ALL
            .iter()
            .find(|(code, _)| *code == selector)
            .map(|(_, variant)| *variant)
            .ok_or(ConfigError::UnknownVariant(selector))
    }

    /// Numeric selector of this dialect, the inverse of [`Self::from_selector`].
    pub fn selector(&self) -> u8 {
        Self::ALL
            .iter()
            .find(|(_, variant)| variant == self)
            .map(|(code, _)| *code)
            .unwrap_or_default()
    }

    /// Human-readable name, as shown in the interactive prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            SchemaVariant::Favihome => "Favihome.Com",
            SchemaVariant::EstateInc => "Estate Inc",
        }
    }

    /// The record generator implementing this dialect.
    pub fn generator(&self) -> Box<dyn RecordGenerator> {
        match self {
            SchemaVariant::Favihome => Box::new(Favihome),
            SchemaVariant::EstateInc => Box::new(EstateInc),
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_lookup() {
        assert_eq!(
            SchemaVariant::from_selector(1).unwrap(),
            SchemaVariant::Favihome
        );
        assert_eq!(
            SchemaVariant::from_selector(2).unwrap(),
            SchemaVariant::EstateInc
        );
    }

    #[test]
    fn test_unknown_selector() {
        for selector in [0u8, 3, 255] {
            let result = SchemaVariant::from_selector(selector);
            assert!(matches!(result, Err(ConfigError::UnknownVariant(s)) if s == selector));
        }
        assert_eq!(
            SchemaVariant::from_selector(9).unwrap_err().to_string(),
            "Unknown number of generators type: 9"
        );
    }

    #[test]
    fn test_selector_round_trip() {
        for (code, variant) in SchemaVariant::ALL {
            assert_eq!(variant.selector(), code);
        }
    }

    #[test]
    fn test_generator_dispatch() {
        let mut fields = RandomFields::seeded(42);

        let agent = SchemaVariant::Favihome.generator().make_agent(&mut fields);
        assert!(matches!(agent, AgentRecord::Favihome(_)));

        let agent = SchemaVariant::EstateInc.generator().make_agent(&mut fields);
        assert!(matches!(agent, AgentRecord::EstateInc(_)));
    }

    #[test]
    fn test_agent_reference_passthrough() {
        let mut fields = RandomFields::seeded(42);
        for (_, variant) in SchemaVariant::ALL {
            let estate = variant.generator().make_estate(&mut fields, "agent-uuid-1");
            assert_eq!(estate.agent_reference(), "agent-uuid-1");
        }
    }
}

//! Favihome.Com dialect: flat agent records with a phone, estates with an
//! address block.

use super::{AgentRecord, EstateRecord, RecordGenerator};
use crate::catalog::{EstateType, TransactionAction, CITY, COUNTRY, DISTRICTS};
use crate::fields::RandomFields;
use serde::Serialize;

/// Upper bound (exclusive) of the client-side `home_id`.
pub const HOME_ID_BOUND: u64 = 100_000;
/// Upper bound (exclusive) of the square area.
pub const SQUARE_BOUND: u64 = 300;
/// Prices are `random_int(PRICE_STEPS) * PRICE_UNIT`.
pub const PRICE_STEPS: u64 = 50_000;
pub const PRICE_UNIT: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavihomeAgent {
    /// Display/seed value only. The target assigns the real uuid.
    pub home_id: u64,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavihomeAddress {
    pub country: String,
    pub city: String,
    pub metro: String,
    pub district: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavihomeEstate {
    pub home_id: u64,
    pub agent_uuid: String,
    pub action: TransactionAction,
    #[serde(rename = "type")]
    pub estate_type: EstateType,
    pub square: u64,
    pub price: u64,
    pub address: FavihomeAddress,
}

/// Favihome.Com record generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Favihome;

impl RecordGenerator for Favihome {
    fn make_agent(&self, fields: &mut RandomFields) -> AgentRecord {
        AgentRecord::Favihome(FavihomeAgent {
            home_id: fields.random_int(HOME_ID_BOUND),
            name: fields.synthetic_name(),
            phone: fields.synthetic_phone(),
        })
    }

    fn make_estate(&self, fields: &mut RandomFields, agent_reference: &str) -> EstateRecord {
        EstateRecord::Favihome(FavihomeEstate {
            home_id: fields.random_int(HOME_ID_BOUND),
            agent_uuid: agent_reference.to_string(),
            action: *fields.random_choice(&TransactionAction::ALL),
            estate_type: *fields.random_choice(&EstateType::ALL),
            square: fields.random_int(SQUARE_BOUND),
            price: fields.random_int(PRICE_STEPS) * PRICE_UNIT,
            address: FavihomeAddress {
                country: COUNTRY.to_string(),
                city: CITY.to_string(),
                // Drawn independently; metro and district may coincide
                metro: fields.random_choice(DISTRICTS).to_string(),
                district: fields.random_choice(DISTRICTS).to_string(),
            },
        })
    }
}

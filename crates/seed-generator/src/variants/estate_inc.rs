//! Estate Inc dialect: records are wrapped in a company envelope.

use super::favihome::{PRICE_STEPS, PRICE_UNIT};
use super::{AgentRecord, EstateRecord, RecordGenerator};
use crate::catalog::{EstateType, Renovation, TransactionAction, DISTRICTS};
use crate::fields::RandomFields;
use serde::Serialize;

pub const COMPANY: &str = "estate inc";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstateIncAgent {
    pub company: String,
    pub agent: AgentName,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstateListing {
    pub agent_uuid: String,
    pub action: TransactionAction,
    #[serde(rename = "type")]
    pub estate_type: EstateType,
    pub renovation: Renovation,
    pub price: u64,
    pub street: String,
    pub building: String,
    pub district: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstateIncEstate {
    pub company: String,
    pub estate: EstateListing,
}

/// Estate Inc record generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstateInc;

impl RecordGenerator for EstateInc {
    fn make_agent(&self, fields: &mut RandomFields) -> AgentRecord {
        AgentRecord::EstateInc(EstateIncAgent {
            company: COMPANY.to_string(),
            agent: AgentName {
                first_name: fields.synthetic_first_name(),
                last_name: fields.synthetic_last_name(),
            },
        })
    }

    fn make_estate(&self, fields: &mut RandomFields, agent_reference: &str) -> EstateRecord {
        EstateRecord::EstateInc(EstateIncEstate {
            company: COMPANY.to_string(),
            estate: EstateListing {
                agent_uuid: agent_reference.to_string(),
                action: *fields.random_choice(&TransactionAction::ALL),
                estate_type: *fields.random_choice(&EstateType::ALL),
                renovation: *fields.random_choice(&Renovation::ALL),
                price: fields.random_int(PRICE_STEPS) * PRICE_UNIT,
                street: fields.synthetic_street_address(),
                building: fields.synthetic_building_number(),
                district: fields.random_choice(DISTRICTS).to_string(),
            },
        })
    }
}

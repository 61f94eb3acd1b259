//! JSON wire format for decision services.
//!
//! Requests are the serialized [`DecisionRequest`]. Responses:
//!
//! - attack: `null` to pass, or a list of card strings, e.g. `["7C", "7H"]`
//! - defense: `null` to surrender, or an object mapping slot index to a
//!   card string, e.g. `{"0": "10C", "1": null}`; `null` leaves a slot open

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AttackDecision, DecisionError, DecisionRequest, DecisionSource, DefenseDecision};
use crate::cards::{parse_cards, Card};
use crate::error::ProtocolError;

/// Wire form of an attack answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttackResponse(pub Option<Vec<String>>);

impl AttackResponse {
    pub fn into_decision(self) -> Result<AttackDecision, ProtocolError> {
        match self.0 {
            None => Ok(AttackDecision::Pass),
            Some(cards) if cards.is_empty() => Ok(AttackDecision::Pass),
            Some(cards) => Ok(AttackDecision::Play(parse_cards(&cards)?)),
        }
    }
}

impl From<&AttackDecision> for AttackResponse {
    fn from(decision: &AttackDecision) -> Self {
        match decision {
            AttackDecision::Pass => Self(None),
            AttackDecision::Play(cards) => Self(Some(cards.iter().map(Card::to_string).collect())),
        }
    }
}

/// Wire form of a defense answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefenseResponse(pub Option<BTreeMap<usize, Option<String>>>);

impl DefenseResponse {
    pub fn into_decision(self) -> Result<DefenseDecision, ProtocolError> {
        let Some(slots) = self.0 else {
            return Ok(DefenseDecision::Surrender);
        };
        let mut plan = BTreeMap::new();
        for (slot, card) in slots {
            if let Some(card) = card {
                plan.insert(slot, card.parse::<Card>()?);
            }
        }
        Ok(DefenseDecision::Defend(plan))
    }
}

impl From<&DefenseDecision> for DefenseResponse {
    fn from(decision: &DefenseDecision) -> Self {
        match decision {
            DefenseDecision::Surrender => Self(None),
            DefenseDecision::Defend(plan) => Self(Some(
                plan.iter()
                    .map(|(slot, card)| (*slot, Some(card.to_string())))
                    .collect(),
            )),
        }
    }
}

/// Decision source backed by a JSON request/response exchange.
///
/// The transport receives the serialized request and returns the raw
/// response body. It is called once per decision and never retried.
pub struct JsonDecider<F> {
    transport: F,
}

impl<F> JsonDecider<F>
where
    F: FnMut(&str) -> Result<String, DecisionError>,
{
    pub fn new(transport: F) -> Self {
        Self { transport }
    }

    fn exchange(&mut self, request: &DecisionRequest) -> Result<String, DecisionError> {
        let body = serde_json::to_string(request).map_err(ProtocolError::from)?;
        (self.transport)(&body)
    }
}

impl<F> DecisionSource for JsonDecider<F>
where
    F: FnMut(&str) -> Result<String, DecisionError>,
{
    fn decide_attack(&mut self, request: &DecisionRequest) -> Result<AttackDecision, DecisionError> {
        let body = self.exchange(request)?;
        let response: AttackResponse = serde_json::from_str(&body).map_err(ProtocolError::from)?;
        Ok(response.into_decision()?)
    }

    fn decide_defense(&mut self, request: &DecisionRequest) -> Result<DefenseDecision, DecisionError> {
        let body = self.exchange(request)?;
        let response: DefenseResponse = serde_json::from_str(&body).map_err(ProtocolError::from)?;
        Ok(response.into_decision()?)
    }
}

//! Move selection for computer-controlled seats.
//!
//! ## Overview
//!
//! When a computer seat has to attack or defend, the game stops in
//! `Phase::AwaitingAttack` or `Phase::AwaitingDefense` and exposes a
//! [`DecisionRequest`]: the seat, what is being decided, and the exported
//! game state. Whoever drives the game hands the request to a
//! [`DecisionSource`] and submits the answer. Only one request can be
//! pending at a time.
//!
//! The engine does not care how a source decides. Provided here:
//!
//! - [`RandomDecider`]: seeded random legal moves, for tests and simulation
//! - [`JsonDecider`]: speaks the JSON wire format to an external service
//!   through a caller-supplied transport
//!
//! ## Usage
//!
//! ```rust
//! use durak_engine::core::GameConfig;
//! use durak_engine::decision::RandomDecider;
//! use durak_engine::game::Game;
//!
//! let mut game = Game::new(GameConfig::all_computer(4), 7).unwrap();
//! game.deal().unwrap();
//!
//! let mut decider = RandomDecider::new(7);
//! let phase = game.run_until_input(&mut decider, 10_000).unwrap();
//! println!("stopped in {:?}", phase);
//! ```

mod protocol;
mod random;

pub use protocol::{AttackResponse, DefenseResponse, JsonDecider};
pub use random::RandomDecider;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::ProtocolError;
use crate::game::GameSnapshot;

/// What the seat is being asked to decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    Attack,
    Defense,
}

/// A pending request for a computer seat's move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub seat: PlayerId,
    pub kind: DecisionKind,
    pub state: GameSnapshot,
}

impl DecisionRequest {
    /// The requesting seat's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.state
            .players
            .get(self.seat.index())
            .map(|p| p.hand.as_slice())
            .unwrap_or(&[])
    }
}

/// Answer to an attack request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttackDecision {
    Pass,
    /// Cards to put on the battlefield, in order.
    Play(Vec<Card>),
}

/// Answer to a defense request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefenseDecision {
    /// Give up and take every card on the battlefield.
    Surrender,
    /// Beat the attack in each slot with the given card.
    Defend(BTreeMap<usize, Card>),
}

/// Failures obtaining a decision.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("decision transport failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("decision request is unusable: {0}")]
    InvalidRequest(String),
}

/// Chooses moves for computer seats.
pub trait DecisionSource {
    fn decide_attack(&mut self, request: &DecisionRequest) -> Result<AttackDecision, DecisionError>;

    fn decide_defense(&mut self, request: &DecisionRequest) -> Result<DefenseDecision, DecisionError>;
}

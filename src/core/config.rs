//! Game configuration.
//!
//! A `GameConfig` describes the table: who sits where, whether each seat
//! is driven by a human through UI actions or by a `DecisionSource`, and
//! the handful of numeric rules the engine reads (hand size, attack cap).
//! Configurations are serde-friendly so a front end or the simulator can
//! load them from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Deck;

/// Fewest seats a game can be dealt for.
pub const MIN_SEATS: usize = 2;
/// Most seats a 36-card deck can serve with six-card hands and a trump left over.
pub const MAX_SEATS: usize = 5;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name, used in status messages.
    pub name: String,
    /// Human seats wait for UI actions; others issue decision requests.
    pub human: bool,
}

impl SeatConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            human: true,
        }
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            human: false,
        }
    }
}

/// How the deck is shuffled at deal time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    /// Uniform Fisher–Yates permutation.
    #[default]
    Uniform,
    /// Swap each position with any index. Biased; for replaying old deals.
    Legacy,
}

/// What to do when a decision source fails to answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionFailurePolicy {
    /// Return the error; the request stays pending.
    #[default]
    Surface,
    /// Pass (or surrender) on the seat's behalf and log a warning.
    Fallback,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a game needs between 2 and 5 seats, got {0}")]
    SeatCount(usize),
    #[error("hand size must be at least 1")]
    EmptyHands,
    #[error("attack cap must be at least 1")]
    NoAttacks,
    #[error("dealing {needed} cards leaves no trump card in a {available}-card deck")]
    DeckTooSmall { needed: usize, available: usize },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats in clockwise order.
    pub seats: Vec<SeatConfig>,
    /// Cards dealt to each player and the redraw target.
    pub hand_size: usize,
    /// Upper bound on attacks per round (further capped by the defender's hand).
    pub max_attacks: usize,
    pub shuffle: ShuffleMode,
    pub on_decision_failure: DecisionFailurePolicy,
}

impl Default for GameConfig {
    /// One human against three computer players.
    fn default() -> Self {
        Self {
            seats: vec![
                SeatConfig::human("Player"),
                SeatConfig::computer("Olga"),
                SeatConfig::computer("Vladimir"),
                SeatConfig::computer("Ekaterina"),
            ],
            hand_size: 6,
            max_attacks: 6,
            shuffle: ShuffleMode::Uniform,
            on_decision_failure: DecisionFailurePolicy::Surface,
        }
    }
}

impl GameConfig {
    /// A table where every seat is a computer player.
    pub fn all_computer(seat_count: usize) -> Self {
        let seats = (0..seat_count)
            .map(|i| SeatConfig::computer(format!("Computer {}", i + 1)))
            .collect();
        Self {
            seats,
            ..Self::default()
        }
    }

    /// Replace the seats.
    #[must_use]
    pub fn with_seats(mut self, seats: Vec<SeatConfig>) -> Self {
        self.seats = seats;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn with_decision_failure(mut self, policy: DecisionFailurePolicy) -> Self {
        self.on_decision_failure = policy;
        self
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Check that a standard deck can be dealt for this table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seats = self.seats.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(ConfigError::SeatCount(seats));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHands);
        }
        if self.max_attacks == 0 {
            return Err(ConfigError::NoAttacks);
        }
        let needed = seats * self.hand_size;
        if needed >= Deck::STANDARD_SIZE {
            return Err(ConfigError::DeckTooSmall {
                needed,
                available: Deck::STANDARD_SIZE,
            });
        }
        Ok(())
    }
}

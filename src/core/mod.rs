//! Core engine types: seats, RNG, configuration.
//!
//! These are the building blocks the card, battlefield and game modules
//! share. Nothing here knows the rules of Durak.

pub mod seat;
pub mod rng;
pub mod config;

pub use seat::{PlayerId, SeatMap};
pub use rng::GameRng;
pub use config::{ConfigError, DecisionFailurePolicy, GameConfig, SeatConfig, ShuffleMode, MAX_SEATS, MIN_SEATS};

//! # durak-engine
//!
//! Rules engine and round/turn state machine for Durak, the Russian
//! "fool" card game, for 2 to 5 seats with a 36-card deck.
//!
//! ## Design Principles
//!
//! 1. **Cards never duplicate or vanish**: every card lives in exactly one
//!    place (deck, a hand, the battlefield, the discard pile), and moves
//!    only by value through the game's transitions.
//!
//! 2. **One pending input**: the game always rests in a `Phase` that names
//!    what it waits for: a human UI action, one computer decision, or an
//!    `advance` step. Nothing runs in the background.
//!
//! 3. **Pluggable opponents**: computer seats are driven by any
//!    `DecisionSource`, local or remote, fed with a serializable snapshot.
//!
//! ## Modules
//!
//! - `core`: seat ids, per-seat storage, RNG, configuration
//! - `cards`: suits, ranks, cards and the deck
//! - `players`: hands, status and selection
//! - `battlefield`: attacks of the current round and their rules
//! - `game`: the state machine, UI actions and exported snapshots
//! - `decision`: the decision contract for computer seats
//! - `error`: rejection and error types
//!
//! ## Example
//!
//! ```
//! use durak_engine::{Action, Game, GameConfig, Outcome, Phase};
//!
//! let mut game = Game::new(GameConfig::default(), 42).unwrap();
//! assert_eq!(game.apply(Action::Deal).unwrap(), Outcome::Accepted);
//! assert_ne!(game.phase(), Phase::Undealt);
//! ```

pub mod core;
pub mod cards;
pub mod players;
pub mod battlefield;
pub mod game;
pub mod decision;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    DecisionFailurePolicy, GameConfig, GameRng, PlayerId, SeatConfig, SeatMap, ShuffleMode,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::players::{Player, Status};

pub use crate::battlefield::{Attack, Battlefield};

pub use crate::game::{Action, Game, GameSnapshot, Notifier, Outcome, Phase, TracingNotifier};

pub use crate::decision::{
    AttackDecision, DecisionKind, DecisionRequest, DecisionSource, DefenseDecision,
    JsonDecider, RandomDecider,
};

pub use crate::error::{GameError, IllegalMove, ProtocolError};

//! Error and rejection types shared across the engine.
//!
//! Three kinds of failure are kept apart:
//!
//! - [`IllegalMove`]: a move the rules forbid. Not an error: it is returned
//!   inside `Outcome::Rejected` and carries the message shown to the player.
//! - [`ProtocolError`]: a decision source answered with something that
//!   cannot be applied (bad card string, card not in hand, unknown slot).
//!   Detected before any state is touched.
//! - [`GameError`]: everything a caller has to handle, including wrapped
//!   protocol and decision failures.

use thiserror::Error;

use crate::cards::{Card, DeckError, ParseCardError};
use crate::core::{ConfigError, PlayerId};
use crate::decision::DecisionError;

/// Why a move was refused. `Display` is the user-facing status text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("Select a card first.")]
    NoCardSelected,
    #[error("There is no card at position {index}.")]
    NoSuchCard { index: usize },
    #[error("You must play a card that shares rank with a card already played.")]
    RankNotOnTable,
    #[error("The maximum number of attacking cards has been played.")]
    AttackLimitReached,
    #[error("There is no attack in slot {slot}.")]
    NoSuchAttack { slot: usize },
    #[error("You have already beaten that card.")]
    AlreadyDefended,
    #[error("You must play a higher card of the same suit or a trump card.")]
    CannotBeat,
    #[error("Play an attack.")]
    MustAttack,
}

/// A decision response that cannot be applied to the game.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed card in response: {0}")]
    Card(#[from] ParseCardError),
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{seat} does not hold {card}")]
    CardNotInHand { seat: PlayerId, card: Card },
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
    #[error("slot {slot} does not exist ({attacks} attacks on the table)")]
    NoSuchSlot { slot: usize, attacks: usize },
    #[error("{seat} passed on an empty battlefield")]
    MustAttack { seat: PlayerId },
}

/// Errors surfaced to the caller of the engine.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("dealing needs {needed} cards plus a trump card, deck has {available}")]
    NotEnoughCards { needed: usize, available: usize },
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Decision(#[from] DecisionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_messages() {
        assert_eq!(
            IllegalMove::CannotBeat.to_string(),
            "You must play a higher card of the same suit or a trump card."
        );
        assert_eq!(
            IllegalMove::NoSuchAttack { slot: 4 }.to_string(),
            "There is no attack in slot 4."
        );
    }

    #[test]
    fn test_protocol_error_wraps_parse_error() {
        let err: ProtocolError = "XX".parse::<Card>().unwrap_err().into();
        assert!(err.to_string().starts_with("malformed card in response"));

        let game_err: GameError = err.into();
        assert!(matches!(game_err, GameError::Protocol(ProtocolError::Card(_))));
    }
}

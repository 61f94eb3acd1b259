//! Result of applying a player action.

use crate::error::IllegalMove;

/// What happened to an action.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The action changed the game.
    Accepted,
    /// The rules forbid the action; the game is unchanged apart from the
    /// status text.
    Rejected(IllegalMove),
    /// The action does not apply in the current phase and was dropped.
    Ignored,
}

impl Outcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

//! Where a game stands between two inputs.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Game phase.
///
/// The game only ever rests in one of these. Phases named `Awaiting*`
/// wait for a computer seat's decision, `Attacking` and `Defending` wait
/// for the human seat's UI actions, and the rest are stepped with
/// `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing dealt yet.
    Undealt,
    /// Roles are set; the next round starts on advance.
    ReadyToInitiate,
    /// Human attacker is choosing cards.
    Attacking,
    AwaitingAttack,
    /// An attack turn finished.
    AfterAttack,
    /// Human defender is choosing cards.
    Defending,
    AwaitingDefense,
    /// A defense turn finished (beaten or surrendered).
    AfterDefense,
    EndOfRound,
    /// The round was cleared; players refill starting with the last attacker.
    StartRedraw,
    Redrawing,
    /// At most one player holds cards. `durak` is the loser, if anyone is left.
    GameOver { durak: Option<PlayerId> },
}

impl Phase {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }

    /// Waiting on a decision source.
    #[must_use]
    pub fn awaits_decision(self) -> bool {
        matches!(self, Phase::AwaitingAttack | Phase::AwaitingDefense)
    }

    /// Waiting on the human seat.
    #[must_use]
    pub fn awaits_human(self) -> bool {
        matches!(self, Phase::Attacking | Phase::Defending)
    }
}

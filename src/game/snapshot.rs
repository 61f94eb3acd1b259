//! Serializable view of a game, as exported to decision sources and UIs.
//!
//! Field names follow the JSON shape consumers already expect
//! (`attackingPlayer`, `maxAttacks`, ...), so everything here is camelCase
//! on the wire.

use serde::{Deserialize, Serialize};

use crate::battlefield::Attack;
use crate::cards::{Card, Rank, Suit};
use crate::core::PlayerId;
use crate::players::{Player, Status};

use super::Phase;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlefieldSnapshot {
    pub attacks: Vec<Attack>,
    pub max_attacks: usize,
}

impl BattlefieldSnapshot {
    /// Ranks a follow-up attack may use: every rank on the table.
    #[must_use]
    pub fn valid_ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self
            .attacks
            .iter()
            .flat_map(|a| std::iter::once(a.attacking()).chain(a.defending()))
            .map(Card::rank)
            .collect();
        ranks.sort_unstable();
        ranks.dedup();
        ranks
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub name: String,
    pub hand: Vec<Card>,
    pub status: Option<Status>,
    pub active: bool,
    pub human: bool,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            hand: player.hand().to_vec(),
            status: player.status(),
            active: player.is_active(),
            human: player.is_human(),
        }
    }
}

/// Full game state at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: Phase,
    pub battlefield: BattlefieldSnapshot,
    pub players: Vec<PlayerSnapshot>,
    pub attacking_player: PlayerId,
    pub defending_player: PlayerId,
    pub last_attacker: PlayerId,
    pub trump_card: Option<Card>,
    pub players_remaining: usize,
    pub deck_size: usize,
    pub discard_size: usize,
}

impl GameSnapshot {
    #[must_use]
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_card.as_ref().map(Card::suit)
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.get(seat.index())
    }
}

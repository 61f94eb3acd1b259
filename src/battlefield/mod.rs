//! The battlefield: attacks of the current round and the rules that
//! admit new cards onto it.
//!
//! ## Rules
//!
//! - The first attack of a round may be any card.
//! - Every later attack must share a rank with a card already on the
//!   table, attacking or defending.
//! - No more than `max_attacks` attacks per round; the game fixes the cap
//!   when the round starts.
//! - A defense must beat its attack under the trump rules, and each
//!   attack can be beaten only once.
//!
//! Rejections hand the card back to the caller so it never leaves
//! circulation.

mod attack;

pub use attack::Attack;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Card, Rank, Suit};
use crate::error::IllegalMove;

/// A card the battlefield refused, returned with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub card: Card,
    pub reason: IllegalMove,
}

/// Attacks in play this round.
#[derive(Clone, Debug, Default)]
pub struct Battlefield {
    attacks: SmallVec<[Attack; 6]>,
    valid_ranks: FxHashSet<Rank>,
    max_attacks: usize,
}

impl Battlefield {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the attack cap for the round about to start.
    pub fn set_max_attacks(&mut self, max_attacks: usize) {
        self.max_attacks = max_attacks;
    }

    #[must_use]
    pub fn max_attacks(&self) -> usize {
        self.max_attacks
    }

    #[must_use]
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.attacks.len() >= self.max_attacks
    }

    /// Ranks that may still be attacked with. Empty before the first attack.
    pub fn valid_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.valid_ranks.iter().copied()
    }

    #[must_use]
    pub fn allows_rank(&self, rank: Rank) -> bool {
        self.valid_ranks.is_empty() || self.valid_ranks.contains(&rank)
    }

    /// Would `card` be accepted as a new attack?
    pub fn check_attack(&self, card: &Card) -> Result<(), IllegalMove> {
        if !self.allows_rank(card.rank()) {
            return Err(IllegalMove::RankNotOnTable);
        }
        if self.is_full() {
            return Err(IllegalMove::AttackLimitReached);
        }
        Ok(())
    }

    pub fn add_attack(&mut self, card: Card) -> Result<(), Rejected> {
        if let Err(reason) = self.check_attack(&card) {
            return Err(Rejected { card, reason });
        }
        self.valid_ranks.insert(card.rank());
        self.attacks.push(Attack::new(card));
        Ok(())
    }

    /// Would `card` beat the attack in `slot`?
    pub fn check_defense(&self, card: &Card, slot: usize, trump: Suit) -> Result<(), IllegalMove> {
        let attack = self
            .attacks
            .get(slot)
            .ok_or(IllegalMove::NoSuchAttack { slot })?;
        if attack.is_defended() {
            return Err(IllegalMove::AlreadyDefended);
        }
        if !card.can_beat(attack.attacking(), trump) {
            return Err(IllegalMove::CannotBeat);
        }
        Ok(())
    }

    /// Beat the attack in `slot`. The defending rank becomes attackable.
    pub fn add_defense(&mut self, card: Card, slot: usize, trump: Suit) -> Result<(), Rejected> {
        if let Err(reason) = self.check_defense(&card, slot, trump) {
            return Err(Rejected { card, reason });
        }
        self.valid_ranks.insert(card.rank());
        self.attacks[slot].defend(card);
        Ok(())
    }

    /// Is any attack still waiting for a defender?
    #[must_use]
    pub fn has_new_attacks(&self) -> bool {
        self.attacks.iter().any(|a| !a.is_defended())
    }

    /// Slots whose attack has not been beaten yet.
    pub fn undefended_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.attacks
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.is_defended())
            .map(|(i, _)| i)
    }

    /// Take every card off the table, attacker then defender per attack.
    pub fn clear(&mut self) -> Vec<Card> {
        self.valid_ranks.clear();
        self.attacks.drain(..).flat_map(Attack::into_cards).collect()
    }
}

//! The stock: a 36-card deck drawn from the front.
//!
//! The last card of the shuffled deck is the trump card. It stays at the
//! bottom of the stock and is drawn like any other card once everything
//! above it is gone.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::card::{Card, Rank, Suit};
use crate::core::{GameRng, ShuffleMode};

/// Errors building a prearranged deck.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Ordered stock of unique cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Four suits of Six..Ace.
    pub const STANDARD_SIZE: usize = 36;

    /// An unshuffled standard deck, suit by suit, ranks ascending.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A deck in exactly the given order, front first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, DeckError> {
        let mut seen = FxHashSet::default();
        let mut deck = VecDeque::new();
        for card in cards {
            if !seen.insert(card.clone()) {
                return Err(DeckError::DuplicateCard(card));
            }
            deck.push_back(card);
        }
        Ok(Self { cards: deck })
    }

    pub fn shuffle(&mut self, rng: &mut GameRng, mode: ShuffleMode) {
        let cards = self.cards.make_contiguous();
        match mode {
            ShuffleMode::Uniform => rng.shuffle(cards),
            ShuffleMode::Legacy => rng.legacy_shuffle(cards),
        }
    }

    /// Remove and return the front card, or `None` once the stock is gone.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// The bottom card, whose suit is trump.
    #[must_use]
    pub fn trump(&self) -> Option<&Card> {
        self.cards.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a face-down stock sits on top of the trump card.
    #[must_use]
    pub fn stock_visible(&self) -> bool {
        self.cards.len() > 1
    }

    /// Whether the trump card is still on the table.
    #[must_use]
    pub fn trump_visible(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

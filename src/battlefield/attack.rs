//! A single attack slot on the battlefield.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// An attacking card and, once beaten, the card that beat it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    attacking: Card,
    defending: Option<Card>,
}

impl Attack {
    pub(crate) fn new(attacking: Card) -> Self {
        Self {
            attacking,
            defending: None,
        }
    }

    #[must_use]
    pub fn attacking(&self) -> &Card {
        &self.attacking
    }

    #[must_use]
    pub fn defending(&self) -> Option<&Card> {
        self.defending.as_ref()
    }

    #[must_use]
    pub fn is_defended(&self) -> bool {
        self.defending.is_some()
    }

    pub(crate) fn defend(&mut self, card: Card) {
        debug_assert!(self.defending.is_none(), "attack defended twice");
        self.defending = Some(card);
    }

    /// Attacker first, then defender if any.
    pub(crate) fn into_cards(self) -> impl Iterator<Item = Card> {
        std::iter::once(self.attacking).chain(self.defending)
    }
}

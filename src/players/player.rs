//! A seated player: hand, status and UI selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::SeatConfig;

/// Role or elimination marker shown next to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Attacking,
    Defending,
    Surrendered,
    Out,
}

/// Hand access errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("no card at index {index} (hand holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// One player at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    human: bool,
    hand: Vec<Card>,
    active: bool,
    /// Set when the player added an attack since their last attack turn began.
    played_attack: bool,
    status: Option<Status>,
    selected: Option<usize>,
}

impl Player {
    pub fn new(name: impl Into<String>, human: bool) -> Self {
        Self {
            name: name.into(),
            human,
            hand: Vec::new(),
            active: true,
            played_attack: false,
            status: None,
            selected: None,
        }
    }

    pub fn from_seat(seat: &SeatConfig) -> Self {
        Self::new(seat.name.clone(), seat.human)
    }

    /// Back to a fresh seat for a new deal.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.active = true;
        self.played_attack = false;
        self.status = None;
        self.selected = None;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.human
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn is_out_of_cards(&self) -> bool {
        self.hand.is_empty()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    #[must_use]
    pub fn has_surrendered(&self) -> bool {
        self.status == Some(Status::Surrendered)
    }

    #[must_use]
    pub fn played_attack(&self) -> bool {
        self.played_attack
    }

    pub fn set_played_attack(&mut self, played: bool) {
        self.played_attack = played;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.deselect();
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
        self.deselect();
    }

    /// Remove and return the card at `index`.
    ///
    /// A selection on the removed card is cleared; a selection after it
    /// follows its card.
    pub fn remove_card(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.hand.len() {
            return Err(HandError::IndexOutOfBounds {
                index,
                len: self.hand.len(),
            });
        }
        let card = self.hand.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Ok(card)
    }

    /// Position of `card` in the hand.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|c| c == card)
    }

    pub fn select_card(&mut self, index: usize) -> Result<(), HandError> {
        if index >= self.hand.len() {
            return Err(HandError::IndexOutOfBounds {
                index,
                len: self.hand.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|i| self.hand.get(i))
    }

    /// Mark the player as out of the game. Returns false if already out.
    pub fn eliminate(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.played_attack = false;
        self.selected = None;
        self.status = Some(Status::Out);
        true
    }
}

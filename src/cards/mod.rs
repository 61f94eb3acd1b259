//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the 4 × 9 Durak card space (Six to Ace)
//! - `Card`: immutable identity with the trump-aware `can_beat` relation
//!   and the `"10H"` string codec
//! - `Deck`: the stock, drawn from the front with the trump card at the bottom

pub mod card;
pub mod deck;

pub use card::{parse_cards, Card, ParseCardError, Rank, Suit};
pub use deck::{Deck, DeckError};

//! Card identity, the beat relation and the card string codec.
//!
//! Cards are written as a rank symbol followed by a suit letter:
//! `"6C"`, `"10H"`, `"QS"`, `"AD"`. This is the encoding used in exported
//! game state and in decision responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// One-letter code used in card strings.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }

    #[must_use]
    pub fn from_code(code: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// Card rank, ordered Six (lowest) to Ace (highest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Symbol used in card strings.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

/// Errors from parsing a card string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("empty card string")]
    Empty,
    #[error("unknown rank {rank:?} in card {input:?}")]
    UnknownRank { input: String, rank: String },
    #[error("unknown suit {suit:?} in card {input:?}")]
    UnknownSuit { input: String, suit: char },
}

/// A playing card.
///
/// Deliberately not `Copy`: each card exists once and moves between the
/// deck, hands, the battlefield and the discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn is_trump(&self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Can this card beat `other` when `trump` is the trump suit?
    ///
    /// A trump beats any non-trump, a non-trump never beats a trump, and
    /// otherwise only a higher card of the same suit wins.
    #[must_use]
    pub fn can_beat(&self, other: &Card, trump: Suit) -> bool {
        match (self.is_trump(trump), other.is_trump(trump)) {
            (true, false) => true,
            (false, true) => false,
            _ => self.suit == other.suit && self.rank > other.rank,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_code = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_symbol = chars.as_str();

        let suit = Suit::from_code(suit_code).ok_or_else(|| ParseCardError::UnknownSuit {
            input: s.to_string(),
            suit: suit_code,
        })?;
        let rank = Rank::from_symbol(rank_symbol).ok_or_else(|| ParseCardError::UnknownRank {
            input: s.to_string(),
            rank: rank_symbol.to_string(),
        })?;

        Ok(Card { suit, rank })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse a list of card strings, failing on the first malformed one.
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, ParseCardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_trump_six_beats_plain_ace() {
        assert!(card("6H").can_beat(&card("AS"), Suit::Hearts));
        assert!(!card("AS").can_beat(&card("6H"), Suit::Hearts));
    }

    #[test]
    fn test_same_suit_higher_wins() {
        assert!(card("9C").can_beat(&card("7C"), Suit::Hearts));
        assert!(!card("7C").can_beat(&card("9C"), Suit::Hearts));
        assert!(!card("9C").can_beat(&card("9C"), Suit::Hearts));
    }

    #[test]
    fn test_different_plain_suits_never_beat() {
        assert!(!card("AC").can_beat(&card("6S"), Suit::Hearts));
        assert!(!card("6S").can_beat(&card("AC"), Suit::Hearts));
    }

    #[test]
    fn test_trump_against_trump_uses_rank() {
        assert!(card("10D").can_beat(&card("9D"), Suit::Diamonds));
        assert!(!card("9D").can_beat(&card("10D"), Suit::Diamonds));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(card("10H").to_string(), "10H");
        assert_eq!(card("AS"), Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(card("6C").rank(), Rank::Six);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert!(matches!(
            "5H".parse::<Card>(),
            Err(ParseCardError::UnknownRank { .. })
        ));
        assert!(matches!(
            "AX".parse::<Card>(),
            Err(ParseCardError::UnknownSuit { suit: 'X', .. })
        ));
        assert!(matches!(
            "H".parse::<Card>(),
            Err(ParseCardError::UnknownRank { .. })
        ));
        assert!(matches!(
            "1H".parse::<Card>(),
            Err(ParseCardError::UnknownRank { .. })
        ));
        assert!(matches!(
            "as".parse::<Card>(),
            Err(ParseCardError::UnknownSuit { .. })
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&vec![card("10H"), card("KD")]).unwrap();
        assert_eq!(json, r#"["10H","KD"]"#);

        let err = serde_json::from_str::<Card>(r#""ZZ""#).unwrap_err();
        assert!(err.to_string().contains("unknown suit"));
    }

    #[test]
    fn test_parse_cards() {
        assert_eq!(parse_cards(["6C", "7C"]).unwrap().len(), 2);
        assert!(parse_cards(["6C", "bogus"]).is_err());
    }

    #[test]
    fn test_rank_order() {
        assert!(Rank::Six < Rank::Ten);
        assert!(Rank::King < Rank::Ace);
        assert_eq!(Rank::ALL.len(), 9);
    }
}

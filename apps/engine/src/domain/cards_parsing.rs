//! Card parsing from the 2-character wire form (e.g., "7D", "QS")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Rank {
    pub const fn as_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
        }
    }

    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            'A' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            'K' => Some(Rank::King),
            _ => None,
        }
    }
}

impl Suit {
    pub const fn as_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    pub const fn from_char(ch: char) -> Option<Suit> {
        match ch {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl Card {
    /// Wire code such as `"7D"`.
    pub fn code(self) -> String {
        format!("{}{}", self.rank.as_char(), self.suit.as_char())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.as_char(), self.suit.as_char())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_err());
        };
        let rank = Rank::from_char(rank_ch).ok_or_else(parse_err)?;
        let suit = Suit::from_char(suit_ch).ok_or_else(parse_err)?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "7D") into Card instances.
/// Returns Result<Vec<Card>, DomainError> if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

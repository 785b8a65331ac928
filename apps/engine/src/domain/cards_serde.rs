//! Wire forms: suits as upper-case names, cards as their 2-character code.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

const SUIT_NAMES: [(Suit, &str); 4] = [
    (Suit::Hearts, "HEARTS"),
    (Suit::Diamonds, "DIAMONDS"),
    (Suit::Clubs, "CLUBS"),
    (Suit::Spades, "SPADES"),
];

impl Suit {
    pub fn name(self) -> &'static str {
        SUIT_NAMES
            .iter()
            .find(|(suit, _)| *suit == self)
            .map_or("", |(_, name)| name)
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        SUIT_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(suit, _)| *suit)
    }
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TokenVisitor {
            expecting: "a suit name such as \"DIAMONDS\"",
            parse: |s| Suit::from_name(s).ok_or_else(|| format!("Invalid suit: {s}")),
        })
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TokenVisitor {
            expecting: "a card code such as \"7D\"",
            parse: |s| s.parse::<Card>().map_err(|e| e.to_string()),
        })
    }
}

/// Visits a string token without allocating and hands it to `parse`.
struct TokenVisitor<T> {
    expecting: &'static str,
    parse: fn(&str) -> Result<T, String>,
}

impl<T> Visitor<'_> for TokenVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        (self.parse)(v).map_err(E::custom)
    }
}

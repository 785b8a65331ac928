//! Player view of a round: what one seat can see at its decision point.

use serde::Serialize;

use crate::domain::capture::{
    find_capturable, find_combinations, is_listed_combination, legal_moves,
};
use crate::domain::state::{PlayRecord, RoundState, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Information visible to a player at a decision point for the current round.
///
/// This is the interface between the engine and automated players. It holds
/// the seat's own hand, the face-up table, public counters and the play
/// history of the round, but never another seat's hand or the deck order.
///
/// Use the helper methods instead of re-implementing capture rules:
///
/// - [`legal_plays()`](Self::legal_plays) - every legal (card, capture) pair
/// - [`combinations_for()`](Self::combinations_for) - captures for one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub seat: Seat,
    pub seats: u8,
    pub round_no: u32,
    pub dealer: Seat,
    /// Seat to act, `None` if the round is over.
    pub to_act: Option<Seat>,
    pub hand: Vec<Card>,
    pub table: Vec<Card>,
    pub deck_remaining: usize,
    pub hand_sizes: Vec<usize>,
    /// Cards this seat captured so far this round.
    pub my_pile: Vec<Card>,
    pub pile_sizes: Vec<usize>,
    pub chkobbas: Vec<u8>,
    /// Every play of the round so far, oldest first.
    pub history: Vec<PlayRecord>,
    /// Cumulative game scores indexed by seat.
    pub scores: Vec<u32>,
    pub target_score: u32,
}

impl PlayerView {
    pub fn from_round(
        round: &RoundState,
        seat: Seat,
        scores: &[u32],
        target_score: u32,
    ) -> Result<Self, DomainError> {
        let hand = round.hand(seat)?.to_vec();
        Ok(Self {
            seat,
            seats: round.seats,
            round_no: round.round_no,
            dealer: round.dealer,
            to_act: round.turn(),
            hand,
            table: round.table.clone(),
            deck_remaining: round.deck.len(),
            hand_sizes: round.hands.iter().map(Vec::len).collect(),
            my_pile: round.piles[seat as usize].clone(),
            pile_sizes: round.piles.iter().map(Vec::len).collect(),
            chkobbas: round.chkobbas.clone(),
            history: round.plays.clone(),
            scores: scores.to_vec(),
            target_score,
        })
    }

    pub fn is_my_turn(&self) -> bool {
        self.to_act == Some(self.seat)
    }

    /// Legal (card, capture) pairs in hand order; captures are mandatory.
    pub fn legal_plays(&self) -> Vec<(Card, Vec<Card>)> {
        legal_moves(&self.hand, &self.table)
    }

    /// Whether `card` with `captured` (in any order) is one of the legal plays.
    pub fn is_legal(&self, card: Card, captured: &[Card]) -> bool {
        self.legal_plays()
            .iter()
            .any(|(c, cap)| {
                *c == card && is_listed_combination(captured, std::slice::from_ref(cap))
            })
    }

    pub fn combinations_for(&self, card: Card) -> Vec<Vec<Card>> {
        find_combinations(card, &self.table)
    }

    pub fn capturable_by(&self, card: Card) -> Vec<Card> {
        find_capturable(card, &self.table)
    }

    /// Cards already seen this round: own hand, table, and everything played.
    pub fn seen_cards(&self) -> Vec<Card> {
        let mut seen: Vec<Card> = self.hand.iter().chain(&self.table).copied().collect();
        for play in &self.history {
            seen.push(play.card);
            seen.extend_from_slice(&play.captured);
        }
        seen.sort();
        seen.dedup();
        seen
    }
}

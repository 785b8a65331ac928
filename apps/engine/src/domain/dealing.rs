//! Deterministic deck construction and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::domain::rules::{validate_seat_count, DECK_SIZE, HAND_SIZE, INITIAL_TABLE};
use crate::domain::state::{round_start_seat, seat_offset, RoundState, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, IntegrityKind};

/// The 40-card deck in catalog order (suit, then rank).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Full deck shuffled with a seeded ChaCha stream; same seed, same order.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal `HAND_SIZE` cards to every seat, starting with the seat after the dealer.
///
/// Fails with an integrity error if the deck cannot cover a full deal; the
/// round is left untouched in that case.
pub fn deal_hands(round: &mut RoundState) -> Result<(), DomainError> {
    let needed = HAND_SIZE * round.seats as usize;
    if round.deck.len() < needed {
        return Err(DomainError::integrity(
            IntegrityKind::DeckExhaustedDuringDeal,
            format!(
                "deal needs {needed} cards but deck holds {}",
                round.deck.len()
            ),
        ));
    }

    let first = round_start_seat(round.dealer, round.seats);
    for _ in 0..HAND_SIZE {
        for step in 0..round.seats {
            let seat: Seat = seat_offset(first, step, round.seats);
            if let Some(card) = round.deck.pop() {
                round.hands[seat as usize].push(card);
            }
        }
    }
    round.deals = round.deals.saturating_add(1);

    debug!(
        round_no = round.round_no,
        deck_remaining = round.deck.len(),
        "Dealt hands"
    );
    Ok(())
}

/// Shuffle a fresh deck and open a round: 3 cards per seat, then 4 face up.
///
/// The seat after the dealer acts first.
pub fn start_round(
    round_no: u32,
    seats: u8,
    dealer: Seat,
    seed: u64,
) -> Result<RoundState, DomainError> {
    validate_seat_count(seats as usize)?;

    let mut round = RoundState::empty(round_no, seats, dealer);
    round.deck = shuffled_deck(seed);
    deal_hands(&mut round)?;
    for _ in 0..INITIAL_TABLE {
        if let Some(card) = round.deck.pop() {
            round.table.push(card);
        }
    }
    round.check_conservation()?;
    Ok(round)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::state::RoundPhase;

    #[test]
    fn full_deck_has_forty_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 40);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 40);
    }

    #[test]
    fn shuffle_is_deterministic() {
        assert_eq!(shuffled_deck(12345), shuffled_deck(12345));
        assert_ne!(shuffled_deck(12345), shuffled_deck(54321));
    }

    #[test]
    fn start_round_deals_hands_and_table() {
        for seats in 2..=4u8 {
            let round = start_round(1, seats, 0, 42).unwrap();
            assert!(round.hands.iter().all(|h| h.len() == 3));
            assert_eq!(round.table.len(), 4);
            assert_eq!(round.deck.len(), 40 - 4 - 3 * seats as usize);
            assert_eq!(round.phase, RoundPhase::AwaitingPlay { seat: 1 });
            assert_eq!(round.deals, 1);
            round.check_conservation().unwrap();
        }
    }

    #[test]
    fn start_round_validates_seat_count() {
        assert!(start_round(1, 1, 0, 42).is_err());
        assert!(start_round(1, 5, 0, 42).is_err());
    }

    #[test]
    fn deal_starts_after_dealer() {
        let mut round = RoundState::empty(1, 3, 2);
        round.deck = full_deck();
        let top = round.deck[round.deck.len() - 1];
        deal_hands(&mut round).unwrap();
        // Seat 0 sits after dealer 2 and gets the top card.
        assert_eq!(round.hands[0][0], top);
    }

    #[test]
    fn short_deck_is_an_integrity_error() {
        let mut round = RoundState::empty(1, 4, 0);
        round.deck = full_deck().into_iter().take(11).collect();
        let err = deal_hands(&mut round).unwrap_err();
        assert!(err.is_integrity());
        assert_eq!(round.deck.len(), 11);
        assert!(round.all_hands_empty());
    }
}

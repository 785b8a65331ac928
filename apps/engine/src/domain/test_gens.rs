// Proptest generators for domain types.
// Cards drawn together are always distinct, so generated tables and hands are
// positions that can occur in a real deal.

use proptest::prelude::*;

use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// `count` distinct cards from the 40-card deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all = crate::domain::dealing::full_deck();
        for i in 0..count.min(all.len()) {
            let j = rng.random_range(i..all.len());
            all.swap(i, j);
        }
        all.truncate(count);
        all
    })
}

/// A played card and a table (0..=max_table cards) it does not belong to.
pub fn card_and_table(max_table: usize) -> impl Strategy<Value = (Card, Vec<Card>)> {
    (0..=max_table).prop_flat_map(|n| {
        unique_cards(n + 1).prop_map(|mut cards| {
            let card = cards.remove(0);
            (card, cards)
        })
    })
}

/// A hand of 1..=3 cards and a disjoint table of up to `max_table` cards.
pub fn hand_and_table(max_table: usize) -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    (1usize..=3, 0..=max_table).prop_flat_map(|(h, t)| {
        unique_cards(h + t).prop_map(move |mut cards| {
            let table = cards.split_off(h);
            (cards, table)
        })
    })
}

pub fn seat_count() -> impl Strategy<Value = u8> {
    2u8..=4u8
}

pub fn dealer(seats: u8) -> impl Strategy<Value = Seat> {
    0..seats
}

/// Seats, dealer and shuffle seed for a full round.
pub fn round_setup() -> impl Strategy<Value = (u8, Seat, u64)> {
    seat_count().prop_flat_map(|seats| (Just(seats), dealer(seats), any::<u64>()))
}

#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use chkobba_engine::domain::cards_parsing::try_parse_cards;
use chkobba_engine::domain::RecordingSink;
use chkobba_engine::{Card, GameConfig, GameSession, SeatKind};
use engine_test_support::unique_helpers::unique_room_id;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

pub fn seeded_config(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

/// Session on a fresh room id with a recording sink.
pub fn new_session(
    seats: &[SeatKind],
    config: GameConfig,
) -> (GameSession, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let session = GameSession::new(unique_room_id(), seats, config, sink.clone())
        .expect("valid session setup");
    (session, sink)
}

/// First legal play for `seat`, in hand order.
pub fn first_legal(session: &GameSession, seat: u8) -> (Card, Vec<Card>) {
    session
        .player_view(seat)
        .expect("seat in game")
        .legal_plays()
        .into_iter()
        .next()
        .expect("seat holds a card")
}

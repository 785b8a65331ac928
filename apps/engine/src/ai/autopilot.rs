//! Deterministic move used when a turn times out.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::capture::find_combinations;
use crate::domain::player_view::PlayerView;
use crate::domain::Card;

/// Pick a play for a seat whose timer expired.
///
/// Scans the hand in order and lays down the first card that captures
/// nothing. If every card must capture, plays the first card with its first
/// combination. `None` only for an empty hand.
pub fn decide_auto_play(hand: &[Card], table: &[Card]) -> Option<(Card, Vec<Card>)> {
    if let Some(&card) = hand
        .iter()
        .find(|&&c| find_combinations(c, table).is_empty())
    {
        return Some((card, Vec::new()));
    }
    let &card = hand.first()?;
    let first = find_combinations(card, table).into_iter().next()?;
    Some((card, first))
}

/// The timeout policy as a player; also the fallback for failing AIs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Autopilot;

impl Autopilot {
    pub const NAME: &'static str = "Autopilot";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(_seed: Option<u64>) -> Self {
        Self
    }
}

impl AiPlayer for Autopilot {
    fn choose_play(&self, view: &PlayerView) -> Result<(Card, Vec<Card>), AiError> {
        decide_auto_play(&view.hand, &view.table).ok_or(AiError::EmptyHand)
    }
}

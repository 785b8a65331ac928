//! "Medium" AI: greedy on the immediate capture.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{value_sum, Card};

/// Scores each legal move once and keeps the best.
///
/// Taking the 7 of diamonds outranks everything, clearing the table comes
/// next, and the captured value breaks the rest. Ties keep the earliest move
/// in hand order, so the player is deterministic.
#[derive(Debug, Default, Clone)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    const HAYA_BONUS: u32 = 100;
    const CLEAR_BONUS: u32 = 50;

    pub fn new(_seed: Option<u64>) -> Self {
        Self
    }

    fn score(table: &[Card], captured: &[Card]) -> u32 {
        let mut score = value_sum(captured);
        if captured.contains(&Card::HAYA) {
            score += Self::HAYA_BONUS;
        }
        if !captured.is_empty() && captured.len() == table.len() {
            score += Self::CLEAR_BONUS;
        }
        score
    }
}

impl AiPlayer for Heuristic {
    fn choose_play(&self, view: &PlayerView) -> Result<(Card, Vec<Card>), AiError> {
        let mut best: Option<(u32, (Card, Vec<Card>))> = None;
        for mv in view.legal_plays() {
            let score = Self::score(&view.table, &mv.1);
            match &best {
                Some((top, _)) if score <= *top => {}
                _ => best = Some((score, mv)),
            }
        }
        best.map(|(_, mv)| mv)
            .ok_or(AiError::EmptyHand)
    }
}

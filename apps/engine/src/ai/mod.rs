//! AI player module - handles automated game decisions.
//!
//! This module provides:
//! - AI trait for different AI implementations
//! - Autopilot: the timeout policy, also the fallback when an AI fails
//! - RandomPlayer, Heuristic, Strategic: the easy, medium and hard opponents
//! - A static registry keyed by name and difficulty

mod autopilot;
mod heuristic;
mod random;
pub mod registry;
mod strategic;
mod trait_def;

pub use autopilot::{decide_auto_play, Autopilot};
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory, Difficulty};
pub use strategic::{Strategic, Weights};
pub use trait_def::{AiError, AiPlayer};

use tracing::warn;

use crate::domain::player_view::PlayerView;
use crate::domain::Card;

/// Ask `ai` for a play, falling back to the timeout policy if it fails or
/// answers with a move that is not legal.
pub fn choose_or_fallback(ai: &dyn AiPlayer, view: &PlayerView) -> Option<(Card, Vec<Card>)> {
    match ai.choose_play(view) {
        Ok((card, captured)) if view.is_legal(card, &captured) => Some((card, captured)),
        Ok((card, captured)) => {
            warn!(seat = view.seat, %card, ?captured, "AI chose an illegal play, using autopilot");
            decide_auto_play(&view.hand, &view.table)
        }
        Err(err) => {
            warn!(seat = view.seat, error = %err, "AI failed, using autopilot");
            decide_auto_play(&view.hand, &view.table)
        }
    }
}

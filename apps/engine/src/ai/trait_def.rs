//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::PlayerView;
use crate::domain::Card;
use crate::error::AppError;

/// Why an automated player could not answer.
#[derive(Debug, Error)]
pub enum AiError {
    /// The seat's hand is empty.
    #[error("AI has no card to play")]
    EmptyHand,
    #[error("AI internal error: {0}")]
    Internal(String),
}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// Trait for automated players.
///
/// Implementations receive what their seat can see and return a card plus
/// the table cards it captures. The choice is submitted through the same
/// entry point as a human play, so an illegal answer is rejected there.
pub trait AiPlayer: Send + Sync {
    /// Choose a card and its capture (empty when laying the card down).
    ///
    /// The AI should query `view.legal_plays()` to get valid options.
    fn choose_play(&self, view: &PlayerView) -> Result<(Card, Vec<Card>), AiError>;
}

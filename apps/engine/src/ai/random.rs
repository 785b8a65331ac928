//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the "easy" difficulty and the baseline other players
//! are measured against in simulations.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::Card;

/// AI that picks uniformly among legal (card, capture) pairs.
///
/// # Usage
///
/// ```rust,ignore
/// use chkobba_engine::ai::RandomPlayer;
///
/// // Non-deterministic (uses system entropy)
/// let random_ai = RandomPlayer::new(None);
///
/// // Deterministic (uses seed for reproducible behavior)
/// let seeded_ai = RandomPlayer::new(Some(12345));
/// ```
pub struct RandomPlayer {
    /// `choose_play` takes `&self`, so the RNG lives behind a lock.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible choices; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_play(&self, view: &PlayerView) -> Result<(Card, Vec<Card>), AiError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(AiError::EmptyHand);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| AiError::Internal("Failed to choose random play".into()))
    }
}

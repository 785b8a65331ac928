//! "Hard" AI: weighted evaluation of every legal move.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::PlayerView;
use crate::domain::{value_sum, Card, Suit};

/// Evaluation weights. Public so simulations can report what was played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub haya: f64,
    pub clear_table: f64,
    pub per_value: f64,
    pub per_card: f64,
    pub per_diamond: f64,
    pub dinari: f64,
    /// Subtracted when a low card is laid next to a higher table card.
    pub low_discard: f64,
    /// Half-width of the uniform jitter added to each score.
    pub jitter: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            haya: 100.0,
            clear_table: 75.0,
            per_value: 2.0,
            per_card: 1.5,
            per_diamond: 1.0,
            dinari: 3.0,
            low_discard: 10.0,
            jitter: 5.0,
        }
    }
}

/// Scores every legal move with [`Weights`] plus a small seeded jitter and
/// plays the best one.
pub struct Strategic {
    weights: Weights,
    rng: Mutex<StdRng>,
}

impl Strategic {
    pub const NAME: &'static str = "Strategic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self::with_weights(seed, Weights::default())
    }

    pub fn with_weights(seed: Option<u64>, weights: Weights) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            weights,
            rng: Mutex::new(rng),
        }
    }

    /// Score without jitter.
    pub fn evaluate(&self, table: &[Card], card: Card, captured: &[Card]) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;
        if captured.contains(&Card::HAYA) {
            score += w.haya;
        }
        if captured.contains(&Card::DINARI) || (!captured.is_empty() && card == Card::DINARI) {
            score += w.dinari;
        }
        if !captured.is_empty() && captured.len() == table.len() {
            score += w.clear_table;
        }
        score += f64::from(value_sum(captured)) * w.per_value;
        score += captured.len() as f64 * w.per_card;
        let diamonds = captured
            .iter()
            .chain(std::iter::once(&card).filter(|_| !captured.is_empty()))
            .filter(|c| c.suit == Suit::Diamonds)
            .count();
        score += diamonds as f64 * w.per_diamond;

        let high_on_table = table.iter().map(|c| c.value()).max().unwrap_or(0);
        if captured.is_empty() && card.value() < high_on_table {
            score -= w.low_discard;
        }
        score
    }
}

impl AiPlayer for Strategic {
    fn choose_play(&self, view: &PlayerView) -> Result<(Card, Vec<Card>), AiError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(AiError::EmptyHand);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let mut best: Option<(f64, usize)> = None;
        for (i, (card, captured)) in legal.iter().enumerate() {
            let jitter = if self.weights.jitter > 0.0 {
                rng.random_range(-self.weights.jitter..=self.weights.jitter)
            } else {
                0.0
            };
            let score = self.evaluate(&view.table, *card, captured) + jitter;
            match best {
                Some((top, _)) if score <= top => {}
                _ => best = Some((score, i)),
            }
        }

        best.and_then(|(_, i)| legal.get(i).cloned())
            .ok_or_else(|| AiError::Internal("Failed to rank plays".into()))
    }
}

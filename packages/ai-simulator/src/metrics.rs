//! Metrics collection and output for AI simulation results.

use chkobba_engine::ai::Difficulty;
use chkobba_engine::domain::scoring::{AwardKind, RoundSummary};
use chkobba_engine::domain::Seat;
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics, one JSON line per game.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub seats: Vec<Difficulty>,
    pub target_score: u32,
    pub final_scores: Vec<u32>,
    pub winners: Vec<Seat>,
    pub rounds_played: usize,
    pub plays: u32,
    pub chkobbas: Vec<u32>,
    pub hayas: Vec<u32>,
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
}

/// Per-round breakdown, only written in detailed mode.
#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub dealer: Seat,
    pub points: Vec<u32>,
    pub pile_sizes: Vec<u32>,
    pub most_cards: Option<Seat>,
    pub most_diamonds: Option<Seat>,
    pub unclaimed: usize,
}

/// Flat row for the CSV summary; per-seat columns are `|`-joined.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winners: String,
    pub scores: String,
    pub seats: String,
    pub rounds: usize,
    pub plays: u32,
}

pub fn build_game_metrics(
    game_id: u32,
    seats: &[Difficulty],
    target_score: u32,
    result: &GameResult,
    duration_ms: f64,
    detailed: bool,
) -> GameMetrics {
    GameMetrics {
        game_id,
        seed: result.seed,
        seats: seats.to_vec(),
        target_score,
        final_scores: result.final_scores.values().copied().collect(),
        winners: result.winners.clone(),
        rounds_played: result.rounds.len(),
        plays: result.plays,
        chkobbas: result.chkobbas.clone(),
        hayas: result.hayas.clone(),
        duration_ms,
        rounds: if detailed {
            result.rounds.iter().map(round_metrics).collect()
        } else {
            Vec::new()
        },
    }
}

fn round_metrics(summary: &RoundSummary) -> RoundMetrics {
    let award_to = |kind: AwardKind| {
        summary
            .score
            .awards
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.seat)
    };
    RoundMetrics {
        round_no: summary.round_no,
        dealer: summary.dealer,
        points: summary.score.points.clone(),
        pile_sizes: summary.score.tallies.iter().map(|t| t.total_cards).collect(),
        most_cards: award_to(AwardKind::MostCards),
        most_diamonds: award_to(AwardKind::MostDiamonds),
        unclaimed: summary.unclaimed.len(),
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        Self {
            game_id: m.game_id,
            seed: m.seed,
            winners: join(&m.winners),
            scores: join(&m.final_scores),
            seats: join(&m.seats),
            rounds: m.rounds_played,
            plays: m.plays,
        }
    }
}

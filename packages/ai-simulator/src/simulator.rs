//! In-memory game simulator for AI training and evaluation.
//!
//! Drives a [`GameSession`] where every seat is automated. No rooms, no
//! timers: each AI is asked for its play as soon as the turn reaches it.

use std::collections::BTreeMap;
use std::sync::Arc;

use chkobba_engine::ai::Difficulty;
use chkobba_engine::domain::scoring::RoundSummary;
use chkobba_engine::domain::{GameEvent, RoomId, RoundEventSink, Seat};
use chkobba_engine::services::SessionStatus;
use chkobba_engine::{AppError, GameConfig, GameSession, SeatKind};
use parking_lot::Mutex;
use tracing::debug;

/// Rounds after which a game is treated as stuck.
const MAX_ROUNDS: usize = 500;

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub final_scores: BTreeMap<Seat, u32>,
    pub winners: Vec<Seat>,
    pub rounds: Vec<RoundSummary>,
    pub plays: u32,
    /// Chkobbas per seat over the whole game.
    pub chkobbas: Vec<u32>,
    /// Hayas per seat over the whole game.
    pub hayas: Vec<u32>,
}

/// Counts per-seat table clears as the session reports them.
struct SweepCounter {
    chkobbas: Mutex<Vec<u32>>,
    hayas: Mutex<Vec<u32>>,
}

impl SweepCounter {
    fn new(seats: usize) -> Self {
        Self {
            chkobbas: Mutex::new(vec![0; seats]),
            hayas: Mutex::new(vec![0; seats]),
        }
    }
}

impl RoundEventSink for SweepCounter {
    fn on_event(&self, room_id: RoomId, event: &GameEvent) {
        match event {
            GameEvent::Chkobba { seat, round_no } => {
                debug!(room_id, seat, round_no, "chkobba");
                if let Some(n) = self.chkobbas.lock().get_mut(*seat as usize) {
                    *n += 1;
                }
            }
            GameEvent::Haya { seat, round_no } => {
                debug!(room_id, seat, round_no, "haya");
                if let Some(n) = self.hayas.lock().get_mut(*seat as usize) {
                    *n += 1;
                }
            }
            _ => {}
        }
    }
}

pub struct Simulator {
    seats: Vec<Difficulty>,
    target_score: u32,
}

impl Simulator {
    pub fn new(seats: Vec<Difficulty>, target_score: u32) -> Self {
        Self {
            seats,
            target_score,
        }
    }

    pub fn seats(&self) -> &[Difficulty] {
        &self.seats
    }

    /// Play one game to completion with the given seed.
    pub fn simulate_game(&self, game_id: RoomId, seed: u64) -> Result<GameResult, AppError> {
        let kinds: Vec<SeatKind> = self.seats.iter().map(|&d| SeatKind::Ai(d)).collect();
        let config = GameConfig {
            target_score: self.target_score,
            seed: Some(seed),
            ..GameConfig::default()
        };
        let counter = Arc::new(SweepCounter::new(kinds.len()));
        let mut session = GameSession::new(game_id, &kinds, config, counter.clone())?;

        session.start_round()?;
        let mut plays = 0u32;
        while session.current_seat().is_some() {
            if session.summaries().len() > MAX_ROUNDS {
                return Err(AppError::internal(format!(
                    "game {game_id} still running after {MAX_ROUNDS} rounds"
                )));
            }
            session.play_ai_turn()?;
            plays += 1;
        }

        let winners = match session.status() {
            SessionStatus::GameOver { winners } => winners.clone(),
            SessionStatus::Aborted { reason } => {
                return Err(AppError::internal(format!(
                    "game {game_id} aborted: {reason}"
                )))
            }
            other => {
                return Err(AppError::internal(format!(
                    "game {game_id} stopped in {other:?}"
                )))
            }
        };

        let chkobbas = counter.chkobbas.lock().clone();
        let hayas = counter.hayas.lock().clone();
        Ok(GameResult {
            seed,
            final_scores: session.scoreboard(),
            winners,
            rounds: session.summaries().to_vec(),
            plays,
            chkobbas,
            hayas,
        })
    }
}

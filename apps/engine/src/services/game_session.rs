//! Game session: one room's game, driven only through its entry points.
//!
//! Every method runs to completion synchronously. The room registry wraps a
//! session in a lock, so two calls on the same room never interleave.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::ai::{choose_or_fallback, decide_auto_play, AiPlayer, Difficulty};
use crate::config::GameConfig;
use crate::domain::dealing::start_round;
use crate::domain::events::{GameEvent, RoomId, RoundEventSink};
use crate::domain::player_view::PlayerView;
use crate::domain::plays::{apply_play, PlayResult};
use crate::domain::rules::validate_seat_count;
use crate::domain::scoring::{
    add_round_points, game_winners, score_round, RoundSummary, TableSwept,
};
use crate::domain::snapshot::{
    GameOverSnapshot, GameSnapshot, PhaseSnapshot, RoundPublic, SeatAiProfilePublic, SeatPublic,
};
use crate::domain::state::{dealer_for_round, RoundState, Seat};
use crate::domain::{derive_ai_seed, derive_dealing_seed, Card};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "difficulty", rename_all = "snake_case")]
pub enum SeatKind {
    Human,
    Ai(Difficulty),
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Created, no round dealt yet.
    Init,
    Playing,
    GameOver { winners: Vec<Seat> },
    /// Terminal. Every further input is rejected with `RoundAborted`.
    Aborted { reason: String },
}

/// Result of a state-changing call, shaped for the room collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Events emitted by this call, in order.
    pub events: Vec<GameEvent>,
    /// Seat to act next; `None` once the game is over.
    pub next_seat: Option<Seat>,
    /// Turn id after the call; timers armed for older ids are stale.
    pub turn_id: u64,
    pub snapshot: GameSnapshot,
}

struct SeatSlot {
    kind: SeatKind,
    ai: Option<Box<dyn AiPlayer + Send + Sync>>,
    profile: Option<SeatAiProfilePublic>,
}

pub struct GameSession {
    room_id: RoomId,
    config: GameConfig,
    game_seed: u64,
    seats: Vec<SeatSlot>,
    starting_dealer: Seat,
    round: Option<RoundState>,
    scores: Vec<u32>,
    summaries: Vec<RoundSummary>,
    status: SessionStatus,
    turn_id: u64,
    sink: Arc<dyn RoundEventSink>,
}

impl GameSession {
    pub fn new(
        room_id: RoomId,
        seats: &[SeatKind],
        config: GameConfig,
        sink: Arc<dyn RoundEventSink>,
    ) -> Result<Self, AppError> {
        config.validate()?;
        validate_seat_count(seats.len())?;

        let game_seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut slots = Vec::with_capacity(seats.len());
        for (i, &kind) in seats.iter().enumerate() {
            let slot = match kind {
                SeatKind::Human => SeatSlot {
                    kind,
                    ai: None,
                    profile: None,
                },
                SeatKind::Ai(difficulty) => {
                    let factory = difficulty.factory().ok_or_else(|| {
                        AppError::internal(format!("no AI registered for {difficulty}"))
                    })?;
                    SeatSlot {
                        kind,
                        ai: Some((factory.make)(Some(derive_ai_seed(game_seed, i as u8)))),
                        profile: Some(SeatAiProfilePublic {
                            name: factory.name.to_string(),
                            version: factory.version.to_string(),
                        }),
                    }
                }
            };
            slots.push(slot);
        }

        info!(room_id, seats = seats.len(), target = config.target_score, "Game session created");

        Ok(Self {
            room_id,
            config,
            game_seed,
            scores: vec![0; slots.len()],
            seats: slots,
            starting_dealer: 0,
            round: None,
            summaries: Vec::new(),
            status: SessionStatus::Init,
            turn_id: 0,
            sink,
        })
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn turn_id(&self) -> u64 {
        self.turn_id
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    pub fn seat_kind(&self, seat: Seat) -> Option<SeatKind> {
        self.seats.get(seat as usize).map(|s| s.kind)
    }

    /// Seat holding the turn while a round is in play.
    pub fn current_seat(&self) -> Option<Seat> {
        match self.status {
            SessionStatus::Playing => self.round.as_ref().and_then(RoundState::turn),
            _ => None,
        }
    }

    pub fn current_seat_is_ai(&self) -> bool {
        self.current_seat()
            .and_then(|s| self.seat_kind(s))
            .is_some_and(|k| matches!(k, SeatKind::Ai(_)))
    }

    /// How long the current turn may run before the scheduler acts for it.
    pub fn turn_delay(&self) -> Option<Duration> {
        self.current_seat()?;
        Some(if self.current_seat_is_ai() {
            self.config.ai_think_time
        } else {
            self.config.turn_timeout
        })
    }

    /// Deal round 1. Only valid once, on a fresh session.
    pub fn start_round(&mut self) -> Result<PlayOutcome, AppError> {
        self.ensure_not_aborted()?;
        if self.status != SessionStatus::Init {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Game already started",
            )
            .into());
        }
        let mut events = Vec::new();
        self.deal_round(1, &mut events)?;
        Ok(self.outcome(events))
    }

    /// Apply a seat's play. Rejected plays leave the session untouched.
    pub fn apply_play(
        &mut self,
        seat: Seat,
        card: Card,
        captured: &[Card],
    ) -> Result<PlayOutcome, AppError> {
        self.ensure_not_aborted()?;
        if self.status != SessionStatus::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "No round in play",
            )
            .into());
        }
        let Some(round) = self.round.as_mut() else {
            return Err(AppError::internal("playing session without a round"));
        };

        let result = match apply_play(round, seat, card, captured) {
            Ok(result) => result,
            Err(err) if err.is_integrity() => return Err(self.abort_on_integrity(err)),
            Err(err) => {
                debug!(room_id = self.room_id, seat, %card, error = %err, "Play rejected");
                return Err(err.into());
            }
        };

        self.turn_id += 1;
        debug!(room_id = self.room_id, seat, %card, turn_id = self.turn_id, "Play accepted");

        let mut events = Vec::new();
        for event in &result.events {
            self.emit(event.clone(), &mut events);
        }
        if result.round_complete() {
            self.finish_round(result, &mut events)?;
        }
        Ok(self.outcome(events))
    }

    /// Play for the current seat with the timeout policy.
    pub fn on_timeout(&mut self) -> Result<PlayOutcome, AppError> {
        let (seat, card, captured) = self.auto_play_for_current()?;
        info!(room_id = self.room_id, seat, %card, "Turn timed out, autoplaying");
        self.apply_play(seat, card, &captured)
    }

    /// Let the automated player in the current seat act. Falls back to the
    /// timeout policy when the AI fails.
    pub fn play_ai_turn(&mut self) -> Result<PlayOutcome, AppError> {
        self.ensure_not_aborted()?;
        let seat = self.current_seat().ok_or_else(|| {
            AppError::from(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "No round in play",
            ))
        })?;
        let view = self.player_view(seat)?;
        let choice = match self.seats[seat as usize].ai.as_deref() {
            Some(ai) => choose_or_fallback(ai, &view),
            None => {
                warn!(room_id = self.room_id, seat, "AI turn requested for a human seat");
                decide_auto_play(&view.hand, &view.table)
            }
        };
        let (card, captured) =
            choice.ok_or_else(|| AppError::internal(format!("seat {seat} has no card to play")))?;
        self.apply_play(seat, card, &captured)
    }

    /// Cumulative score per seat.
    pub fn scoreboard(&self) -> BTreeMap<Seat, u32> {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as Seat, s))
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let phase = match &self.status {
            SessionStatus::Init => PhaseSnapshot::Init,
            SessionStatus::Playing => match &self.round {
                Some(round) => PhaseSnapshot::Playing(RoundPublic::from_round(round)),
                None => PhaseSnapshot::Init,
            },
            SessionStatus::GameOver { winners } => PhaseSnapshot::GameOver(GameOverSnapshot {
                rounds_played: self.summaries.len() as u32,
                winners: winners.clone(),
            }),
            SessionStatus::Aborted { reason } => PhaseSnapshot::Aborted {
                reason: reason.clone(),
            },
        };
        GameSnapshot {
            room_id: self.room_id,
            target_score: self.config.target_score,
            seating: self
                .seats
                .iter()
                .enumerate()
                .map(|(i, s)| SeatPublic {
                    seat: i as Seat,
                    is_ai: s.ai.is_some(),
                    ai_profile: s.profile.clone(),
                })
                .collect(),
            scores_total: self.scores.clone(),
            turn_id: self.turn_id,
            phase,
        }
    }

    pub fn player_view(&self, seat: Seat) -> Result<PlayerView, AppError> {
        let round = self.round.as_ref().ok_or_else(|| {
            DomainError::validation(ValidationKind::PhaseMismatch, "No round dealt yet")
        })?;
        Ok(PlayerView::from_round(
            round,
            seat,
            &self.scores,
            self.config.target_score,
        )?)
    }

    /// Stop the session. Idempotent; later input gets `RoundAborted`.
    pub fn abort(&mut self, reason: impl Into<String>) -> Vec<GameEvent> {
        if matches!(self.status, SessionStatus::Aborted { .. }) {
            return Vec::new();
        }
        let reason = reason.into();
        info!(room_id = self.room_id, %reason, "Game session aborted");
        self.status = SessionStatus::Aborted {
            reason: reason.clone(),
        };
        let mut events = Vec::new();
        self.emit(GameEvent::Aborted { reason }, &mut events);
        events
    }

    fn ensure_not_aborted(&self) -> Result<(), AppError> {
        if let SessionStatus::Aborted { reason } = &self.status {
            return Err(DomainError::validation(
                ValidationKind::RoundAborted,
                format!("Game was aborted: {reason}"),
            )
            .into());
        }
        Ok(())
    }

    fn auto_play_for_current(&self) -> Result<(Seat, Card, Vec<Card>), AppError> {
        self.ensure_not_aborted()?;
        let seat = self.current_seat().ok_or_else(|| {
            AppError::from(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "No round in play",
            ))
        })?;
        let round = self
            .round
            .as_ref()
            .ok_or_else(|| AppError::internal("playing session without a round"))?;
        let hand = round.hand(seat)?;
        let (card, captured) = decide_auto_play(hand, &round.table)
            .ok_or_else(|| AppError::internal(format!("seat {seat} has no card to play")))?;
        Ok((seat, card, captured))
    }

    fn deal_round(&mut self, round_no: u32, events: &mut Vec<GameEvent>) -> Result<(), AppError> {
        let seats = self.seats.len() as u8;
        let dealer = dealer_for_round(self.starting_dealer, round_no, seats);
        let seed = derive_dealing_seed(self.game_seed, round_no);
        let round = match start_round(round_no, seats, dealer, seed) {
            Ok(round) => round,
            Err(err) if err.is_integrity() => return Err(self.abort_on_integrity(err)),
            Err(err) => return Err(err.into()),
        };
        let first_seat = round.turn().unwrap_or(dealer);
        info!(room_id = self.room_id, round_no, dealer, first_seat, "Round started");

        self.round = Some(round);
        self.status = SessionStatus::Playing;
        self.turn_id += 1;
        self.emit(
            GameEvent::RoundStarted {
                round_no,
                dealer,
                first_seat,
            },
            events,
        );
        Ok(())
    }

    fn finish_round(
        &mut self,
        result: PlayResult,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), AppError> {
        let Some(round) = self.round.as_ref() else {
            return Err(AppError::internal("round finished without a round"));
        };
        let round_no = round.round_no;
        let score = score_round(round);
        add_round_points(&mut self.scores, &score);
        let summary = RoundSummary {
            round_no,
            dealer: round.dealer,
            score,
            table_swept: result
                .swept
                .map(|(seat, cards)| TableSwept { seat, cards }),
            unclaimed: result.unclaimed,
            cumulative: self.scoreboard(),
        };
        info!(
            room_id = self.room_id,
            round_no,
            points = ?summary.score.points,
            totals = ?self.scores,
            "Round scored"
        );
        self.summaries.push(summary.clone());
        self.emit(GameEvent::RoundEnded { summary }, events);

        if let Some(winners) = game_winners(&self.scores, self.config.target_score) {
            info!(room_id = self.room_id, ?winners, rounds = round_no, "Game over");
            self.status = SessionStatus::GameOver {
                winners: winners.clone(),
            };
            self.emit(
                GameEvent::GameEnded {
                    final_scores: self.scoreboard(),
                    winners,
                },
                events,
            );
            return Ok(());
        }

        self.deal_round(round_no + 1, events)
    }

    fn abort_on_integrity(&mut self, err: DomainError) -> AppError {
        error!(room_id = self.room_id, error = %err, "Integrity failure, aborting game");
        self.abort(err.to_string());
        err.into()
    }

    fn emit(&self, event: GameEvent, out: &mut Vec<GameEvent>) {
        self.sink.on_event(self.room_id, &event);
        out.push(event);
    }

    fn outcome(&self, events: Vec<GameEvent>) -> PlayOutcome {
        PlayOutcome {
            events,
            next_seat: self.current_seat(),
            turn_id: self.turn_id,
            snapshot: self.snapshot(),
        }
    }
}

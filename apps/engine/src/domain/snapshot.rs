//! Public snapshot API for observing game state without exposing hands.

use serde::{Deserialize, Serialize};

use crate::domain::events::RoomId;
use crate::domain::state::{PlayRecord, RoundState, Seat};
use crate::domain::Card;

/// Public info about a single seat in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub is_ai: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_profile: Option<SeatAiProfilePublic>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAiProfilePublic {
    pub name: String,
    pub version: String,
}

/// Top-level snapshot combining game header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub room_id: RoomId,
    pub target_score: u32,
    pub seating: Vec<SeatPublic>,
    pub scores_total: Vec<u32>,
    /// Id of the turn currently awaiting a play; bumps on every accepted play.
    pub turn_id: u64,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    /// Session created, no round dealt yet.
    Init,
    Playing(RoundPublic),
    GameOver(GameOverSnapshot),
    Aborted { reason: String },
}

/// Shared public round facts (no private hands, no deck order).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub round_no: u32,
    pub dealer: Seat,
    /// `None` once the round is complete.
    pub to_act: Option<Seat>,
    pub table: Vec<Card>,
    pub deck_remaining: usize,
    pub hand_sizes: Vec<usize>,
    pub pile_sizes: Vec<usize>,
    pub chkobbas: Vec<u8>,
    pub last_capturer: Option<Seat>,
    pub last_play: Option<PlayRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSnapshot {
    pub rounds_played: u32,
    pub winners: Vec<Seat>,
}

impl RoundPublic {
    pub fn from_round(round: &RoundState) -> Self {
        Self {
            round_no: round.round_no,
            dealer: round.dealer,
            to_act: round.turn(),
            table: round.table.clone(),
            deck_remaining: round.deck.len(),
            hand_sizes: round.hands.iter().map(Vec::len).collect(),
            pile_sizes: round.piles.iter().map(Vec::len).collect(),
            chkobbas: round.chkobbas.clone(),
            last_capturer: round.last_capturer,
            last_play: round.plays.last().cloned(),
        }
    }
}

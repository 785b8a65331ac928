//! Events emitted by the engine and the sink collaborators receive them through.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use serde::Serialize;

use crate::domain::scoring::RoundSummary;
use crate::domain::state::Seat;

pub type RoomId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh deck was shuffled and the opening deal is on the table.
    RoundStarted {
        round_no: u32,
        dealer: Seat,
        first_seat: Seat,
    },
    /// A capture cleared the table.
    Chkobba { seat: Seat, round_no: u32 },
    /// A chkobba whose capture included the 7 of diamonds.
    Haya { seat: Seat, round_no: u32 },
    /// All hands were empty and a new deal went out.
    Dealt { round_no: u32, deck_remaining: usize },
    RoundEnded { summary: RoundSummary },
    GameEnded {
        final_scores: BTreeMap<Seat, u32>,
        winners: Vec<Seat>,
    },
    /// The session stopped accepting input.
    Aborted { reason: String },
}

/// Capability the session calls synchronously for every event it emits.
///
/// Resolved once when the session is built; implementations must not block.
pub trait RoundEventSink: Send + Sync {
    fn on_event(&self, room_id: RoomId, event: &GameEvent);
}

/// Sink that drops everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl RoundEventSink for NullSink {
    fn on_event(&self, _room_id: RoomId, _event: &GameEvent) {}
}

/// Sink that keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(RoomId, GameEvent)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(RoomId, GameEvent)> {
        self.events.lock().clone()
    }

    pub fn take(&self) -> Vec<(RoomId, GameEvent)> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl RoundEventSink for RecordingSink {
    fn on_event(&self, room_id: RoomId, event: &GameEvent) {
        self.events.lock().push((room_id, event.clone()));
    }
}

//! Room registry: one locked game session per room.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::events::{RoomId, RoundEventSink};
use crate::domain::player_view::PlayerView;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::Seat;
use crate::domain::Card;
use crate::error::AppError;
use crate::services::game_session::{GameSession, PlayOutcome, SeatKind};
use crate::services::turn_timer::{ArmedTimer, TurnTimers};

/// A session plus the countdown armed for its current turn.
pub struct RoomSlot {
    pub session: GameSession,
    pub timer: Option<ArmedTimer>,
}

type SharedRoom = Arc<Mutex<RoomSlot>>;

/// Every mutation of a room happens while holding that room's lock, so a
/// human play and a timer expiry are applied one after the other, never
/// interleaved. Timers are cancelled and re-armed inside the same lock as
/// the play that moved the turn.
pub struct RoomRegistry {
    rooms: DashMap<RoomId, SharedRoom>,
    timers: Option<TurnTimers>,
}

impl RoomRegistry {
    /// Registry that arms turn timers on the given runtime.
    pub fn new(timers: TurnTimers) -> Self {
        Self {
            rooms: DashMap::new(),
            timers: Some(timers),
        }
    }

    /// Registry with no scheduler; turns only advance through explicit calls.
    pub fn without_timers() -> Self {
        Self {
            rooms: DashMap::new(),
            timers: None,
        }
    }

    pub fn create_room(
        &self,
        room_id: RoomId,
        seats: &[SeatKind],
        config: GameConfig,
        sink: Arc<dyn RoundEventSink>,
    ) -> Result<(), AppError> {
        match self.rooms.entry(room_id) {
            Entry::Occupied(_) => Err(AppError::RoomExists { room_id }),
            Entry::Vacant(vacant) => {
                let session = GameSession::new(room_id, seats, config, sink)?;
                vacant.insert(Arc::new(Mutex::new(RoomSlot {
                    session,
                    timer: None,
                })));
                info!(room_id, "Room created");
                Ok(())
            }
        }
    }

    pub fn start(&self, room_id: RoomId) -> Result<PlayOutcome, AppError> {
        self.mutate(room_id, |slot| slot.session.start_round())
    }

    pub fn apply_play(
        &self,
        room_id: RoomId,
        seat: Seat,
        card: Card,
        captured: &[Card],
    ) -> Result<PlayOutcome, AppError> {
        self.mutate(room_id, |slot| slot.session.apply_play(seat, card, captured))
    }

    /// Synthetic timeout for the current seat, for schedulers that keep their own clocks.
    pub fn on_timeout(&self, room_id: RoomId) -> Result<PlayOutcome, AppError> {
        self.mutate(room_id, |slot| slot.session.on_timeout())
    }

    pub fn scoreboard(&self, room_id: RoomId) -> Result<BTreeMap<Seat, u32>, AppError> {
        let room = self.room(room_id)?;
        let slot = room.lock();
        Ok(slot.session.scoreboard())
    }

    pub fn snapshot(&self, room_id: RoomId) -> Result<GameSnapshot, AppError> {
        let room = self.room(room_id)?;
        let slot = room.lock();
        Ok(slot.session.snapshot())
    }

    pub fn player_view(&self, room_id: RoomId, seat: Seat) -> Result<PlayerView, AppError> {
        let room = self.room(room_id)?;
        let slot = room.lock();
        slot.session.player_view(seat)
    }

    /// Id of the turn the room's timer is armed for, if one is running.
    pub fn armed_turn(&self, room_id: RoomId) -> Result<Option<u64>, AppError> {
        let room = self.room(room_id)?;
        let slot = room.lock();
        Ok(slot.timer.as_ref().map(|t| t.turn_id))
    }

    /// Remove the room, cancel its timer and abort its session.
    pub fn close_room(&self, room_id: RoomId) -> Result<(), AppError> {
        let (_, room) = self
            .rooms
            .remove(&room_id)
            .ok_or(AppError::RoomNotFound { room_id })?;
        let mut slot = room.lock();
        if let Some(timer) = slot.timer.take() {
            timer.cancel();
        }
        slot.session.abort("room closed");
        info!(room_id, "Room closed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn room(&self, room_id: RoomId) -> Result<SharedRoom, AppError> {
        self.rooms
            .get(&room_id)
            .map(|r| Arc::clone(r.value()))
            .ok_or(AppError::RoomNotFound { room_id })
    }

    /// Run `op` under the room lock and re-arm the turn timer when it succeeds.
    fn mutate<F>(&self, room_id: RoomId, op: F) -> Result<PlayOutcome, AppError>
    where
        F: FnOnce(&mut RoomSlot) -> Result<PlayOutcome, AppError>,
    {
        // The map guard is released before locking the room.
        let room = self.room(room_id)?;
        let mut slot = room.lock();
        let result = op(&mut *slot);
        match &result {
            Ok(outcome) => {
                debug!(room_id, turn_id = outcome.turn_id, "Room mutated");
                self.rearm(&room, &mut slot);
            }
            Err(err) if !err.is_seat_facing() => {
                // Integrity failures abort the session; stop its countdown.
                self.rearm(&room, &mut slot);
            }
            Err(_) => {}
        }
        result
    }

    fn rearm(&self, room: &SharedRoom, slot: &mut RoomSlot) {
        match &self.timers {
            Some(timers) => timers.rearm(room, slot),
            None => {
                if let Some(old) = slot.timer.take() {
                    old.cancel();
                }
            }
        }
    }
}

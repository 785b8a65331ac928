//! Per-turn countdowns.
//!
//! A timer never touches game state on its own. When it expires it takes the
//! room lock like any other caller and acts only if the turn it was armed for
//! is still the current one.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::services::rooms::RoomSlot;

/// Handle for the countdown of one turn.
#[derive(Debug)]
pub struct ArmedTimer {
    pub turn_id: u64,
    pub delay: Duration,
    token: CancellationToken,
}

impl ArmedTimer {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// What happened when a timer reached the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFire {
    /// The armed turn was still current; a play was submitted for it.
    Applied,
    /// The turn moved on before the timer got the lock.
    Stale,
    /// The play was submitted but rejected.
    Failed,
}

/// Spawns countdown tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TurnTimers {
    handle: Handle,
}

impl TurnTimers {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Timers on the runtime the caller is running in, if any.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Cancel the slot's timer and arm one for the session's current turn.
    ///
    /// Must be called with the room lock held, in the same critical section
    /// as the play that changed the turn.
    pub fn rearm(&self, room: &Arc<Mutex<RoomSlot>>, slot: &mut RoomSlot) {
        if let Some(old) = slot.timer.take() {
            old.cancel();
        }
        let Some(delay) = slot.session.turn_delay() else {
            return;
        };
        let turn_id = slot.session.turn_id();
        let token = CancellationToken::new();
        debug!(
            room_id = slot.session.room_id(),
            turn_id,
            delay_ms = delay.as_millis() as u64,
            "Turn timer armed"
        );
        self.handle.spawn(run_timer(
            self.clone(),
            Arc::downgrade(room),
            turn_id,
            delay,
            token.clone(),
        ));
        slot.timer = Some(ArmedTimer {
            turn_id,
            delay,
            token,
        });
    }
}

async fn run_timer(
    timers: TurnTimers,
    room: Weak<Mutex<RoomSlot>>,
    turn_id: u64,
    delay: Duration,
    token: CancellationToken,
) {
    tokio::select! {
        _ = token.cancelled() => {
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let Some(room) = room.upgrade() else {
        return;
    };
    let mut slot = room.lock();
    if token.is_cancelled() {
        return;
    }
    fire(&timers, &room, &mut slot, turn_id);
}

/// Expiry handler; runs under the room lock.
pub(crate) fn fire(
    timers: &TurnTimers,
    room: &Arc<Mutex<RoomSlot>>,
    slot: &mut RoomSlot,
    turn_id: u64,
) -> TimerFire {
    let room_id = slot.session.room_id();
    if slot.session.turn_id() != turn_id {
        warn!(
            room_id,
            turn_id,
            current = slot.session.turn_id(),
            "Stale turn timer ignored"
        );
        return TimerFire::Stale;
    }

    let result = if slot.session.current_seat_is_ai() {
        slot.session.play_ai_turn()
    } else {
        slot.session.on_timeout()
    };

    let fired = match result {
        Ok(outcome) => {
            info!(room_id, turn_id = outcome.turn_id, "Timer play applied");
            TimerFire::Applied
        }
        Err(err) => {
            warn!(room_id, turn_id, error = %err, "Timer play rejected");
            TimerFire::Failed
        }
    };
    timers.rearm(room, slot);
    fired
}

pub mod game_session;
pub mod rooms;
pub mod turn_timer;

pub use crate::domain::events::RoomId;
pub use game_session::{GameSession, PlayOutcome, SeatKind, SessionStatus};
pub use rooms::{RoomRegistry, RoomSlot};
pub use turn_timer::{ArmedTimer, TimerFire, TurnTimers};

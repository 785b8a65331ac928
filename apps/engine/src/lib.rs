#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Chkobba rules engine: capture resolution, round flow, scoring, automated
//! players and per-room game sessions with turn timers.

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{Card, GameEvent, PlayerView, RoomId, RoundEventSink, Seat};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::{GameSession, PlayOutcome, RoomRegistry, SeatKind, TurnTimers};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

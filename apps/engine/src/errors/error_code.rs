//! Error codes surfaced to room collaborators.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! a transport forwards to the seat that caused them.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Play validation
    /// Seat does not hold the turn
    InvalidTurn,
    /// Card not in the acting seat's hand
    InvalidCard,
    /// Captured cards do not sum to the played card's value
    InvalidCapture,
    /// Capture set is not one of the legal combinations
    IllegalCaptureChoice,
    /// A capture was available but omitted
    MustCapture,
    /// Round is not accepting plays
    PhaseMismatch,
    /// Session was aborted
    RoundAborted,
    InvalidSeatCount,
    ParseCard,
    /// General validation error
    ValidationError,

    // Rooms
    RoomNotFound,
    RoomExists,

    // Integrity
    DeckExhausted,
    ConservationViolated,

    // System
    ConfigError,
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTurn => "INVALID_TURN",
            Self::InvalidCard => "INVALID_CARD",
            Self::InvalidCapture => "INVALID_CAPTURE",
            Self::IllegalCaptureChoice => "ILLEGAL_CAPTURE_CHOICE",
            Self::MustCapture => "MUST_CAPTURE",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::RoundAborted => "ROUND_ABORTED",
            Self::InvalidSeatCount => "INVALID_SEAT_COUNT",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::RoomExists => "ROOM_EXISTS",

            Self::DeckExhausted => "DECK_EXHAUSTED",
            Self::ConservationViolated => "CONSERVATION_VIOLATED",

            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use thiserror::Error;

use crate::errors::domain::{DomainError, IntegrityKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::services::RoomId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Room not found: {room_id}")]
    RoomNotFound { room_id: RoomId },
    #[error("Room already exists: {room_id}")]
    RoomExists { room_id: RoomId },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable code a collaborator can forward to the seat that caused the error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(DomainError::Validation(kind, _)) => match kind {
                ValidationKind::InvalidTurn => ErrorCode::InvalidTurn,
                ValidationKind::InvalidCard => ErrorCode::InvalidCard,
                ValidationKind::InvalidCapture => ErrorCode::InvalidCapture,
                ValidationKind::IllegalCaptureChoice => ErrorCode::IllegalCaptureChoice,
                ValidationKind::MustCapture => ErrorCode::MustCapture,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::RoundAborted => ErrorCode::RoundAborted,
                ValidationKind::InvalidSeatCount => ErrorCode::InvalidSeatCount,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                _ => ErrorCode::ValidationError,
            },
            AppError::Domain(DomainError::Integrity(kind, _)) => match kind {
                IntegrityKind::DeckExhaustedDuringDeal => ErrorCode::DeckExhausted,
                IntegrityKind::ConservationViolated => ErrorCode::ConservationViolated,
            },
            AppError::RoomNotFound { .. } => ErrorCode::RoomNotFound,
            AppError::RoomExists { .. } => ErrorCode::RoomExists,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// True when the error was caused by the caller and state is unchanged.
    pub fn is_seat_facing(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Validation(..)))
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

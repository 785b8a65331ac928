//! Domain-level error type used across the rules engine and session layer.
//!
//! This error type is transport-agnostic. Service entry points return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Seat-facing validation failures. State is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// The acting seat does not hold the turn.
    InvalidTurn,
    /// The played card is not in the acting seat's hand.
    InvalidCard,
    /// The chosen capture does not sum to the played card's value.
    InvalidCapture,
    /// The chosen capture is not one of the legal combinations.
    IllegalCaptureChoice,
    /// A legal capture exists for the played card but none was chosen.
    MustCapture,
    /// The round is not accepting plays.
    PhaseMismatch,
    /// The session was aborted; all further input is discarded.
    RoundAborted,
    InvalidSeatCount,
    ParseCard,
    Other(String),
}

/// Integrity failures. These indicate an engine bug, not player misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntegrityKind {
    DeckExhaustedDuringDeal,
    ConservationViolated,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input/player validation or rule violation
    Validation(ValidationKind, String),
    /// Broken engine invariant; the round cannot continue
    Integrity(IntegrityKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Integrity(kind, d) => write!(f, "integrity error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn integrity(kind: IntegrityKind, detail: impl Into<String>) -> Self {
        Self::Integrity(kind, detail.into())
    }

    /// Validation kind, if this is a seat-facing error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Integrity(..) => None,
        }
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, DomainError::Integrity(..))
    }
}

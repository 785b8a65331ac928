// Unit tests for error mapping - pure domain logic without transport dependencies
use crate::errors::domain::{DomainError, IntegrityKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_play_validation_codes() {
    let cases = [
        (ValidationKind::InvalidTurn, ErrorCode::InvalidTurn),
        (ValidationKind::InvalidCard, ErrorCode::InvalidCard),
        (ValidationKind::InvalidCapture, ErrorCode::InvalidCapture),
        (
            ValidationKind::IllegalCaptureChoice,
            ErrorCode::IllegalCaptureChoice,
        ),
        (ValidationKind::MustCapture, ErrorCode::MustCapture),
        (ValidationKind::RoundAborted, ErrorCode::RoundAborted),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "detail").into();
        assert_eq!(app.code(), code);
        assert!(app.is_seat_facing());
    }
}

#[test]
fn maps_other_validation_to_generic_code() {
    let app: AppError = DomainError::validation_other("odd input").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_integrity() {
    let app: AppError =
        DomainError::integrity(IntegrityKind::DeckExhaustedDuringDeal, "2 cards left").into();
    assert_eq!(app.code().as_str(), "DECK_EXHAUSTED");
    assert!(!app.is_seat_facing());

    let app: AppError =
        DomainError::integrity(IntegrityKind::ConservationViolated, "41 cards").into();
    assert_eq!(app.code().as_str(), "CONSERVATION_VIOLATED");
}

#[test]
fn maps_rooms_and_config() {
    assert_eq!(
        AppError::RoomNotFound { room_id: 7 }.code(),
        ErrorCode::RoomNotFound
    );
    assert_eq!(
        AppError::RoomExists { room_id: 7 }.code(),
        ErrorCode::RoomExists
    );
    assert_eq!(AppError::config("bad").code(), ErrorCode::ConfigError);
    assert_eq!(AppError::internal("boom").code(), ErrorCode::Internal);
}

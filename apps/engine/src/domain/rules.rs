use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, ValidationKind};

pub const DECK_SIZE: usize = 40;
/// Cards dealt to each seat per deal.
pub const HAND_SIZE: usize = 3;
/// Cards dealt face up at the start of every round.
pub const INITIAL_TABLE: usize = 4;
pub const SEAT_RANGE: RangeInclusive<usize> = 2..=4;

pub fn validate_seat_count(seats: usize) -> Result<(), DomainError> {
    if !SEAT_RANGE.contains(&seats) {
        return Err(DomainError::validation(
            ValidationKind::InvalidSeatCount,
            format!("A game needs 2-4 seats, got {seats}"),
        ));
    }
    Ok(())
}

/// Number of deals (including the opening one) a round takes for `seats`.
pub fn deals_per_round(seats: usize) -> usize {
    (DECK_SIZE - INITIAL_TABLE) / (seats * HAND_SIZE)
}

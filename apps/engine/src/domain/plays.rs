use tracing::{debug, info};

use crate::domain::capture::{find_combinations, is_listed_combination};
use crate::domain::dealing::deal_hands;
use crate::domain::events::GameEvent;
use crate::domain::rules::HAND_SIZE;
use crate::domain::state::{next_seat, PlayRecord, RoundPhase, RoundState, Seat};
use crate::domain::{value_sum, Card};
use crate::errors::domain::{DomainError, IntegrityKind, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    /// Events raised by this play, in order (chkobba, haya, dealt).
    pub events: Vec<GameEvent>,
    /// Seat holding the turn after this play; `None` once the round is complete.
    pub next_seat: Option<Seat>,
    /// Table cards handed to the last capturer at round end.
    pub swept: Option<(Seat, Vec<Card>)>,
    /// Table cards left with nobody to claim them at round end.
    pub unclaimed: Vec<Card>,
}

impl PlayResult {
    pub fn round_complete(&self) -> bool {
        self.next_seat.is_none()
    }
}

/// Check a play without touching the round.
pub fn validate_play(
    round: &RoundState,
    seat: Seat,
    card: Card,
    captured: &[Card],
) -> Result<(), DomainError> {
    let RoundPhase::AwaitingPlay { seat: turn } = round.phase else {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Round is complete",
        ));
    };

    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::InvalidTurn,
            format!("Seat {seat} played out of turn; seat {turn} to act"),
        ));
    }

    if !round.hand(seat)?.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::InvalidCard,
            format!("{card} is not in seat {seat}'s hand"),
        ));
    }

    let combos = find_combinations(card, &round.table);

    if captured.is_empty() {
        if !combos.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MustCapture,
                format!("{card} can capture; capturing is mandatory"),
            ));
        }
        return Ok(());
    }

    // Each chosen card must be a distinct card on the table.
    for (i, c) in captured.iter().enumerate() {
        if captured[..i].contains(c) || !round.table.contains(c) {
            return Err(DomainError::validation(
                ValidationKind::IllegalCaptureChoice,
                format!("{c} is not available on the table"),
            ));
        }
    }

    let sum = value_sum(captured);
    if sum != u32::from(card.value()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidCapture,
            format!(
                "Captured cards sum to {sum}, {card} is worth {}",
                card.value()
            ),
        ));
    }

    if !is_listed_combination(captured, &combos) {
        return Err(DomainError::validation(
            ValidationKind::IllegalCaptureChoice,
            "A single matching card must be captured instead of a combination",
        ));
    }

    Ok(())
}

/// Play a card for `seat`, capturing `captured` from the table.
///
/// Validation runs to completion before any mutation, so a rejected play
/// leaves the round exactly as it was.
pub fn apply_play(
    round: &mut RoundState,
    seat: Seat,
    card: Card,
    captured: &[Card],
) -> Result<PlayResult, DomainError> {
    validate_play(round, seat, card, captured)?;

    // The last card in hand triggers a deal; a short deck must fail before mutation.
    let hands_left: usize = round.hands.iter().map(Vec::len).sum();
    if hands_left == 1
        && !round.deck.is_empty()
        && round.deck.len() < HAND_SIZE * round.seats as usize
    {
        return Err(DomainError::integrity(
            IntegrityKind::DeckExhaustedDuringDeal,
            format!("deck holds {} cards, not a full deal", round.deck.len()),
        ));
    }

    let mut events = Vec::new();

    let hand = &mut round.hands[seat as usize];
    if let Some(pos) = hand.iter().position(|&c| c == card) {
        hand.remove(pos);
    }

    let mut chkobba = false;
    let mut haya = false;
    if captured.is_empty() {
        round.table.push(card);
        debug!(round_no = round.round_no, seat, %card, "Card laid on table");
    } else {
        for c in captured {
            if let Some(pos) = round.table.iter().position(|t| t == c) {
                round.table.remove(pos);
            }
        }
        let pile = &mut round.piles[seat as usize];
        pile.push(card);
        pile.extend_from_slice(captured);
        round.last_capturer = Some(seat);

        if round.table.is_empty() {
            chkobba = true;
            round.chkobbas[seat as usize] = round.chkobbas[seat as usize].saturating_add(1);
            info!(round_no = round.round_no, seat, "Chkobba");
            events.push(GameEvent::Chkobba {
                seat,
                round_no: round.round_no,
            });
            if captured.contains(&Card::HAYA) {
                haya = true;
                info!(round_no = round.round_no, seat, "Haya");
                events.push(GameEvent::Haya {
                    seat,
                    round_no: round.round_no,
                });
            }
        }
    }

    round.plays.push(PlayRecord {
        seat,
        card,
        captured: captured.to_vec(),
        chkobba,
        haya,
    });

    let mut result = PlayResult {
        events,
        next_seat: None,
        swept: None,
        unclaimed: Vec::new(),
    };

    if let Some(next) = next_seat_with_cards(round, seat) {
        round.phase = RoundPhase::AwaitingPlay { seat: next };
        result.next_seat = Some(next);
    } else if !round.deck.is_empty() {
        deal_hands(round)?;
        let next = next_seat(seat, round.seats);
        round.phase = RoundPhase::AwaitingPlay { seat: next };
        result.events.push(GameEvent::Dealt {
            round_no: round.round_no,
            deck_remaining: round.deck.len(),
        });
        result.next_seat = Some(next);
    } else {
        finish_round(round, &mut result);
    }

    round.check_conservation()?;
    Ok(result)
}

/// Next seat after `seat` that still holds cards.
fn next_seat_with_cards(round: &RoundState, seat: Seat) -> Option<Seat> {
    let mut candidate = seat;
    for _ in 0..round.seats {
        candidate = next_seat(candidate, round.seats);
        if !round.hands[candidate as usize].is_empty() {
            return Some(candidate);
        }
    }
    None
}

/// Final sweep: leftover table cards go to the last capturer.
fn finish_round(round: &mut RoundState, result: &mut PlayResult) {
    round.phase = RoundPhase::RoundComplete;
    if round.table.is_empty() {
        return;
    }
    let leftovers: Vec<Card> = std::mem::take(&mut round.table);
    match round.last_capturer {
        Some(capturer) => {
            info!(
                round_no = round.round_no,
                seat = capturer,
                cards = leftovers.len(),
                "Table swept to last capturer"
            );
            round.piles[capturer as usize].extend_from_slice(&leftovers);
            result.swept = Some((capturer, leftovers));
        }
        None => {
            // Nobody captured all round: the cards stay on the table, unscored.
            round.table = leftovers.clone();
            result.unclaimed = leftovers;
        }
    }
}

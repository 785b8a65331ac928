use serde::{Deserialize, Serialize};

use crate::domain::rules::DECK_SIZE;
use crate::domain::Card;
use crate::errors::domain::{DomainError, IntegrityKind, ValidationKind};

pub type Seat = u8; // 0..seats, in turn order

/// Round progression. Validation and dealing happen inside a single
/// `apply_play` call, so only the resting states are represented.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RoundPhase {
    /// `seat` must play a card.
    AwaitingPlay { seat: Seat },
    /// Hands and deck are empty; the round is ready to be scored.
    RoundComplete,
}

/// One accepted play, kept for history and replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub seat: Seat,
    pub card: Card,
    pub captured: Vec<Card>,
    pub chkobba: bool,
    pub haya: bool,
}

/// Everything one round owns. Created by dealing, folded into the game at round end.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Round number, 1-based.
    pub round_no: u32,
    /// Number of occupied seats (2..=4).
    pub seats: u8,
    pub dealer: Seat,
    pub phase: RoundPhase,
    /// Undealt cards; the last element is the top of the deck.
    pub deck: Vec<Card>,
    pub hands: Vec<Vec<Card>>,
    /// Face-up cards in arrival order.
    pub table: Vec<Card>,
    /// Cards won this round, per seat.
    pub piles: Vec<Vec<Card>>,
    /// Chkobbas made this round, per seat.
    pub chkobbas: Vec<u8>,
    pub last_capturer: Option<Seat>,
    pub plays: Vec<PlayRecord>,
    /// Deals performed so far, including the opening one.
    pub deals: u8,
}

impl RoundState {
    /// An empty round with no cards anywhere. Dealing fills it.
    pub fn empty(round_no: u32, seats: u8, dealer: Seat) -> Self {
        let n = seats as usize;
        Self {
            round_no,
            seats,
            dealer,
            phase: RoundPhase::AwaitingPlay {
                seat: round_start_seat(dealer, seats),
            },
            deck: Vec::with_capacity(DECK_SIZE),
            hands: vec![Vec::new(); n],
            table: Vec::new(),
            piles: vec![Vec::new(); n],
            chkobbas: vec![0; n],
            last_capturer: None,
            plays: Vec::new(),
            deals: 0,
        }
    }

    /// Seat holding the turn, if the round is still in play.
    pub fn turn(&self) -> Option<Seat> {
        match self.phase {
            RoundPhase::AwaitingPlay { seat } => Some(seat),
            RoundPhase::RoundComplete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::RoundComplete
    }

    pub fn all_hands_empty(&self) -> bool {
        self.hands.iter().all(Vec::is_empty)
    }

    /// Cards accounted for across deck, hands, table and piles.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(Vec::len).sum::<usize>()
            + self.table.len()
            + self.piles.iter().map(Vec::len).sum::<usize>()
    }

    /// `|Deck| + Σ|Hand| + |Table| + Σ|Pile| == 40`
    pub fn check_conservation(&self) -> Result<(), DomainError> {
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(DomainError::integrity(
                IntegrityKind::ConservationViolated,
                format!(
                    "round {} accounts for {count} cards, expected {DECK_SIZE}",
                    self.round_no
                ),
            ));
        }
        Ok(())
    }

    pub fn hand(&self, seat: Seat) -> Result<&[Card], DomainError> {
        self.hands
            .get(seat as usize)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidTurn,
                    format!("Seat {seat} is not part of this game"),
                )
            })
    }
}

/// Seat `delta` steps after `seat` in turn order.
#[inline]
pub fn seat_offset(seat: Seat, delta: u8, seats: u8) -> Seat {
    debug_assert!(seats > 0, "seat math needs at least one seat");
    ((u16::from(seat) + u16::from(delta)) % u16::from(seats)) as Seat
}

/// Next seat in turn order (0 → 1 → … → seats-1 → 0).
#[inline]
pub fn next_seat(seat: Seat, seats: u8) -> Seat {
    seat_offset(seat, 1, seats)
}

/// Round-start seat (the seat after the dealer).
#[inline]
pub fn round_start_seat(dealer: Seat, seats: u8) -> Seat {
    next_seat(dealer, seats)
}

/// Dealer for a 1-based round number: rotates one seat per round.
#[inline]
pub fn dealer_for_round(starting_dealer: Seat, round_no: u32, seats: u8) -> Seat {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    let steps = (round_no.saturating_sub(1) % u32::from(seats)) as u8;
    seat_offset(starting_dealer, steps, seats)
}

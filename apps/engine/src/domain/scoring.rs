//! Round scoring and game-over detection.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::state::{RoundState, Seat};
use crate::domain::{Card, Suit};

/// What a seat collected during one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatTally {
    pub seat: Seat,
    pub total_cards: u32,
    pub diamond_count: u32,
    /// Holds the 7 of diamonds.
    pub has_haya: bool,
    /// Holds the 7 of clubs.
    pub has_dinari: bool,
    pub chkobba_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardKind {
    MostCards,
    MostDiamonds,
    Haya,
    Dinari,
    Chkobba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Award {
    pub seat: Seat,
    pub kind: AwardKind,
    pub points: u32,
}

/// Points earned in one round, with the awards that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundScore {
    pub tallies: Vec<SeatTally>,
    /// Round points indexed by seat.
    pub points: Vec<u32>,
    pub awards: Vec<Award>,
}

/// Leftover table cards handed to the last capturer when the round closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSwept {
    pub seat: Seat,
    pub cards: Vec<Card>,
}

/// Everything reported about a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round_no: u32,
    pub dealer: Seat,
    pub score: RoundScore,
    pub table_swept: Option<TableSwept>,
    /// Cards left on the table because nobody captured all round.
    pub unclaimed: Vec<Card>,
    /// Cumulative game scores after this round was added.
    pub cumulative: BTreeMap<Seat, u32>,
}

pub fn tally_pile(seat: Seat, pile: &[Card], chkobbas: u8) -> SeatTally {
    SeatTally {
        seat,
        total_cards: pile.len() as u32,
        diamond_count: pile.iter().filter(|c| c.suit == Suit::Diamonds).count() as u32,
        has_haya: pile.contains(&Card::HAYA),
        has_dinari: pile.contains(&Card::DINARI),
        chkobba_count: u32::from(chkobbas),
    }
}

/// The seat with strictly the largest value; a shared maximum yields `None`.
pub fn unique_leader(values: impl IntoIterator<Item = (Seat, u32)>) -> Option<Seat> {
    let mut best: Option<(Seat, u32)> = None;
    let mut tied = false;
    for (seat, value) in values {
        match best {
            Some((_, top)) if value < top => {}
            Some((_, top)) if value == top => tied = true,
            _ => {
                best = Some((seat, value));
                tied = false;
            }
        }
    }
    if tied {
        None
    } else {
        best.map(|(seat, _)| seat)
    }
}

/// Score per-seat capture piles and chkobba counters.
pub fn score_piles(piles: &[Vec<Card>], chkobbas: &[u8]) -> RoundScore {
    let tallies: Vec<SeatTally> = piles
        .iter()
        .enumerate()
        .map(|(i, pile)| tally_pile(i as Seat, pile, chkobbas.get(i).copied().unwrap_or(0)))
        .collect();

    let mut awards = Vec::new();
    if let Some(seat) = unique_leader(tallies.iter().map(|t| (t.seat, t.total_cards))) {
        awards.push(Award {
            seat,
            kind: AwardKind::MostCards,
            points: 1,
        });
    }
    if let Some(seat) = unique_leader(tallies.iter().map(|t| (t.seat, t.diamond_count))) {
        awards.push(Award {
            seat,
            kind: AwardKind::MostDiamonds,
            points: 1,
        });
    }
    for t in &tallies {
        if t.has_haya {
            awards.push(Award {
                seat: t.seat,
                kind: AwardKind::Haya,
                points: 1,
            });
        }
        if t.has_dinari {
            awards.push(Award {
                seat: t.seat,
                kind: AwardKind::Dinari,
                points: 1,
            });
        }
        if t.chkobba_count > 0 {
            awards.push(Award {
                seat: t.seat,
                kind: AwardKind::Chkobba,
                points: t.chkobba_count,
            });
        }
    }

    let mut points = vec![0u32; tallies.len()];
    for award in &awards {
        points[award.seat as usize] += award.points;
    }

    RoundScore {
        tallies,
        points,
        awards,
    }
}

/// Score a completed round from its piles.
pub fn score_round(round: &RoundState) -> RoundScore {
    score_piles(&round.piles, &round.chkobbas)
}

/// Add round points into cumulative scores.
pub fn add_round_points(totals: &mut [u32], score: &RoundScore) {
    for (total, pts) in totals.iter_mut().zip(&score.points) {
        *total += pts;
    }
}

/// `Some(winners)` once any seat reached `target`; every seat sharing the
/// maximum score wins.
pub fn game_winners(totals: &[u32], target: u32) -> Option<Vec<Seat>> {
    let max = totals.iter().copied().max()?;
    if max < target {
        return None;
    }
    Some(
        totals
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == max)
            .map(|(i, _)| i as Seat)
            .collect(),
    )
}

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::dealing::{full_deck, start_round};
use crate::domain::events::GameEvent;
use crate::domain::plays::apply_play;
use crate::domain::state::{RoundPhase, RoundState, Seat};
use crate::domain::Card;
use crate::errors::domain::ValidationKind;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// Where the cards not placed explicitly end up.
enum Rest {
    Deck(usize),
    Pile(Seat),
}

/// Two-seat round with dealer 0 (seat 1 to act) and the given hands and table.
/// Cards not listed go to the deck (up to `n`) and then to seat 0's pile, so
/// the 40-card total always holds.
fn round_with(hands: [&[&str]; 2], table: &[&str], rest: Rest) -> RoundState {
    let mut round = RoundState::empty(1, 2, 0);
    round.hands = hands.iter().map(|h| parse_cards(h)).collect();
    round.table = parse_cards(table);
    let placed: Vec<Card> = round
        .hands
        .iter()
        .flatten()
        .chain(round.table.iter())
        .copied()
        .collect();
    let mut remaining: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !placed.contains(c))
        .collect();
    match rest {
        Rest::Deck(n) => {
            round.deck = remaining.drain(..n).collect();
            round.piles[0] = remaining;
        }
        Rest::Pile(seat) => round.piles[seat as usize] = remaining,
    }
    round.check_conservation().expect("fixture holds 40 cards");
    round
}

fn kind_of(err: crate::errors::domain::DomainError) -> ValidationKind {
    err.validation_kind()
        .cloned()
        .expect("expected a validation error")
}

#[test]
fn single_match_priority_rejects_sum_capture() {
    let mut round = round_with([&[], &["5C", "KD"]], &["2D", "3H", "5S"], Rest::Deck(10));
    let before = round.clone();

    let err = apply_play(&mut round, 1, card("5C"), &parse_cards(&["2D", "3H"])).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::IllegalCaptureChoice);
    assert_eq!(round.table, before.table);
    assert_eq!(round.hands, before.hands);
    assert_eq!(round.phase, before.phase);

    let res = apply_play(&mut round, 1, card("5C"), &[card("5S")]).unwrap();
    assert!(res.events.is_empty());
    assert_eq!(round.table, parse_cards(&["2D", "3H"]));
    assert_eq!(round.last_capturer, Some(1));
    assert!(round.piles[1].contains(&card("5S")));
}

#[test]
fn sum_capture_that_clears_table_is_chkobba() {
    let mut round = round_with([&["AS"], &["5C", "KD"]], &["2D", "3H"], Rest::Deck(10));

    let res = apply_play(&mut round, 1, card("5C"), &parse_cards(&["3H", "2D"])).unwrap();
    assert_eq!(
        res.events,
        vec![GameEvent::Chkobba {
            seat: 1,
            round_no: 1
        }]
    );
    assert!(round.table.is_empty());
    assert_eq!(round.chkobbas, vec![0, 1]);
    assert_eq!(res.next_seat, Some(0));
    let last = round.plays.last().expect("play recorded");
    assert!(last.chkobba);
    assert!(!last.haya);
}

#[test]
fn clearing_with_seven_of_diamonds_is_haya() {
    let mut round = round_with([&["AS"], &["7C", "KD"]], &["7D"], Rest::Deck(10));

    let res = apply_play(&mut round, 1, card("7C"), &[card("7D")]).unwrap();
    assert_eq!(
        res.events,
        vec![
            GameEvent::Chkobba {
                seat: 1,
                round_no: 1
            },
            GameEvent::Haya {
                seat: 1,
                round_no: 1
            },
        ]
    );
    assert!(round.piles[1].contains(&Card::HAYA));
    assert!(round.plays[0].haya);
}

#[test]
fn leftover_table_goes_to_last_capturer() {
    let mut round = round_with([&[], &["3D"]], &["KH", "3C"], Rest::Pile(0));

    let res = apply_play(&mut round, 1, card("3D"), &[card("3C")]).unwrap();
    assert!(res.round_complete());
    assert_eq!(round.phase, RoundPhase::RoundComplete);
    assert_eq!(res.swept, Some((1, vec![card("KH")])));
    assert!(round.piles[1].contains(&card("KH")));
    assert!(round.table.is_empty());
    // No chkobba: the table still held KH after the capture.
    assert!(res.events.is_empty());
    round.check_conservation().unwrap();
}

#[test]
fn final_play_that_clears_table_still_counts() {
    let mut round = round_with([&[], &["3D"]], &["3C"], Rest::Pile(0));
    let res = apply_play(&mut round, 1, card("3D"), &[card("3C")]).unwrap();
    assert!(res.round_complete());
    assert_eq!(round.chkobbas, vec![0, 1]);
    assert_eq!(res.swept, None);
}

#[test]
fn table_without_any_capture_stays_unclaimed() {
    let mut round = round_with([&[], &["QS"]], &["KH"], Rest::Pile(0));
    round.last_capturer = None;
    let res = apply_play(&mut round, 1, card("QS"), &[]).unwrap();
    assert!(res.round_complete());
    assert_eq!(res.swept, None);
    assert_eq!(res.unclaimed, parse_cards(&["KH", "QS"]));
    assert_eq!(round.table.len(), 2);
    round.check_conservation().unwrap();
}

#[test]
fn turn_and_card_ownership_are_checked_first() {
    let mut round = round_with([&["AS"], &["5C"]], &["KH"], Rest::Deck(10));

    let err = apply_play(&mut round, 0, card("AS"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidTurn);

    let err = apply_play(&mut round, 1, card("AS"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidCard);

    let err = apply_play(&mut round, 7, card("5C"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidTurn);
}

#[test]
fn capture_choice_errors() {
    let mut round = round_with([&["AS"], &["5C", "6C"]], &["2D", "4H", "KS"], Rest::Deck(10));

    // Skipping an available capture.
    let err = apply_play(&mut round, 1, card("6C"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::MustCapture);

    // Cards on the table that do not add up.
    let err = apply_play(&mut round, 1, card("5C"), &[card("2D")]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidCapture);

    // A card that is not on the table.
    let err = apply_play(&mut round, 1, card("6C"), &parse_cards(&["2D", "4S"])).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::IllegalCaptureChoice);

    // The same table card twice.
    let err = apply_play(&mut round, 1, card("6C"), &parse_cards(&["2D", "2D", "2D"])).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::IllegalCaptureChoice);

    // 5C has nothing to take, so laying it down is fine.
    let res = apply_play(&mut round, 1, card("5C"), &[]).unwrap();
    assert!(res.events.is_empty());
    assert_eq!(round.table.last(), Some(&card("5C")));
    assert_eq!(round.plays.len(), 1);
}

#[test]
fn completed_round_rejects_plays() {
    let mut round = round_with([&[], &["3D"]], &["3C"], Rest::Pile(0));
    apply_play(&mut round, 1, card("3D"), &[card("3C")]).unwrap();
    let err = apply_play(&mut round, 1, card("3D"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::PhaseMismatch);
}

#[test]
fn empty_hands_trigger_a_deal() {
    let mut round = round_with([&[], &["KH"]], &["AS"], Rest::Deck(6));

    let res = apply_play(&mut round, 1, card("KH"), &[]).unwrap();
    assert_eq!(
        res.events,
        vec![GameEvent::Dealt {
            round_no: 1,
            deck_remaining: 0
        }]
    );
    assert_eq!(res.next_seat, Some(0));
    assert!(round.hands.iter().all(|h| h.len() == 3));
    assert_eq!(round.deals, 1);
}

#[test]
fn short_deck_fails_before_mutation() {
    let mut round = round_with([&[], &["KH"]], &["AS"], Rest::Deck(4));
    let err = apply_play(&mut round, 1, card("KH"), &[]).unwrap_err();
    assert!(err.is_integrity());
    assert_eq!(round.hands[1], vec![card("KH")]);
    assert_eq!(round.table, vec![card("AS")]);
    assert!(round.plays.is_empty());
}

#[test]
fn play_passes_over_empty_hands() {
    let mut round = round_with([&[], &["KH", "QH"]], &["AS"], Rest::Deck(10));
    let res = apply_play(&mut round, 1, card("KH"), &[]).unwrap();
    assert_eq!(res.next_seat, Some(1));
}

#[test]
fn full_round_plays_out_with_first_legal_moves() {
    let mut round = start_round(1, 3, 2, 99).unwrap();
    let mut chkobba_events = 0;
    while let Some(seat) = round.turn() {
        let hand = round.hand(seat).unwrap().to_vec();
        let (card, captured) = crate::domain::capture::legal_moves(&hand, &round.table)
            .into_iter()
            .next()
            .expect("a hand in play is never empty");
        let res = apply_play(&mut round, seat, card, &captured).unwrap();
        chkobba_events += res
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Chkobba { .. }))
            .count();
        round.check_conservation().unwrap();
    }
    assert!(round.deck.is_empty());
    assert!(round.all_hands_empty());
    assert_eq!(round.plays.len(), 36);
    assert_eq!(round.deals, 4);
    let recorded: usize = round.chkobbas.iter().map(|&c| c as usize).sum();
    assert_eq!(recorded, chkobba_events);
}

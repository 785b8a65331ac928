use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::scoring::{
    add_round_points, game_winners, score_piles, tally_pile, unique_leader, AwardKind,
};
use crate::domain::Card;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

fn award_seats(score: &crate::domain::scoring::RoundScore, kind: AwardKind) -> Vec<u8> {
    score
        .awards
        .iter()
        .filter(|a| a.kind == kind)
        .map(|a| a.seat)
        .collect()
}

#[test]
fn tally_counts_diamonds_and_sevens() {
    let pile = parse_cards(&["7D", "7C", "AD", "KS"]);
    let t = tally_pile(2, &pile, 1);
    assert_eq!(t.seat, 2);
    assert_eq!(t.total_cards, 4);
    assert_eq!(t.diamond_count, 2);
    assert!(t.has_haya);
    assert!(t.has_dinari);
    assert_eq!(t.chkobba_count, 1);
}

#[test]
fn tied_card_counts_award_nobody() {
    // Both seats hold 3 cards; seat 0 has more diamonds.
    let piles = vec![
        parse_cards(&["AD", "2D", "3S"]),
        parse_cards(&["4C", "5H", "6S"]),
    ];
    let score = score_piles(&piles, &[0, 0]);
    assert!(award_seats(&score, AwardKind::MostCards).is_empty());
    assert_eq!(award_seats(&score, AwardKind::MostDiamonds), vec![0]);
    assert_eq!(score.points, vec![1, 0]);
}

#[test]
fn tied_diamonds_award_nobody() {
    let piles = vec![
        parse_cards(&["AD", "2S", "3S", "4S"]),
        parse_cards(&["5D", "6H"]),
    ];
    let score = score_piles(&piles, &[0, 0]);
    assert_eq!(award_seats(&score, AwardKind::MostCards), vec![0]);
    assert!(award_seats(&score, AwardKind::MostDiamonds).is_empty());
}

#[test]
fn every_award_is_itemised() {
    let piles = vec![
        parse_cards(&["7D", "AD", "2D", "3H", "4H"]),
        parse_cards(&["7C", "KS"]),
        parse_cards(&["QH"]),
    ];
    let score = score_piles(&piles, &[1, 2, 0]);
    // seat 0: most cards, most diamonds, haya card, one chkobba
    // seat 1: dinari, two chkobbas
    assert_eq!(score.points, vec![4, 3, 0]);
    assert_eq!(award_seats(&score, AwardKind::Haya), vec![0]);
    assert_eq!(award_seats(&score, AwardKind::Dinari), vec![1]);
    let chkobba_points: Vec<(u8, u32)> = score
        .awards
        .iter()
        .filter(|a| a.kind == AwardKind::Chkobba)
        .map(|a| (a.seat, a.points))
        .collect();
    assert_eq!(chkobba_points, vec![(0, 1), (1, 2)]);
}

#[test]
fn unique_leader_requires_strict_maximum() {
    assert_eq!(unique_leader([(0, 3), (1, 5), (2, 4)]), Some(1));
    assert_eq!(unique_leader([(0, 5), (1, 5), (2, 4)]), None);
    // A later higher value clears an earlier tie.
    assert_eq!(unique_leader([(0, 2), (1, 2), (2, 4)]), Some(2));
    assert_eq!(unique_leader(std::iter::empty()), None);
}

#[test]
fn cumulative_points_and_game_over() {
    let mut totals = vec![19, 20];
    let score = score_piles(
        &[parse_cards(&["7D", "AD"]), parse_cards(&["KS"])],
        &[0, 0],
    );
    add_round_points(&mut totals, &score);
    // seat 0 takes most cards, most diamonds and the haya card
    assert_eq!(totals, vec![22, 20]);
    assert_eq!(game_winners(&totals, 21), Some(vec![0]));
    assert_eq!(game_winners(&[10, 12], 21), None);
}

#[test]
fn tied_winners_are_all_reported() {
    assert_eq!(game_winners(&[21, 21, 3], 21), Some(vec![0, 1]));
    assert_eq!(game_winners(&[11, 25, 25, 24], 11), Some(vec![1, 2]));
}

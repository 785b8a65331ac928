//! Capture resolution: which sets of table cards a played card may take.
//!
//! A capture is any non-empty set of table cards whose values sum exactly to
//! the played card's value. When a single table card matches the played value,
//! only single-card captures are legal.

use super::cards_types::Card;

/// Every legal capture for `card` against `table`.
///
/// Each combination lists its cards in table order, and combinations are
/// ordered lexicographically by table index, so "the first combination" is
/// well defined. An empty table yields no combinations.
pub fn find_combinations(card: Card, table: &[Card]) -> Vec<Vec<Card>> {
    let target = u32::from(card.value());

    let singles: Vec<Vec<Card>> = table
        .iter()
        .filter(|c| u32::from(c.value()) == target)
        .map(|c| vec![*c])
        .collect();
    if !singles.is_empty() {
        return singles;
    }

    // No single match: only cards strictly below the target can join a sum.
    let candidates: Vec<usize> = (0..table.len())
        .filter(|&i| u32::from(table[i].value()) < target)
        .collect();
    debug_assert!(candidates.len() < 64, "table larger than the deck");

    let mut found: Vec<Vec<usize>> = Vec::new();
    let limit: u64 = 1u64 << candidates.len();
    for mask in 1..limit {
        if mask.count_ones() < 2 {
            continue;
        }
        let mut sum = 0u32;
        let mut picked = Vec::with_capacity(mask.count_ones() as usize);
        for (bit, &idx) in candidates.iter().enumerate() {
            if mask & (1u64 << bit) != 0 {
                sum += u32::from(table[idx].value());
                if sum > target {
                    break;
                }
                picked.push(idx);
            }
        }
        if sum == target {
            found.push(picked);
        }
    }

    found.sort();
    found
        .into_iter()
        .map(|indices| indices.into_iter().map(|i| table[i]).collect())
        .collect()
}

/// Union of all cards appearing in any legal combination, in table order.
pub fn find_capturable(card: Card, table: &[Card]) -> Vec<Card> {
    let combos = find_combinations(card, table);
    table
        .iter()
        .copied()
        .filter(|c| combos.iter().any(|combo| combo.contains(c)))
        .collect()
}

/// Whether `chosen` equals one of `combos` as a set.
pub fn is_listed_combination(chosen: &[Card], combos: &[Vec<Card>]) -> bool {
    let mut wanted = chosen.to_vec();
    wanted.sort();
    combos.iter().any(|combo| {
        if combo.len() != wanted.len() {
            return false;
        }
        let mut have = combo.clone();
        have.sort();
        have == wanted
    })
}

/// All legal (card, capture) moves for a hand.
///
/// Capturing is mandatory: a card with at least one combination is only
/// listed with its captures; a card with none is listed once with an empty set.
pub fn legal_moves(hand: &[Card], table: &[Card]) -> Vec<(Card, Vec<Card>)> {
    let mut moves = Vec::new();
    for &card in hand {
        let combos = find_combinations(card, table);
        if combos.is_empty() {
            moves.push((card, Vec::new()));
        } else {
            moves.extend(combos.into_iter().map(|combo| (card, combo)));
        }
    }
    moves
}

//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Provides functions to derive unique-but-deterministic seeds for different
//! game contexts (dealing, automated seats) from a base game seed.

/// Derive a seed for shuffling the deck of a round.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed of the game session
/// * `round_no` - Round number (1-based)
///
/// # Returns
///
/// Derived seed that is unique per (game, round) combination.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add(u64::from(round_no).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from automated-seat seeds
}

/// Derive a seed for an automated seat's own randomness.
///
/// Same game + seat = same seed, so a replayed game makes the same choices.
pub fn derive_ai_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add(u64::from(seat).wrapping_mul(100))
        .wrapping_add(1)
}

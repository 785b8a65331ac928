//! Domain layer: pure game logic types and helpers.

pub mod capture;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod player_view;
pub mod plays;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_plays;
#[cfg(test)]
mod tests_props_capture;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use capture::{find_capturable, find_combinations, legal_moves};
pub use cards_types::{value_sum, Card, Rank, Suit};
pub use dealing::{deal_hands, start_round};
pub use events::{GameEvent, NullSink, RecordingSink, RoomId, RoundEventSink};
pub use player_view::PlayerView;
pub use plays::{apply_play, PlayResult};
pub use scoring::{RoundScore, RoundSummary};
pub use seed_derivation::{derive_ai_seed, derive_dealing_seed};
pub use state::{RoundPhase, RoundState, Seat};

//! Unique ids for tests that share process-wide state.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

static NEXT_ROOM: AtomicI64 = AtomicI64::new(1_000);
static NEXT_SEED: AtomicU64 = AtomicU64::new(0x5eed);

/// A room id no other caller in this process has received.
///
/// ```
/// use engine_test_support::unique_helpers::unique_room_id;
///
/// assert_ne!(unique_room_id(), unique_room_id());
/// ```
pub fn unique_room_id() -> i64 {
    NEXT_ROOM.fetch_add(1, Ordering::Relaxed)
}

/// Distinct seeds for repeated deterministic games.
pub fn unique_seed() -> u64 {
    NEXT_SEED.fetch_add(1, Ordering::Relaxed)
}

//! Engine test support utilities
//!
//! Shared by the engine's integration tests: unified logging initialization
//! and unique ids so tests sharing a room registry never collide.

pub mod logging;
pub mod unique_helpers;

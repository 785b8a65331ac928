//! Shared settings for property tests in this module tree.

use proptest::prelude::ProptestConfig;

/// Case count comes from `PROPTEST_CASES` when set, else a quick default.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

//! Shared test utilities for `bilberry-core`.

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding proptest case counts.
const CASES_ENV_KEY: &str = "BILBERRY_PBT_CASES";
/// Environment variable enabling proptest process forking.
const FORK_ENV_KEY: &str = "BILBERRY_PBT_FORK";

/// Builds a standard proptest configuration, honouring environment
/// overrides so CI and local runs can tune case counts without edits.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = std::env::var(CASES_ENV_KEY)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|&cases| cases > 0)
        .unwrap_or(default_cases);
    let fork = std::env::var(FORK_ENV_KEY)
        .ok()
        .and_then(|raw| raw.trim().parse::<bool>().ok())
        .unwrap_or(false);

    ProptestConfig {
        cases,
        fork,
        ..ProptestConfig::default()
    }
}

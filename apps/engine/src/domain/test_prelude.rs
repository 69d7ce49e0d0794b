// Shared proptest configuration for the domain property tests.

use proptest::test_runner::Config;

/// Honour PROPTEST_CASES; keep the default small so `cargo test` stays fast.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8);
    Config {
        cases,
        failure_persistence: None,
        ..Config::default()
    }
}

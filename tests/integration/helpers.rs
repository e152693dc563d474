//! Shared helpers for integration tests

use std::path::Path;

use assert_cmd::Command;
use chrono::Utc;

/// Fixed "now" used by deterministic tests (2023-11-14T22:13:20Z).
pub const NOW_MS: f64 = 1_700_000_000_000.0;

/// Timestamp `secs` seconds before the real current time.
pub fn real_secs_ago(secs: f64) -> f64 {
    Utc::now().timestamp_millis() as f64 - secs * 1000.0
}

/// Timestamp `secs` seconds before [`NOW_MS`].
pub fn fixed_secs_ago(secs: f64) -> f64 {
    NOW_MS - secs * 1000.0
}

/// seekback binary pointed at `config_path` with a quiet environment.
pub fn seekback(config_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seekback").expect("seekback binary should be built");
    cmd.env("SEEKBACK_CONFIG", config_path)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

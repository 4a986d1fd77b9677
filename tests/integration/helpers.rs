//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use castedit::CastFile;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).expect("Failed to read fixture")
}

/// castedit binary isolated from the user's config file
pub fn castedit() -> Command {
    let mut cmd = Command::cargo_bin("castedit").expect("castedit binary not built");
    cmd.env("CASTEDIT_CONFIG", fixtures_dir().join("no-such-config.toml"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

pub fn parse_output(stdout: &[u8]) -> CastFile {
    let text = String::from_utf8(stdout.to_vec()).expect("stdout is not UTF-8");
    CastFile::parse_str(&text).expect("output is not a valid cast")
}

pub fn times(cast: &CastFile) -> Vec<f64> {
    cast.events.iter().map(|e| e.time).collect()
}

/// Largest gap between consecutive events
pub fn max_gap(cast: &CastFile) -> f64 {
    times(cast)
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .fold(0.0, f64::max)
}

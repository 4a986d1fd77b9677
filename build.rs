//! Build script for castedit - embeds git commit hash and build date
//!
//! Emits `CASTEDIT_BUILD_INFO`, shown by `castedit --version`:
//! - default dev builds: `<short sha>, <date>`
//! - with the `release` feature (CI/official builds): `<date>` only

use std::env;
use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    // Use the date command for cross-platform compatibility
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

/// Get the short commit hash, if this is a git checkout
fn get_git_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() {
        None
    } else {
        Some(sha)
    }
}

fn main() {
    let build_date = get_build_date();

    // Cargo exposes enabled features to build scripts as CARGO_FEATURE_*
    let is_release = env::var_os("CARGO_FEATURE_RELEASE").is_some();

    let build_info = if is_release {
        build_date
    } else {
        let sha = get_git_sha().unwrap_or_else(|| "unknown".to_string());
        format!("{}, {}", sha, build_date)
    };

    println!("cargo:rustc-env=CASTEDIT_BUILD_INFO={}", build_info);
}

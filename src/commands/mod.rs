//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod edit;

use std::path::PathBuf;

/// Where and whether to write the edited recording.
#[derive(Debug, Clone)]
pub struct Output {
    /// `None` writes to stdout
    pub path: Option<PathBuf>,
    pub dry_run: bool,
}

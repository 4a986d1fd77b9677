//! Command line definitions.
//!
//! Kept in the library so `xtask` can render the man page from them.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::edit::{EditError, TimeRange};

/// Version string shown by `--version`, with build info from build.rs.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CASTEDIT_BUILD_INFO"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "castedit")]
#[command(version = VERSION)]
#[command(about = "Edit asciinema recordings: trim, excise, re-time and redact keystrokes")]
#[command(long_about = "Edit asciinema recordings.

Each command loads a .cast file, applies one edit and writes the result to
stdout (or --out). Timestamps are rounded to 7 decimal places on write.

Examples:
  castedit keep session.cast --start 10 --end 42 -o clip.cast
  castedit excise session.cast --range 5,12 --range 30,31
  castedit quantize session.cast --delay 0.5
  castedit speed session.cast --range 60,120 --factor 4
  castedit print-stdin session.cast
  castedit delete-word session.cast hunter2 -o clean.cast")]
pub struct Cli {
    /// Output file (default: stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Apply the edit but do not write the result
    #[arg(short = 'n', long, visible_short_alias = 'd', global = true)]
    pub dry_run: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: $CASTEDIT_CONFIG or <config dir>/castedit/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keep only one time range (end event included), discard the rest
    Keep {
        /// Input .cast file ("-" for stdin)
        input: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Remove one or more time ranges and splice the rest together
    Excise {
        /// Input .cast file ("-" for stdin)
        input: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Collapse everything before START to time zero
    Smush {
        /// Input .cast file ("-" for stdin)
        input: PathBuf,
        /// Events before this time (seconds) are played instantly
        #[arg(long, value_name = "SECONDS")]
        start: f64,
    },

    /// Cap the pause between events
    Quantize {
        /// Input .cast file ("-" for stdin)
        input: PathBuf,
        /// Longest pause to keep, in seconds (default: from config, 1.0)
        #[arg(long, value_name = "SECONDS")]
        delay: Option<f64>,
    },

    /// Speed up (or slow down) playback inside time ranges
    Speed {
        /// Input .cast file ("-" for stdin)
        input: PathBuf,
        #[command(flatten)]
        range: RangeArgs,
        /// Speed-up factor, below 1 slows down (default: from config, 2.0)
        #[arg(long)]
        factor: Option<f64>,
    },

    /// List typed words and keystrokes recorded as input
    #[command(visible_alias = "p")]
    PrintStdin {
        /// Input .cast file ("-" for stdin)
        input: PathBuf,
    },

    /// Remove every typed occurrence of a word (e.g. a password)
    DeleteWord {
        /// Input .cast file ("-" for stdin)
        input: PathBuf,
        /// Word to remove
        word: String,
    },

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
}

/// Time range selection shared by keep, excise and speed.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RangeArgs {
    /// Range start in seconds (default: 0)
    #[arg(long, value_name = "SECONDS", conflicts_with = "range")]
    pub start: Option<f64>,

    /// Range end in seconds (default: end of recording)
    #[arg(long, value_name = "SECONDS", conflicts_with = "range")]
    pub end: Option<f64>,

    /// Time range as START,END; repeat for several ranges
    #[arg(long = "range", value_name = "START,END")]
    pub range: Vec<TimeRange>,
}

impl RangeArgs {
    /// The selected ranges: every `--range`, or one range from
    /// `--start`/`--end`.
    pub fn ranges(&self) -> Result<Vec<TimeRange>, EditError> {
        if !self.range.is_empty() {
            return Ok(self.range.clone());
        }

        let start = self.start.unwrap_or(0.0);
        let end = self.end.unwrap_or(f64::INFINITY);
        Ok(vec![TimeRange::new(start, end)?])
    }
}

//! Log output for the castedit binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the program embedding it. Logs always go to stderr because stdout may
//! carry the edited recording.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-v`/`-q` counts to a log level. Default is warnings only.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,castedit={}", level.to_string().to_lowercase()))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

//! Edit precondition errors.

/// Errors raised when an edit is asked to do something it cannot do.
///
/// Every variant is returned before the stream is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("Events are not in chronological order (event {index} at {time}s)")]
    Unsorted { index: usize, time: f64 },

    #[error("Invalid time range {start},{end}: start must not be after end")]
    InvalidRange { start: f64, end: f64 },

    #[error("Invalid time range '{0}': expected START,END")]
    MalformedRange(String),

    #[error("Keep takes exactly one range (got {0})")]
    KeepRangeCount(usize),

    #[error("Excise needs at least one range")]
    NoRanges,

    #[error("Invalid maximum delay {0}: must be zero or greater")]
    InvalidDelay(f64),

    #[error("Invalid speed factor {0}: must be a positive number")]
    InvalidFactor(f64),

    #[error("Word to delete must not be empty")]
    EmptyWord,
}

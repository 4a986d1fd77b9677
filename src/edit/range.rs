//! Time ranges and their resolution to event index ranges.

use std::fmt;
use std::str::FromStr;

use crate::asciicast::Event;

use super::EditError;

/// A span of recording time in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Result<Self, EditError> {
        // Written this way so NaN bounds are rejected too
        if !(start <= end) {
            return Err(EditError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Everything from `start` until the end of the recording.
    pub fn starting_at(start: f64) -> Result<Self, EditError> {
        Self::new(start, f64::INFINITY)
    }

    /// Parse a `START,END` pair, e.g. `12.5,30`.
    pub fn parse(s: &str) -> Result<Self, EditError> {
        let malformed = || EditError::MalformedRange(s.to_string());

        let (start, end) = s.split_once(',').ok_or_else(malformed)?;
        let start: f64 = start.trim().parse().map_err(|_| malformed())?;
        let end: f64 = end.trim().parse().map_err(|_| malformed())?;

        Self::new(start, end)
    }
}

impl FromStr for TimeRange {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}

/// Half-open span of event positions, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index of the first event whose time is not before `time`.
///
/// Events sharing that exact time resolve to the first of them.
/// Requires `events` to be in chronological order.
pub fn bisect_left(events: &[Event], time: f64) -> usize {
    events.partition_point(|event| event.time < time)
}

/// Map time ranges onto index ranges, ordered by start index.
///
/// Overlapping input ranges produce overlapping index ranges; callers that
/// splice (excise) or scale (speed) expect them not to overlap.
pub fn resolve_ranges(events: &[Event], ranges: &[TimeRange]) -> Vec<IndexRange> {
    let mut resolved: Vec<IndexRange> = ranges
        .iter()
        .map(|range| {
            IndexRange::new(
                bisect_left(events, range.start),
                bisect_left(events, range.end),
            )
        })
        .collect();

    resolved.sort_by_key(|range| range.start);
    resolved
}

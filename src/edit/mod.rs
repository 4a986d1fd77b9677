//! Event stream editing.
//!
//! [`EventStream`] owns a recording's header and its events and implements
//! every edit castedit offers. All edits work in place on absolute
//! timestamps (seconds since session start) and keep the relative order of
//! the events they retain.
//!
//! # Module Structure
//!
//! - [`range`] - time ranges and their resolution to event indices
//! - `timing` - renormalize, quantize, speed and smush
//! - `splice` - keep and excise
//! - `keystrokes` - reconstructing typed words from input events
//!
//! # Preconditions
//!
//! Range resolution bisects the timestamp sequence, so events must be in
//! chronological order. [`EventStream::new`] checks this once on load.
//! Edits with invalid arguments return an [`EditError`] and leave the
//! stream untouched.

mod error;
mod keystrokes;
pub mod range;
mod splice;
mod timing;

pub use error::EditError;
pub use keystrokes::StdinToken;
pub use range::{resolve_ranges, IndexRange, TimeRange};

use tracing::debug;

use crate::asciicast::{CastFile, Event};

/// Largest gap kept by quantize when no delay is given, in seconds.
pub const DEFAULT_MAX_DELAY: f64 = 1.0;

/// Speed-up factor used when none is given.
pub const DEFAULT_SPEED_FACTOR: f64 = 2.0;

/// A recording loaded into memory for editing.
#[derive(Debug, Clone, PartialEq)]
pub struct EventStream {
    header: String,
    events: Vec<Event>,
}

impl EventStream {
    /// Build a stream, checking that events are in chronological order.
    pub fn new(header: impl Into<String>, events: Vec<Event>) -> Result<Self, EditError> {
        if let Some(index) = (1..events.len()).find(|&i| events[i].time < events[i - 1].time) {
            return Err(EditError::Unsorted {
                index,
                time: events[index].time,
            });
        }

        Ok(Self {
            header: header.into(),
            events,
        })
    }

    pub fn from_cast(cast: CastFile) -> Result<Self, EditError> {
        Self::new(cast.header, cast.events)
    }

    pub fn into_cast(self) -> CastFile {
        CastFile::new(self.header, self.events)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn timestamps(&self) -> Vec<f64> {
        self.events.iter().map(|event| event.time).collect()
    }

    /// Time between the first and last event.
    pub fn duration(&self) -> f64 {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }

    /// Resolve time ranges against this stream's events.
    pub fn resolve_ranges(&self, ranges: &[TimeRange]) -> Vec<IndexRange> {
        resolve_ranges(&self.events, ranges)
    }

    /// Apply a single edit.
    pub fn apply(&mut self, edit: &Edit) -> Result<(), EditError> {
        debug!(edit = edit.name(), events = self.events.len(), "applying edit");

        match edit {
            Edit::Keep(range) => self.keep(std::slice::from_ref(range)),
            Edit::Excise(ranges) => self.excise(ranges),
            Edit::Quantize { max_delay } => self.quantize(*max_delay),
            Edit::Speed { ranges, factor } => self.speed_up(ranges, *factor),
            Edit::Smush { start } => {
                self.smush(*start);
                Ok(())
            }
            Edit::DeleteWord(word) => self.delete_word(word).map(|_| ()),
            Edit::Renormalize => {
                self.renormalize();
                Ok(())
            }
        }
    }
}

/// One edit, as selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Keep only this range, end event included
    Keep(TimeRange),
    /// Cut these ranges out and splice the rest together
    Excise(Vec<TimeRange>),
    /// Cap every gap between events
    Quantize { max_delay: f64 },
    /// Shrink gaps inside the ranges by `factor`
    Speed { ranges: Vec<TimeRange>, factor: f64 },
    /// Collapse everything before `start` to time zero
    Smush { start: f64 },
    /// Remove every typed occurrence of a word
    DeleteWord(String),
    /// Shift timestamps so the first event is at zero
    Renormalize,
}

impl Edit {
    pub fn name(&self) -> &'static str {
        match self {
            Edit::Keep(_) => "keep",
            Edit::Excise(_) => "excise",
            Edit::Quantize { .. } => "quantize",
            Edit::Speed { .. } => "speed",
            Edit::Smush { .. } => "smush",
            Edit::DeleteWord(_) => "delete-word",
            Edit::Renormalize => "renormalize",
        }
    }
}

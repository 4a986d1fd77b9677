//! castedit library
//!
//! Non-destructive editing of asciinema recordings: trimming to a time
//! window, removing time ranges, re-timing and redacting typed keystrokes.
//!
//! ```
//! use castedit::{CastFile, EventStream, TimeRange};
//!
//! let cast = CastFile::parse_str(
//!     "{\"version\": 2}\n[1.0, \"o\", \"a\"]\n[9.0, \"o\", \"b\"]\n[10.0, \"o\", \"c\"]",
//! )
//! .unwrap();
//! let mut stream = EventStream::from_cast(cast).unwrap();
//! stream.keep(&[TimeRange::new(9.0, 10.0).unwrap()]).unwrap();
//! assert_eq!(stream.timestamps(), vec![0.0, 1.0]);
//! ```

pub mod asciicast;
pub mod cli;
pub mod config;
pub mod edit;
pub mod logging;

pub use asciicast::{CastFile, Event, EventKind};
pub use config::Config;
pub use edit::{Edit, EditError, EventStream, StdinToken, TimeRange};

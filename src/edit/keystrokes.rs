//! Reconstructing typed words from recorded keystrokes.
//!
//! Input is recorded one keystroke per event, so a typed word is a run of
//! input events that each carry a single alphanumeric character. The run
//! ends at the first other input event (space, enter, an escape sequence).
//!
//! Deletion is stricter than the audit listing: there any event that is not
//! a keystroke also ends the run, so output echoed mid-word never lets two
//! halves match as one word.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::asciicast::Event;

use super::{EditError, EventStream};

/// A typed word or a standalone keystroke.
#[derive(Debug, Clone, PartialEq)]
pub enum StdinToken {
    Word {
        /// Index of the word's first keystroke event
        start_index: usize,
        /// Index one past the word's last keystroke event
        end_index: usize,
        /// Time of the first keystroke
        time: f64,
        text: String,
        /// False when the recording ends mid-word
        terminated: bool,
    },
    Key {
        index: usize,
        time: f64,
        data: String,
    },
}

impl fmt::Display for StdinToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StdinToken::Word { time, text, .. } => write!(f, "{:?}: {}", time, text),
            StdinToken::Key { time, data, .. } => write!(f, "{:?}: {}", time, data.escape_debug()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanMode {
    /// Every non-keystroke event ends a word, and every non-word input
    /// event is reported as a key.
    Strict,
    /// Non-input events are skipped, and the keystroke that ends a word is
    /// not reported on its own.
    Audit,
}

fn is_word_char(event: &Event) -> bool {
    if !event.is_input() {
        return false;
    }
    let mut chars = event.data.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphanumeric())
}

struct PendingWord {
    start_index: usize,
    end_index: usize,
    time: f64,
    text: String,
}

impl PendingWord {
    fn finish(self, terminated: bool) -> StdinToken {
        StdinToken::Word {
            start_index: self.start_index,
            end_index: self.end_index,
            time: self.time,
            text: self.text,
            terminated,
        }
    }
}

fn scan(events: &[Event], mode: ScanMode) -> Vec<StdinToken> {
    let mut tokens = Vec::new();
    let mut word: Option<PendingWord> = None;

    for (index, event) in events.iter().enumerate() {
        if is_word_char(event) {
            match word.as_mut() {
                Some(pending) => {
                    pending.text.push_str(&event.data);
                    pending.end_index = index + 1;
                }
                None => {
                    word = Some(PendingWord {
                        start_index: index,
                        end_index: index + 1,
                        time: event.time,
                        text: event.data.clone(),
                    })
                }
            }
            continue;
        }

        if mode == ScanMode::Audit && !event.is_input() {
            continue;
        }

        let ended_word = match word.take() {
            Some(pending) => {
                tokens.push(pending.finish(true));
                true
            }
            None => false,
        };

        let folded = mode == ScanMode::Audit && ended_word;
        if event.is_input() && !folded {
            tokens.push(StdinToken::Key {
                index,
                time: event.time,
                data: event.data.clone(),
            });
        }
    }

    if let Some(pending) = word.take() {
        tokens.push(pending.finish(false));
    }

    tokens
}

impl EventStream {
    /// Typed words and standalone keystrokes, in recording order.
    ///
    /// Output events do not split a word here, and the keystroke that ends
    /// a word is not listed as a key.
    pub fn stdin_tokens(&self) -> Vec<StdinToken> {
        scan(&self.events, ScanMode::Audit)
    }

    /// Write every typed word and standalone keystroke as `time: text`.
    ///
    /// Meant for auditing a recording before [`EventStream::delete_word`].
    /// A word still being typed when the recording ends is listed too.
    pub fn print_stdin<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for token in self.stdin_tokens() {
            writeln!(out, "{}", token)?;
        }
        Ok(())
    }

    /// Remove the keystroke events of every typed occurrence of `target`.
    ///
    /// Only complete words match: a word is complete once some later event
    /// ends it, so a word still open at the end of the recording is kept.
    /// The gap the removed keystrokes leave behind is not closed.
    ///
    /// Returns the number of occurrences removed.
    pub fn delete_word(&mut self, target: &str) -> Result<usize, EditError> {
        if target.is_empty() {
            return Err(EditError::EmptyWord);
        }

        let mut remove = vec![false; self.events.len()];
        let mut occurrences = 0;
        for token in scan(&self.events, ScanMode::Strict) {
            if let StdinToken::Word {
                start_index,
                end_index,
                text,
                terminated: true,
                ..
            } = token
            {
                if text == target {
                    remove[start_index..end_index].fill(true);
                    occurrences += 1;
                }
            }
        }

        if occurrences > 0 {
            let events = std::mem::take(&mut self.events);
            self.events = events
                .into_iter()
                .zip(remove)
                .filter_map(|(event, removed)| (!removed).then_some(event))
                .collect();
        }

        debug!(occurrences, remaining = self.events.len(), "deleted typed word");
        Ok(occurrences)
    }
}

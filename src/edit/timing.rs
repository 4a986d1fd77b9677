//! Timestamp rewriting: renormalize, quantize, speed and smush.
//!
//! Quantize and speed both work on the gaps between consecutive events.
//! All gaps are computed from the original timestamps before any of them is
//! rewritten, then the timestamps are rebuilt as a running sum starting at
//! the first event, which never moves.

use tracing::debug;

use crate::asciicast::Event;

use super::{EditError, EventStream, TimeRange, DEFAULT_MAX_DELAY};

/// Gap to the previous event for every event; the first gap is 0.
fn deltas(events: &[Event]) -> Vec<f64> {
    let mut deltas = Vec::with_capacity(events.len());
    deltas.push(0.0);
    deltas.extend(events.windows(2).map(|pair| pair[1].time - pair[0].time));
    deltas
}

/// Rewrite timestamps as the first timestamp plus the running sum of `deltas`.
fn rebuild(events: &mut [Event], deltas: &[f64]) {
    for i in 1..events.len() {
        events[i].time = events[i - 1].time + deltas[i];
    }
}

impl EventStream {
    /// Shift every timestamp so the first event is at 0.
    pub fn renormalize(&mut self) {
        let Some(first) = self.events.first().map(|event| event.time) else {
            return;
        };

        for event in &mut self.events {
            event.time -= first;
        }
    }

    /// Cap every gap between consecutive events at `max_delay` seconds.
    ///
    /// Shorter gaps are left as they are.
    pub fn quantize(&mut self, max_delay: f64) -> Result<(), EditError> {
        if !(max_delay >= 0.0) {
            return Err(EditError::InvalidDelay(max_delay));
        }
        self.cap_gaps(max_delay);
        Ok(())
    }

    /// Quantize with an already validated delay.
    pub(super) fn cap_gaps(&mut self, max_delay: f64) {
        if self.events.len() < 2 {
            return;
        }

        let mut deltas = deltas(&self.events);
        let mut capped = 0;
        for delta in deltas.iter_mut().skip(1) {
            if *delta > max_delay {
                *delta = max_delay;
                capped += 1;
            }
        }

        rebuild(&mut self.events, &deltas);
        debug!(max_delay, capped, "quantized gaps");
    }

    /// Divide the gaps inside each range by `factor`.
    ///
    /// A factor above 1 speeds playback up, below 1 slows it down. Gaps
    /// outside the ranges are kept. Every range scales the original gaps, so
    /// overlapping ranges scale their shared gaps twice.
    pub fn speed_up(&mut self, ranges: &[TimeRange], factor: f64) -> Result<(), EditError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(EditError::InvalidFactor(factor));
        }

        let scale = 1.0 / factor;
        let mut deltas = deltas(&self.events);

        for range in self.resolve_ranges(ranges) {
            debug!(start = range.start, gaps = range.len(), factor, "speeding up");
            for delta in &mut deltas[range.start..range.end] {
                *delta *= scale;
            }
        }

        rebuild(&mut self.events, &deltas);
        Ok(())
    }

    /// Collapse every event before `start` to time 0, then quantize with the
    /// default delay.
    ///
    /// Early events still play, back to back, so terminal state they build up
    /// (a TUI's first frame, say) is not lost.
    pub fn smush(&mut self, start: f64) {
        let mut collapsed = 0;
        for event in self.events.iter_mut().filter(|event| event.time < start) {
            event.time = 0.0;
            collapsed += 1;
        }
        debug!(start, collapsed, "smushed leading events");

        self.cap_gaps(DEFAULT_MAX_DELAY);
    }
}

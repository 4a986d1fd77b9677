//! Keeping and excising spans of events.

use tracing::debug;

use super::{EditError, EventStream, IndexRange, TimeRange, DEFAULT_MAX_DELAY};

impl EventStream {
    /// Keep only the events inside a single time range.
    ///
    /// Unlike the other range edits this includes the event the range end
    /// resolves to. The kept segment is renormalized and quantized so it plays
    /// as a recording of its own.
    pub fn keep(&mut self, ranges: &[TimeRange]) -> Result<(), EditError> {
        let [range] = ranges else {
            return Err(EditError::KeepRangeCount(ranges.len()));
        };

        let IndexRange { start, end } = self.resolve_ranges(std::slice::from_ref(range))[0];
        let end = (end + 1).min(self.events.len());
        debug!(start, end, total = self.events.len(), "keeping events");

        self.events.truncate(end);
        self.events.drain(..start);

        self.renormalize();
        self.cap_gaps(DEFAULT_MAX_DELAY);
        Ok(())
    }

    /// Cut the given time ranges out and splice what is left back together.
    ///
    /// Ranges should not overlap. The result is renormalized and quantized so
    /// the cuts do not leave long pauses behind.
    pub fn excise(&mut self, ranges: &[TimeRange]) -> Result<(), EditError> {
        if ranges.is_empty() {
            return Err(EditError::NoRanges);
        }

        let cuts = self.resolve_ranges(ranges);
        let total = self.events.len();

        // Spans to keep: before the first cut, between neighbouring cuts,
        // after the last cut
        let mut spans = Vec::with_capacity(cuts.len() + 1);
        spans.push(IndexRange::new(0, cuts[0].start));
        spans.extend(cuts.windows(2).map(|pair| IndexRange::new(pair[0].end, pair[1].start)));
        spans.push(IndexRange::new(cuts[cuts.len() - 1].end, total));

        let mut kept = Vec::with_capacity(total);
        // Overlapping cuts can leave a span ending before it starts
        for span in spans.iter().filter(|span| !span.is_empty()) {
            kept.extend_from_slice(&self.events[span.start..span.end]);
        }

        self.events = kept;
        debug!(cuts = cuts.len(), total, kept = self.events.len(), "excised ranges");

        self.renormalize();
        self.cap_gaps(DEFAULT_MAX_DELAY);
        Ok(())
    }
}

// Derived from asciinema (https://github.com/asciinema/asciinema)
// Copyright (c) asciinema authors
// Licensed under GPL-3.0-or-later
// Adapted for castedit

//! asciicast line format reader and writer
//!
//! Reference: https://docs.asciinema.org/manual/asciicast/v2/
//!
//! A recording is a header line followed by one JSON array per event:
//! `[time, code, data]`, where `time` is seconds since the session started.
//! The header is carried through as an opaque string; castedit never needs
//! any of its fields, so it is never parsed or re-serialized.
//!
//! Derived from the official asciinema implementation, trimmed to the
//! parts castedit needs.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Number of decimal places timestamps are rounded to on write.
pub const TIME_PRECISION: i32 = 7;

/// Round a timestamp to [`TIME_PRECISION`] decimal places.
///
/// Repeated re-timing accumulates floating point noise (`3.0000000000000004`);
/// this keeps the written file stable.
pub fn round_time(time: f64) -> f64 {
    let scale = 10f64.powi(TIME_PRECISION);
    (time * scale).round() / scale
}

/// Event kind codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Output (data written to terminal)
    Output, // "o"
    /// Input (keystrokes read from terminal)
    Input, // "i"
    /// Marker (annotation)
    Marker, // "m"
    /// Resize (terminal resize)
    Resize, // "r"
    /// Exit (process exit code)
    Exit, // "x"
    /// Any code castedit does not know about, kept verbatim
    Other(String),
}

impl EventKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "o" => EventKind::Output,
            "i" => EventKind::Input,
            "m" => EventKind::Marker,
            "r" => EventKind::Resize,
            "x" => EventKind::Exit,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            EventKind::Output => "o",
            EventKind::Input => "i",
            EventKind::Marker => "m",
            EventKind::Resize => "r",
            EventKind::Exit => "x",
            EventKind::Other(code) => code,
        }
    }
}

/// A single recorded event
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Seconds since the start of the session
    pub time: f64,
    pub kind: EventKind,
    /// Raw payload (output text, a keystroke, marker label, ...)
    pub data: String,
}

impl Event {
    pub fn new(time: f64, kind: EventKind, data: impl Into<String>) -> Self {
        Self {
            time,
            kind,
            data: data.into(),
        }
    }

    pub fn output(time: f64, data: impl Into<String>) -> Self {
        Self::new(time, EventKind::Output, data)
    }

    pub fn input(time: f64, data: impl Into<String>) -> Self {
        Self::new(time, EventKind::Input, data)
    }

    pub fn is_output(&self) -> bool {
        self.kind == EventKind::Output
    }

    pub fn is_input(&self) -> bool {
        self.kind == EventKind::Input
    }

    /// Parse an event from a JSON line
    pub fn from_json(line: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(line).context("Failed to parse event JSON")?;

        let arr = value.as_array().context("Event must be a JSON array")?;

        if arr.len() < 3 {
            bail!("Event array must have at least 3 elements");
        }

        let time = arr[0].as_f64().context("Event time must be a number")?;

        let code = arr[1].as_str().context("Event type must be a string")?;

        let data = arr[2]
            .as_str()
            .context("Event data must be a string")?
            .to_string();

        Ok(Event {
            time,
            kind: EventKind::from_code(code),
            data,
        })
    }

    /// Convert event to a JSON line, rounding the timestamp
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&(round_time(self.time), self.kind.code(), &self.data))
            .context("Failed to serialize event")
    }
}

/// Complete recording: opaque header line plus its events
#[derive(Debug, Clone, PartialEq)]
pub struct CastFile {
    pub header: String,
    pub events: Vec<Event>,
}

impl CastFile {
    pub fn new(header: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            header: header.into(),
            events,
        }
    }

    /// Parse a recording from a path
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let reader = BufReader::new(file);

        Self::parse_reader(reader).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Parse a recording from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        // First line is the header
        let header = lines
            .next()
            .context("File is empty")?
            .context("Failed to read header line")?
            .trim()
            .to_string();

        if header.is_empty() {
            bail!("Header line is empty");
        }

        // Remaining lines are events
        let mut events = Vec::new();
        for (line_num, line_result) in lines.enumerate() {
            let line =
                line_result.with_context(|| format!("Failed to read line {}", line_num + 2))?;

            if line.trim().is_empty() {
                continue;
            }

            let event = Event::from_json(&line)
                .with_context(|| format!("Failed to parse event on line {}", line_num + 2))?;
            events.push(event);
        }

        Ok(CastFile { header, events })
    }

    /// Parse from a string
    pub fn parse_str(content: &str) -> Result<Self> {
        let reader = BufReader::new(content.as_bytes());
        Self::parse_reader(reader)
    }

    /// Write the recording to a path
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;

        self.write_to(&mut file)
    }

    /// Write the recording to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.header)?;

        for event in &self.events {
            writeln!(writer, "{}", event.to_json()?)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Convert to string
    pub fn to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

//! Edit subcommand handlers

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use castedit::{CastFile, Edit, EventStream};

use super::Output;

/// Read a recording from a path, or from stdin when the path is `-`.
pub fn load_stream(input: &Path) -> Result<EventStream> {
    let cast = if input == Path::new("-") {
        CastFile::parse_reader(io::stdin().lock())
            .context("Failed to parse recording from stdin")?
    } else {
        CastFile::parse(input)?
    };

    info!(events = cast.events.len(), input = %input.display(), "loaded recording");

    let stream =
        EventStream::from_cast(cast).with_context(|| format!("Cannot edit {:?}", input))?;
    debug!(header = stream.header(), "recording header");
    Ok(stream)
}

/// Write the edited recording unless this is a dry run.
pub fn write_stream(stream: EventStream, output: &Output) -> Result<()> {
    if output.dry_run {
        info!(events = stream.len(), "dry run, not writing output");
        return Ok(());
    }

    let cast = stream.into_cast();
    match &output.path {
        Some(path) => {
            cast.write(path)?;
            info!(events = cast.events.len(), output = %path.display(), "wrote recording");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            cast.write_to(&mut handle)?;
        }
    }
    Ok(())
}

/// Apply one edit to a recording and write the result.
pub fn handle_edit(input: &Path, edit: Edit, output: &Output) -> Result<()> {
    let mut stream = load_stream(input)?;
    let before = stream.len();

    stream
        .apply(&edit)
        .with_context(|| format!("Cannot {} {:?}", edit.name(), input))?;

    info!(
        edit = edit.name(),
        before,
        after = stream.len(),
        duration = stream.duration(),
        "edit applied"
    );

    write_stream(stream, output)
}

/// Remove a typed word, warning when it never occurs.
pub fn handle_delete_word(input: &Path, word: &str, output: &Output) -> Result<()> {
    let mut stream = load_stream(input)?;

    let occurrences = stream
        .delete_word(word)
        .with_context(|| format!("Cannot delete word from {:?}", input))?;

    if occurrences == 0 {
        warn!(word, "word was not typed anywhere in the recording");
    } else {
        info!(occurrences, "deleted typed word");
    }

    write_stream(stream, output)
}

/// Print typed words and keystrokes. Never writes the recording.
#[cfg(not(tarpaulin_include))]
pub fn handle_print_stdin(input: &Path) -> Result<()> {
    let stream = load_stream(input)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    stream.print_stdin(&mut handle)?;
    handle.flush()?;
    Ok(())
}

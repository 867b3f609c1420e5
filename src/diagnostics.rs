//! Diagnostic aggregator — replays tool output onto the wrapper's stderr.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::WrapperError;

/// Replay every source in order onto `sink`.
///
/// Lines are streamed verbatim with their boundaries preserved; nothing
/// is filtered, rewritten, or deduplicated. Fails only if a declared
/// source is unreadable.
pub fn replay_all(sources: &[&Path], sink: &mut impl Write) -> Result<(), WrapperError> {
    for source in sources {
        replay(source, sink)?;
    }
    Ok(())
}

/// Stream one source's lines onto `sink`.
pub fn replay(source: &Path, sink: &mut impl Write) -> Result<(), WrapperError> {
    let file = File::open(source).map_err(|e| unreadable(source, e))?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line.map_err(|e| unreadable(source, e))?;
        writeln!(sink, "{line}").map_err(|e| unreadable(source, e))?;
    }
    Ok(())
}

fn unreadable(source: &Path, e: io::Error) -> WrapperError {
    WrapperError::Diagnostics {
        path: source.to_path_buf(),
        source: e,
    }
}

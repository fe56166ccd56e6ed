//! Transcript file loading.
//!
//! Reads the whole transcript into memory as raw lines, terminators kept,
//! and releases the file handle before any parsing happens.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};
use transcript_core::error::{Result, TranscriptError};
use transcript_core::models::MessageTable;

use crate::assembler::assemble;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every line of `path`, keeping each line's terminator.
///
/// A `\r\n` terminator is normalised to `\n`. The last line keeps whatever
/// it ends with (possibly nothing).
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file_err = |source| TranscriptError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_err)?;
    let lines = read_lines_from(BufReader::new(file)).map_err(file_err)?;

    if lines.is_empty() {
        warn!("Transcript {} is empty", path.display());
    }
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read a transcript and assemble it into a [`MessageTable`].
pub fn load_message_table(path: &Path) -> Result<MessageTable> {
    let lines = read_lines(path)?;
    Ok(assemble(&lines))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn read_lines_from<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.ends_with("\r\n") {
            line.truncate(line.len() - 2);
            line.push('\n');
        }
        lines.push(line);
    }
    Ok(lines)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

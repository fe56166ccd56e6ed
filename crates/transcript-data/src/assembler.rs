//! Builds the message table from raw lines.

use tracing::debug;
use transcript_core::models::MessageTable;

use crate::extractor::LineExtractor;

/// Extract every line independently and collect the results in input order.
///
/// The table always has exactly one row per input line.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> MessageTable {
    let extractor = LineExtractor::new();
    let table: MessageTable = lines
        .iter()
        .map(|line| extractor.extract(line.as_ref()))
        .collect();

    debug!(
        "Assembled {} rows: {} dated, {} with sender",
        table.len(),
        table.dates().flatten().count(),
        table.senders().flatten().count(),
    );

    table
}

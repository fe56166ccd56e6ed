//! Main analysis pipeline for the chat analyser.
//!
//! Loads a transcript, assembles the message table, splits it per
//! participant, counts words for each side and builds the daily series.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use transcript_core::error::Result;
use transcript_core::models::{DailySeries, MessageTable, PartitionedTables, WordFrequencies};

use crate::aggregator::DailyAggregator;
use crate::assembler::assemble;
use crate::partition::{partition, partition_by};
use crate::reader::read_lines;
use crate::vocabulary::table_word_frequencies;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of transcript lines (and therefore table rows).
    pub lines_read: usize,
    /// Rows carrying a `dd/mm/yyyy` token, valid or not.
    pub rows_with_date: usize,
    /// Rows carrying a `Name Surname` match.
    pub rows_with_sender: usize,
    /// Distinct days in the daily series.
    pub days_in_series: usize,
    /// Wall-clock seconds spent reading the transcript.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent parsing, partitioning and aggregating.
    pub transform_time_seconds: f64,
}

/// Vocabulary for one side of the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantVocabulary {
    /// Number of rows in this partition.
    pub messages: usize,
    pub words: WordFrequencies,
}

/// The complete output of [`analyze_transcript`].
#[derive(Debug, Clone)]
pub struct TranscriptAnalysis {
    pub table: MessageTable,
    pub partitions: PartitionedTables,
    /// Vocabulary of the reference sender's partition.
    pub primary_vocabulary: ParticipantVocabulary,
    /// Vocabulary of every other row.
    pub other_vocabulary: ParticipantVocabulary,
    pub series: DailySeries,
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline on the transcript at `path`.
///
/// When `reference` is `None` the reference identity is the first row's
/// sender, and an empty transcript aborts the run.
pub fn analyze_transcript(path: &Path, reference: Option<&str>) -> Result<TranscriptAnalysis> {
    let load_start = Instant::now();
    let lines = read_lines(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let mut analysis = analyze_lines(&lines, reference)?;
    analysis.metadata.load_time_seconds = load_time;

    info!(
        "Analysed {}: {} rows over {} days",
        path.display(),
        analysis.table.len(),
        analysis.series.len()
    );
    Ok(analysis)
}

/// Run the pipeline on lines already in memory.
pub fn analyze_lines<S: AsRef<str>>(
    lines: &[S],
    reference: Option<&str>,
) -> Result<TranscriptAnalysis> {
    let transform_start = Instant::now();

    let table = assemble(lines);
    let partitions = match reference {
        Some(name) => partition_by(&table, name),
        None => partition(&table)?,
    };
    let primary_vocabulary = vocabulary_for(&partitions.primary);
    let other_vocabulary = vocabulary_for(&partitions.other);
    let series = DailyAggregator::aggregate(&table);

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        lines_read: lines.len(),
        rows_with_date: table.dates().flatten().count(),
        rows_with_sender: table.senders().flatten().count(),
        days_in_series: series.len(),
        load_time_seconds: 0.0,
        transform_time_seconds: transform_start.elapsed().as_secs_f64(),
    };

    Ok(TranscriptAnalysis {
        table,
        partitions,
        primary_vocabulary,
        other_vocabulary,
        series,
        metadata,
    })
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn vocabulary_for(table: &MessageTable) -> ParticipantVocabulary {
    ParticipantVocabulary {
        messages: table.len(),
        words: table_word_frequencies(table),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Report assembly and rendering (text tables or JSON).

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use transcript_core::error::Result;
use transcript_core::formatting::{format_count, format_decimal, format_rolling};
use transcript_core::models::{DailySeries, SeriesSummary};
use transcript_data::analysis::{AnalysisMetadata, ParticipantVocabulary, TranscriptAnalysis};

/// Label used for the partition that does not match the reference sender.
pub const OTHERS_LABEL: &str = "others";

/// Label used for the primary partition when the reference is the absent sender.
pub const NO_SENDER_LABEL: &str = "(no sender)";

#[derive(Debug, Clone, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantReport {
    pub label: String,
    pub messages: usize,
    pub distinct_words: usize,
    pub top_words: Vec<WordCount>,
}

impl ParticipantReport {
    fn new(label: &str, vocabulary: &ParticipantVocabulary, top_n: usize) -> Self {
        Self {
            label: label.to_string(),
            messages: vocabulary.messages,
            distinct_words: vocabulary.words.len(),
            top_words: vocabulary
                .words
                .top(top_n)
                .into_iter()
                .map(|(word, count)| WordCount { word, count })
                .collect(),
        }
    }
}

/// Everything printed for one run. `Display` renders the text report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: String,
    /// `None` when the split was made on the absent sender.
    pub reference: Option<String>,
    pub participants: Vec<ParticipantReport>,
    /// Daily series restricted to the requested range.
    pub daily: DailySeries,
    /// Mean and max over the full (unrestricted) series.
    pub summary: Option<SeriesSummary>,
    pub metadata: AnalysisMetadata,
}

impl Report {
    pub fn build(
        input: &str,
        analysis: &TranscriptAnalysis,
        top_n: usize,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        let reference = analysis.partitions.reference.clone();
        let primary_label = reference.as_deref().unwrap_or(NO_SENDER_LABEL);
        Self {
            input: input.to_string(),
            participants: vec![
                ParticipantReport::new(primary_label, &analysis.primary_vocabulary, top_n),
                ParticipantReport::new(OTHERS_LABEL, &analysis.other_vocabulary, top_n),
            ],
            reference,
            daily: analysis.series.between(start, end),
            summary: analysis.series.summary(),
            metadata: analysis.metadata.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn write_participants(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for participant in &self.participants {
            writeln!(f)?;
            writeln!(
                f,
                "Top words: {} ({} messages, {} distinct words)",
                participant.label,
                format_count(participant.messages as u64),
                format_count(participant.distinct_words as u64),
            )?;
            if participant.top_words.is_empty() {
                writeln!(f, "  (none)")?;
            }
            for (rank, wc) in participant.top_words.iter().enumerate() {
                writeln!(
                    f,
                    "  {:>3}. {:<20} {:>8}",
                    rank + 1,
                    wc.word,
                    format_count(wc.count)
                )?;
            }
        }
        Ok(())
    }

    fn write_daily(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{:<12} {:>8} {:>12}", "Date", "Count", "Rolling avg")?;
        for point in self.daily.points() {
            writeln!(
                f,
                "{:<12} {:>8} {:>12}",
                point.date.format("%Y-%m-%d").to_string(),
                format_count(point.count),
                format_rolling(point.rolling_average),
            )?;
        }
        if self.daily.is_empty() {
            writeln!(f, "(no dated messages in range)")?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transcript: {}", self.input)?;
        writeln!(
            f,
            "Messages:   {} ({} dated, {} days)",
            format_count(self.metadata.lines_read as u64),
            format_count(self.metadata.rows_with_date as u64),
            format_count(self.metadata.days_in_series as u64),
        )?;

        self.write_participants(f)?;
        self.write_daily(f)?;

        writeln!(f)?;
        match &self.summary {
            Some(summary) => writeln!(
                f,
                "Averaged {} messages a day, and the most sent in one day was {}",
                format_decimal(summary.mean, 2),
                format_count(summary.max),
            ),
            None => writeln!(f, "No dated messages to summarise"),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

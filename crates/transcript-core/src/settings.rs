use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{Result, TranscriptError};

// ── OutputFormat ───────────────────────────────────────────────────────────────

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Text,
    /// A single JSON document for external plotting tools.
    Json,
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Word frequencies and daily message volume from an exported chat transcript
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chat-analyser",
    about = "Word frequencies and daily message volume from an exported chat transcript",
    version
)]
pub struct Settings {
    /// Transcript file to analyse (one message per line)
    pub input: PathBuf,

    /// Reference sender for partitioning (defaults to the first message's sender)
    #[arg(long, env = "CHAT_ANALYSER_REFERENCE")]
    pub reference: Option<String>,

    /// Number of top words to report per participant
    #[arg(long, default_value = "20", env = "CHAT_ANALYSER_TOP_WORDS")]
    pub top_words: usize,

    /// First day of the reported daily series (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the reported daily series (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Report format
    #[arg(long, value_enum, default_value = "text", env = "CHAT_ANALYSER_FORMAT")]
    pub format: OutputFormat,

    /// Logging level
    #[arg(
        long,
        default_value = "WARNING",
        env = "CHAT_ANALYSER_LOG_LEVEL",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"]
    )]
    pub log_level: String,

    /// Log file path (logs go to stderr when unset)
    #[arg(long, env = "CHAT_ANALYSER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse process arguments and apply the `--debug` override.
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`load`](Self::load) but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Check cross-field constraints clap cannot express.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(TranscriptError::InvalidDateRange { start, end });
            }
        }
        if self.top_words == 0 {
            return Err(TranscriptError::Config(
                "--top-words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// All errors produced by the transcript analyser.
///
/// Malformed line content is never an error: unmatched dates, senders and
/// name prefixes degrade into absent fields instead.
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The transcript could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Partitioning was requested on a table with no rows.
    #[error("Cannot partition an empty message table: no reference sender")]
    EmptyTable,

    /// A caller-supplied date range ends before it starts.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A report could not be serialised to JSON.
    #[error("Failed to serialise JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the transcript crates.
pub type Result<T> = std::result::Result<T, TranscriptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = TranscriptError::FileRead {
            path: PathBuf::from("/some/chat.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/chat.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_empty_table() {
        let msg = TranscriptError::EmptyTable.to_string();
        assert_eq!(
            msg,
            "Cannot partition an empty message table: no reference sender"
        );
    }

    #[test]
    fn test_error_display_invalid_date_range() {
        let err = TranscriptError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2019, 10, 30).unwrap(),
            end: NaiveDate::from_ymd_opt(2019, 10, 25).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: start 2019-10-30 is after end 2019-10-25"
        );
    }

    #[test]
    fn test_error_display_config() {
        let err = TranscriptError::Config("top-words must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: top-words must be positive"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: TranscriptError = json_err.into();
        assert!(err.to_string().contains("Failed to serialise JSON"));
    }
}

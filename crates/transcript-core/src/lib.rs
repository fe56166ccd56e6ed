//! Shared types for the chat transcript analyser.
//!
//! Holds the parsed message table, the derived partitions and daily series,
//! the error taxonomy and CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, TranscriptError};

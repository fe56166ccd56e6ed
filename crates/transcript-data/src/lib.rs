//! Parsing and analysis layer for the chat analyser.
//!
//! Reads exported chat transcripts, extracts per-line date, sender and body
//! fields into a message table, splits the table per participant, counts
//! vocabulary and builds the daily message-volume series.

pub mod aggregator;
pub mod analysis;
pub mod assembler;
pub mod extractor;
pub mod partition;
pub mod reader;
pub mod vocabulary;

pub use transcript_core as core;

//! Per-line field extraction.
//!
//! Each transcript line is matched against three independent patterns: a
//! day-first `dd/mm/yyyy` date, a two-word capitalised sender name, and the
//! `Name Surname: ` prefix marking where the message body starts. Every line
//! yields a [`ParsedMessage`]; unmatched fields are simply absent.
//!
//! The sender pattern fires on the first capitalised word pair anywhere in
//! the line, so a message such as "see you in New York" written by a sender
//! whose name was not matched would report "New York" as the sender.

use std::sync::OnceLock;

use regex::Regex;
use transcript_core::models::ParsedMessage;

const DATE_PATTERN: &str = r"[0-9]{2}/[0-9]{2}/[0-9]{4}";
const NAME_PATTERN: &str = r"[A-Z][a-z]+ [A-Z][a-z]+";
const NAME_PREFIX_PATTERN: &str = r"[A-Z][a-z]+ [A-Z][a-z]+: ";

/// Compiled patterns for splitting one line into date, sender and body.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    date_re: Regex,
    name_re: Regex,
    prefix_re: Regex,
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self {
            date_re: Regex::new(DATE_PATTERN).expect("regex is valid"),
            name_re: Regex::new(NAME_PATTERN).expect("regex is valid"),
            prefix_re: Regex::new(NAME_PREFIX_PATTERN).expect("regex is valid"),
        }
    }
}

impl LineExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `line` (terminator included) into a [`ParsedMessage`].
    pub fn extract(&self, line: &str) -> ParsedMessage {
        ParsedMessage {
            date_token: self.date_token(line),
            sender: self.sender(line),
            body: self.body(line),
        }
    }

    /// First `dd/mm/yyyy` substring. Calendar validity is not checked here.
    pub fn date_token(&self, line: &str) -> Option<String> {
        self.date_re.find(line).map(|m| m.as_str().to_string())
    }

    /// First `Name Surname` substring anywhere in the line.
    pub fn sender(&self, line: &str) -> Option<String> {
        self.name_re.find(line).map(|m| m.as_str().to_string())
    }

    /// Text after the first `Name Surname: ` prefix with its final character
    /// (the terminator) dropped, or the whole raw line when there is no prefix.
    pub fn body(&self, line: &str) -> String {
        match self.prefix_re.find(line) {
            Some(m) => {
                let mut rest = line[m.end()..].chars();
                rest.next_back();
                rest.as_str().to_string()
            }
            None => line.to_string(),
        }
    }
}

/// Extract with a process-wide compiled [`LineExtractor`].
pub fn extract(line: &str) -> ParsedMessage {
    static EXTRACTOR: OnceLock<LineExtractor> = OnceLock::new();
    EXTRACTOR.get_or_init(LineExtractor::default).extract(line)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

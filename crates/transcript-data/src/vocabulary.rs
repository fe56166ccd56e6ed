//! Word frequencies over message bodies.
//!
//! Bodies are lower-cased and split into word tokens; English stopwords and
//! punctuation are discarded. The resulting counts feed word-cloud rendering,
//! which happens outside this crate.

use std::collections::HashSet;
use std::sync::OnceLock;

use transcript_core::models::{MessageTable, WordFrequencies};

/// The NLTK English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOPWORDS.iter().copied().collect())
}

pub fn is_stopword(word: &str) -> bool {
    stopwords().contains(word)
}

/// Lower-case `text` and split it into word tokens.
///
/// A token is a run of alphanumerics and apostrophes with leading and
/// trailing apostrophes trimmed; everything else separates tokens, so pure
/// punctuation never becomes a token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|t| t.trim_matches(|c: char| c == '\'' || c == '\u{2019}'))
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('\u{2019}', "'"))
        .collect()
}

/// Count non-stopword tokens across `bodies`.
pub fn word_frequencies<'a, I>(bodies: I) -> WordFrequencies
where
    I: IntoIterator<Item = &'a str>,
{
    let mut freq = WordFrequencies::new();
    for body in bodies {
        for word in tokenize(body) {
            if !is_stopword(&word) {
                freq.add(&word);
            }
        }
    }
    freq
}

/// Word frequencies over the body column of `table`.
pub fn table_word_frequencies(table: &MessageTable) -> WordFrequencies {
    word_frequencies(table.bodies())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

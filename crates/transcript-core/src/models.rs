use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One transcript line broken into its date, sender and body fields.
///
/// `date_token` and `sender` are `None` when the line carries no match for
/// the corresponding pattern. `body` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Raw `dd/mm/yyyy` substring as it appeared in the line.
    pub date_token: Option<String>,
    /// Raw `Name Surname` substring (first two-word capitalised match).
    pub sender: Option<String>,
    /// Text after the `Name Surname: ` prefix, or the whole raw line.
    pub body: String,
}

impl ParsedMessage {
    /// Whether this row's sender contains `identity` as a substring.
    ///
    /// Rows without a sender never match.
    pub fn sender_contains(&self, identity: &str) -> bool {
        self.sender
            .as_deref()
            .map(|s| s.contains(identity))
            .unwrap_or(false)
    }

    /// Whether this row belongs with `reference`.
    ///
    /// A named reference matches by [`sender_contains`](Self::sender_contains);
    /// an absent reference matches exactly the rows without a sender.
    pub fn matches_reference(&self, reference: Option<&str>) -> bool {
        match reference {
            Some(identity) => self.sender_contains(identity),
            None => self.sender.is_none(),
        }
    }
}

/// Ordered rows of [`ParsedMessage`], one per transcript line, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    rows: Vec<ParsedMessage>,
}

impl MessageTable {
    pub fn new(rows: Vec<ParsedMessage>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ParsedMessage] {
        &self.rows
    }

    pub fn first(&self) -> Option<&ParsedMessage> {
        self.rows.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedMessage> {
        self.rows.iter()
    }

    /// The date column, aligned with [`rows`](Self::rows).
    pub fn dates(&self) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(|r| r.date_token.as_deref())
    }

    /// The sender column, aligned with [`rows`](Self::rows).
    pub fn senders(&self) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(|r| r.sender.as_deref())
    }

    /// The body column, aligned with [`rows`](Self::rows).
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.body.as_str())
    }
}

impl FromIterator<ParsedMessage> for MessageTable {
    fn from_iter<I: IntoIterator<Item = ParsedMessage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MessageTable {
    type Item = &'a ParsedMessage;
    type IntoIter = std::slice::Iter<'a, ParsedMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// A message table split in two by sender identity.
///
/// With a named reference, membership in `primary` is decided by substring
/// containment, not equality, so "Jon Smith" also captures "Jon Smithson".
/// With no reference (the first row had no sender), `primary` holds the
/// sender-less rows instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionedTables {
    /// Identity the split was made on; `None` when it was the absent sender.
    pub reference: Option<String>,
    /// Rows matching `reference`.
    pub primary: MessageTable,
    /// Every other row.
    pub other: MessageTable,
}

/// Message volume for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: u64,
    /// Centered rolling average; `None` at the series edges.
    pub rolling_average: Option<f64>,
}

/// Mean and maximum of the daily counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub mean: f64,
    pub max: u64,
}

/// Per-day message counts ordered by date, with only days that had at least
/// one dated message present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySeries {
    points: Vec<DailyPoint>,
}

impl DailySeries {
    /// Build a series from points already sorted by ascending date.
    pub fn from_points(points: Vec<DailyPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].date < w[1].date));
        Self { points }
    }

    pub fn points(&self) -> &[DailyPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Message count recorded for `date`, if the date is in the series.
    pub fn count_on(&self, date: NaiveDate) -> Option<u64> {
        self.find(date).map(|p| p.count)
    }

    /// Rolling average recorded for `date`, if the date has a full window.
    pub fn rolling_average_on(&self, date: NaiveDate) -> Option<f64> {
        self.find(date).and_then(|p| p.rolling_average)
    }

    /// Restrict the series to `start..=end`.
    ///
    /// Rolling averages are kept as computed over the full series, so points
    /// near the range edges still reflect their neighbours outside it.
    pub fn between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> DailySeries {
        let points = self
            .points
            .iter()
            .filter(|p| start.map_or(true, |s| p.date >= s))
            .filter(|p| end.map_or(true, |e| p.date <= e))
            .cloned()
            .collect();
        DailySeries { points }
    }

    /// Mean and maximum of the count column; `None` for an empty series.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let max = self.points.iter().map(|p| p.count).max()?;
        let total: u64 = self.points.iter().map(|p| p.count).sum();
        Some(SeriesSummary {
            mean: total as f64 / self.points.len() as f64,
            max,
        })
    }

    fn find(&self, date: NaiveDate) -> Option<&DailyPoint> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| &self.points[i])
    }
}

/// Word occurrence counts for one participant's messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencies {
    counts: HashMap<String, u64>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all words.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The `n` most frequent words, most frequent first, ties alphabetical.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut all: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(w, c)| (w.clone(), *c))
            .collect();
        all.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        all.truncate(n);
        all
    }
}

//! Daily message counts and their centered rolling average.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use transcript_core::models::{DailyPoint, DailySeries, MessageTable};

/// Width of the centered rolling-average window, in series entries.
pub const ROLLING_WINDOW: usize = 7;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Earliest day whose midnight is a representable nanosecond timestamp.
const MIN_SERIES_DATE: (i32, u32, u32) = (1677, 9, 22);
/// Latest day whose midnight is a representable nanosecond timestamp.
const MAX_SERIES_DATE: (i32, u32, u32) = (2262, 4, 11);

/// Parse a `dd/mm/yyyy` token into a calendar date.
///
/// Returns `None` for tokens that are not real dates, e.g. `31/02/2020`,
/// and for dates outside the signed 64-bit nanosecond epoch range
/// (`22/09/1677` to `11/04/2262`), which the daily series treats as
/// unparseable.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(token, DATE_FORMAT).ok()?;
    let (min, max) = (ymd(MIN_SERIES_DATE)?, ymd(MAX_SERIES_DATE)?);
    (min..=max).contains(&date).then_some(date)
}

fn ymd((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

// ── DailyAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that turns a message table into a [`DailySeries`].
pub struct DailyAggregator;

impl DailyAggregator {
    /// Count rows per calendar day and attach a [`ROLLING_WINDOW`]-wide
    /// centered rolling average.
    ///
    /// Rows whose date token is absent or not a valid calendar date are left
    /// out. Days with no messages are not filled in, so the window spans
    /// series entries rather than calendar days.
    pub fn aggregate(table: &MessageTable) -> DailySeries {
        let counts = Self::count_by_day(table);
        let values: Vec<u64> = counts.values().copied().collect();
        let averages = centered_rolling_mean(&values, ROLLING_WINDOW);

        let points = counts
            .into_iter()
            .zip(averages)
            .map(|((date, count), rolling_average)| DailyPoint {
                date,
                count,
                rolling_average,
            })
            .collect();

        DailySeries::from_points(points)
    }

    /// Per-day row counts keyed by date (ascending).
    pub fn count_by_day(table: &MessageTable) -> BTreeMap<NaiveDate, u64> {
        let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for date in table.dates().flatten().filter_map(parse_date_token) {
            *counts.entry(date).or_insert(0) += 1;
        }
        counts
    }
}

/// Mean of each `window`-wide run of `values`, aligned to the run's centre.
///
/// The first and last `window / 2` positions have no complete window and are
/// `None`, as is every position when `values` is shorter than `window`.
pub fn centered_rolling_mean(values: &[u64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    let half = window / 2;
    for (start, run) in values.windows(window).enumerate() {
        let sum: u64 = run.iter().sum();
        out[start + half] = Some(sum as f64 / window as f64);
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_lines(days: &[(u32, usize)]) -> Vec<String> {
        days.iter()
            .flat_map(|&(day, n)| {
                (0..n).map(move |i| format!("{:02}/10/2019 John Smith: message {}\n", day, i))
            })
            .collect()
    }

    // ── parse_date_token ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_date_token_day_first() {
        assert_eq!(parse_date_token("25/10/2019"), Some(date(2019, 10, 25)));
        assert_eq!(parse_date_token("01/02/2020"), Some(date(2020, 2, 1)));
    }

    #[test]
    fn test_parse_date_token_rejects_invalid_calendar_dates() {
        assert_eq!(parse_date_token("31/02/2020"), None);
        assert_eq!(parse_date_token("99/99/9999"), None);
        assert_eq!(parse_date_token("10/25/2019"), None);
    }

    #[test]
    fn test_parse_date_token_outside_timestamp_range() {
        assert_eq!(parse_date_token("01/01/9999"), None);
        assert_eq!(parse_date_token("01/01/1600"), None);
        assert_eq!(parse_date_token("21/09/1677"), None);
        assert_eq!(parse_date_token("12/04/2262"), None);
        assert_eq!(parse_date_token("22/09/1677"), Some(date(1677, 9, 22)));
        assert_eq!(parse_date_token("11/04/2262"), Some(date(2262, 4, 11)));
    }

    #[test]
    fn test_aggregate_drops_out_of_range_years() {
        let table = assemble(&[
            "01/01/9999 John Smith: far future\n",
            "25/10/2019 Jane Doe: now\n",
        ]);
        let series = DailyAggregator::aggregate(&table);
        assert_eq!(series.len(), 1);
        assert_eq!(series.count_on(date(2019, 10, 25)), Some(1));
    }

    #[test]
    fn test_parse_date_token_leap_day() {
        assert_eq!(parse_date_token("29/02/2020"), Some(date(2020, 2, 29)));
        assert_eq!(parse_date_token("29/02/2019"), None);
    }

    // ── aggregate ─────────────────────────────────────────────────────────────

    #[test]
    fn test_aggregate_drops_invalid_and_absent_dates() {
        let table = assemble(&[
            "31/02/2020 John Smith: impossible\n",
            "25/10/2019 Jane Doe: fine\n",
            "no date at all\n",
        ]);
        let series = DailyAggregator::aggregate(&table);

        assert_eq!(series.len(), 1);
        assert_eq!(series.count_on(date(2019, 10, 25)), Some(1));
        assert_eq!(series.count_on(date(2020, 3, 2)), None);
    }

    #[test]
    fn test_aggregate_groups_and_sorts_by_date() {
        let table = assemble(&[
            "27/10/2019 John Smith: c\n",
            "25/10/2019 John Smith: a\n",
            "27/10/2019 Jane Doe: d\n",
            "25/10/2019 Jane Doe: b\n",
            "25/10/2019 Jane Doe: b2\n",
        ]);
        let series = DailyAggregator::aggregate(&table);

        let dates: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2019, 10, 25), date(2019, 10, 27)]);
        assert_eq!(series.count_on(date(2019, 10, 25)), Some(3));
        assert_eq!(series.count_on(date(2019, 10, 27)), Some(2));
        // Gap day is not synthesised.
        assert_eq!(series.count_on(date(2019, 10, 26)), None);
    }

    #[test]
    fn test_aggregate_empty_table() {
        let series = DailyAggregator::aggregate(&MessageTable::default());
        assert!(series.is_empty());
        assert!(series.summary().is_none());
    }

    #[test]
    fn test_aggregate_rolling_average_constant_counts() {
        let days: Vec<(u32, usize)> = (1..=10).map(|d| (d, 1)).collect();
        let series = DailyAggregator::aggregate(&assemble(&dated_lines(&days)));

        let averages: Vec<Option<f64>> =
            series.points().iter().map(|p| p.rolling_average).collect();
        assert_eq!(averages.len(), 10);
        assert!(averages[..3].iter().all(Option::is_none));
        assert!(averages[7..].iter().all(Option::is_none));
        for avg in &averages[3..7] {
            assert!((avg.unwrap() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_aggregate_rolling_window_spans_entries_not_days() {
        // Seven entries spread over a month with gaps: one full window.
        let days = [(1, 1), (3, 2), (8, 3), (9, 4), (15, 5), (20, 6), (31, 7)];
        let series = DailyAggregator::aggregate(&assemble(&dated_lines(&days)));

        assert_eq!(series.len(), 7);
        assert_eq!(series.rolling_average_on(date(2019, 10, 9)), Some(4.0));
        assert_eq!(series.rolling_average_on(date(2019, 10, 8)), None);
        assert_eq!(series.rolling_average_on(date(2019, 10, 15)), None);
    }

    // ── centered_rolling_mean ─────────────────────────────────────────────────

    #[test]
    fn test_centered_rolling_mean_alignment() {
        let values = [1, 2, 3, 4, 5, 6, 7, 8];
        let means = centered_rolling_mean(&values, 7);
        assert_eq!(
            means,
            vec![None, None, None, Some(4.0), Some(5.0), None, None, None]
        );
    }

    #[test]
    fn test_centered_rolling_mean_short_series() {
        assert_eq!(centered_rolling_mean(&[5, 5, 5], 7), vec![None, None, None]);
        assert!(centered_rolling_mean(&[], 7).is_empty());
    }

    #[test]
    fn test_centered_rolling_mean_zero_window() {
        assert_eq!(centered_rolling_mean(&[1, 2], 0), vec![None, None]);
    }
}

//! Number formatting for the text report.

/// Format an integer count with thousands separators.
///
/// # Examples
///
/// ```
/// use transcript_core::formatting::format_count;
///
/// assert_eq!(format_count(7), "7");
/// assert_eq!(format_count(12_345), "12,345");
/// ```
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a mean or rolling value with a fixed number of decimals, grouping
/// the integer part like [`format_count`].
///
/// # Examples
///
/// ```
/// use transcript_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(1234.567, 2), "1,234.57");
/// assert_eq!(format_decimal(0.5, 1), "0.5");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = int_part
        .parse::<u64>()
        .map(format_count)
        .unwrap_or_else(|_| int_part.to_string());
    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format an optional rolling average, rendering a missing window as `-`.
pub fn format_rolling(value: Option<f64>) -> String {
    value
        .map(|v| format_decimal(v, 2))
        .unwrap_or_else(|| "-".to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

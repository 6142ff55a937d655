//! Human-readable timestamp formatting and parsing.
//!
//! Timestamps at the UI boundary use `[HH:]MM:SS` with zero-padded
//! two-digit fields; the hours field is omitted under one hour. Engine time
//! is always plain seconds (`f64`), these helpers only convert at the edge.

/// Errors from parsing a `[HH:]MM:SS` timestamp or a `START-END` range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("empty timestamp")]
    Empty,

    #[error("invalid timestamp field: '{0}'")]
    InvalidField(String),

    #[error("too many ':' separated fields (expected at most 3)")]
    TooManyFields,

    #[error("expected START-END range, got '{0}'")]
    InvalidRange(String),
}

/// Format a time in seconds as `[HH:]MM:SS`.
///
/// Fractional seconds are floored. Hours are included only when the time
/// reaches a full hour, so `65.0` renders as `01:05` and `3661.0` as
/// `01:01:01`.
pub fn format_timestamp(total_seconds: f64) -> String {
    let total = if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Parse a `[HH:]MM:SS` timestamp into seconds.
///
/// Accepts one to three ':' separated fields (`SS`, `MM:SS` or `HH:MM:SS`),
/// each a non-negative integer. Fields are not range-checked, so `90:00`
/// parses as 5400 seconds.
pub fn parse_timestamp(input: &str) -> Result<f64, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let fields: Vec<&str> = trimmed.split(':').collect();
    if fields.len() > 3 {
        return Err(TimeParseError::TooManyFields);
    }

    let mut total = 0u64;
    for (i, field) in fields.iter().rev().enumerate() {
        let value: u64 = field
            .trim()
            .parse()
            .map_err(|_| TimeParseError::InvalidField(field.to_string()))?;
        total += value * 60u64.pow(i as u32);
    }

    Ok(total as f64)
}

/// Parse a `START-END` range of timestamps, e.g. `1:30-2:45`.
pub fn parse_range(input: &str) -> Result<(f64, f64), TimeParseError> {
    let (start, end) = input
        .split_once('-')
        .ok_or_else(|| TimeParseError::InvalidRange(input.to_string()))?;

    Ok((parse_timestamp(start)?, parse_timestamp(end)?))
}

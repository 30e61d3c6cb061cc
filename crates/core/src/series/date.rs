//! ISO 8601 calendar-date helpers

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("malformed date '{}': {}", s, e)))
}

/// Parse a start/end pair, failing when the end precedes the start.
pub fn parse_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if end < start {
        return Err(Error::InvalidInput(format!(
            "end date {} precedes start date {}",
            end, start
        )));
    }
    Ok((start, end))
}

/// Whole calendar days from `start` to `end` (negative if `end` is earlier).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

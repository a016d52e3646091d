//! Date-range query encoding.
//!
//! A range arrives as two calendar dates and two time-of-day strings, the way
//! date and time pickers hand them over, and leaves as the upstream query
//! string:
//!
//! ```text
//! startDateTime=2019-07-14T00:00:00.000&endDateTime=2019-07-15T00:00:00.000
//! ```
//!
//! Time inputs report midnight as `"00:00"` instead of `"00:00:00"`. That one
//! literal value is widened; every other time string is emitted verbatim.

use chrono::NaiveDate;

/// Midnight as the time input reports it.
const COLLAPSED_MIDNIGHT: &str = "00:00";
const MIDNIGHT: &str = "00:00:00";

/// A requested range. Ordering is not checked: an inverted or empty range is
/// sent as-is and the server decides what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// `HH:MM` or `HH:MM:SS`
    pub time_from: String,
    /// `HH:MM` or `HH:MM:SS`
    pub time_to: String,
}

impl TimeRange {
    #[must_use]
    pub fn new(
        date_from: NaiveDate,
        time_from: impl Into<String>,
        date_to: NaiveDate,
        time_to: impl Into<String>,
    ) -> Self {
        Self {
            date_from,
            date_to,
            time_from: time_from.into(),
            time_to: time_to.into(),
        }
    }

    /// The upstream query string for this range.
    #[must_use]
    pub fn to_query(&self) -> String {
        encode(self)
    }
}

/// Encode a range as `startDateTime=..&endDateTime=..`.
#[must_use]
pub fn encode(range: &TimeRange) -> String {
    format!(
        "startDateTime={}&endDateTime={}",
        date_time(range.date_from, &range.time_from),
        date_time(range.date_to, &range.time_to),
    )
}

fn date_time(date: NaiveDate, time: &str) -> String {
    format!("{}T{}.000", date.format("%Y-%m-%d"), normalize_time(time))
}

fn normalize_time(time: &str) -> &str {
    if time == COLLAPSED_MIDNIGHT {
        MIDNIGHT
    } else {
        time
    }
}

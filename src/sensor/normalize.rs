//! Raw upstream shapes to chart-ready records.
//!
//! Nothing here is re-sorted, rounded, or converted: timestamps are parsed,
//! door states are checked against their two allowed values, and the
//! open/closed summary becomes pie slices in whole minutes.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::SensorError;
use crate::sensor::models::{
    DurationSlice, DurationSummary, ProximityInterval, ProximityState, RawIntervalPoint,
    RawTemperaturePoint, SliceState, TemperatureSample,
};
use crate::theme;

/// How an open/closed summary is recognised as "nothing measured".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoDataRule {
    /// Both strings have a leading integer (the hour field) of exactly zero.
    /// `"00:45:00"` / `"00:00:00"` therefore counts as no data.
    #[default]
    LeadingHours,
    /// Both sides total zero minutes.
    TotalMinutes,
}

/// Map raw temperature points to samples, keeping server order.
///
/// # Errors
///
/// Returns `SensorError::ParseFailed` if a timestamp is not ISO-8601.
pub fn to_temperature_samples(
    raw: &[RawTemperaturePoint],
) -> Result<Vec<TemperatureSample>, SensorError> {
    raw.iter()
        .map(|point| {
            Ok(TemperatureSample {
                timestamp: parse_instant(&point.timestamp)?,
                temperature: point.temperature,
            })
        })
        .collect()
}

/// Map raw door-state intervals, rejecting unknown states.
///
/// # Errors
///
/// Returns `SensorError::DataContractViolation` for a state other than
/// `PRESENT`/`NOT_PRESENT`, and `SensorError::ParseFailed` for a bad timestamp.
pub fn to_proximity_intervals(
    raw: &[RawIntervalPoint],
) -> Result<Vec<ProximityInterval>, SensorError> {
    raw.iter()
        .map(|point| {
            let state = ProximityState::from_wire(&point.state).ok_or_else(|| {
                SensorError::DataContractViolation(format!(
                    "unknown door state {:?}",
                    point.state
                ))
            })?;
            Ok(ProximityInterval {
                start_date_time: parse_instant(&point.start_date_time)?,
                end_date_time: parse_instant(&point.end_date_time)?,
                state,
            })
        })
        .collect()
}

/// Pie slices for an open/closed summary under the default no-data rule.
///
/// # Errors
///
/// Returns `SensorError::ParseFailed` if either side is not `H:MM[:SS]`.
pub fn to_duration_slices(summary: &DurationSummary) -> Result<Vec<DurationSlice>, SensorError> {
    to_duration_slices_with(summary, NoDataRule::default())
}

/// Pie slices for an open/closed summary.
///
/// Returns an empty vector when the summary means "no data"; that emptiness is
/// what tells the renderer to show its placeholder, so it is never replaced by
/// two zero-sized slices.
///
/// # Errors
///
/// Returns `SensorError::ParseFailed` if either side is not `H:MM[:SS]`.
pub fn to_duration_slices_with(
    summary: &DurationSummary,
    rule: NoDataRule,
) -> Result<Vec<DurationSlice>, SensorError> {
    if rule == NoDataRule::LeadingHours
        && leading_int(&summary.open_time) == Some(0)
        && leading_int(&summary.closed_time) == Some(0)
    {
        return Ok(Vec::new());
    }

    let opened = minutes(&summary.open_time)?;
    let closed = minutes(&summary.closed_time)?;

    if rule == NoDataRule::TotalMinutes && opened == 0 && closed == 0 {
        return Ok(Vec::new());
    }

    let theme = theme::current();
    Ok(vec![
        DurationSlice {
            state: SliceState::Opened,
            amount: opened,
            color: theme.opened_color.clone(),
        },
        DurationSlice {
            state: SliceState::Closed,
            amount: closed,
            color: theme.closed_color.clone(),
        },
    ])
}

/// `H:MM` or `H:MM:SS` to whole minutes; seconds are dropped.
fn minutes(duration: &str) -> Result<i64, SensorError> {
    let mut fields = duration.split(':');
    let (Some(hours), Some(mins)) = (fields.next(), fields.next()) else {
        return Err(SensorError::ParseFailed(format!(
            "duration {duration:?} is not H:MM[:SS]"
        )));
    };
    let parse = |field: &str| {
        field.trim().parse::<i64>().map_err(|e| {
            SensorError::ParseFailed(format!("duration {duration:?}: {e}"))
        })
    };
    let (hours, mins) = (parse(hours)?, parse(mins)?);
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(mins))
        .ok_or_else(|| SensorError::ParseFailed(format!("duration {duration:?} out of range")))
}

/// Leading integer of a string: optional whitespace, optional sign, then digits
/// up to the first non-digit. `None` when there are no digits.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse an ISO-8601 instant. Values without an offset are taken as UTC.
fn parse_instant(s: &str) -> Result<DateTime<Utc>, SensorError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| SensorError::ParseFailed(format!("invalid timestamp {s:?}")))
}

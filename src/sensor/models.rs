use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response from `/rooms/{id}/temperatureData`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureResponse {
    pub data: Vec<RawTemperaturePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTemperaturePoint {
    /// ISO-8601, with or without an offset
    pub timestamp: String,
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// Response from `/rooms/{id}/doorStateData`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorStateResponse {
    pub data: Vec<RawIntervalPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIntervalPoint {
    pub start_date_time: String,
    pub end_date_time: String,
    /// Kept as text so an unknown value surfaces as a contract violation
    /// rather than a parse failure of the whole body.
    pub state: String,
}

/// Response from `/rooms/{id}/doorStateStatistic`
///
/// Both fields are `HH:MM:SS`; `"00:00:00"` on both sides means nothing was measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationSummary {
    pub open_time: String,
    pub closed_time: String,
}

/// Entry of the `/rooms` list: either a bare name or an `{id, name}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRoom {
    Name(String),
    Entry { id: RawRoomId, name: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRoomId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for RawRoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A temperature reading ready for the line chart.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TemperatureSample {
    pub timestamp: DateTime<Utc>,
    /// Degrees as reported, null for a gap
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProximityState {
    Present,
    NotPresent,
}

impl ProximityState {
    /// Parse the upstream wire value. Anything but the two exact names is rejected.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "PRESENT" => Some(Self::Present),
            "NOT_PRESENT" => Some(Self::NotPresent),
            _ => None,
        }
    }
}

/// A contiguous span in one door state, drawn as a band under the temperature curve.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProximityInterval {
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub state: ProximityState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum SliceState {
    Opened,
    Closed,
}

/// One slice of the open/closed pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DurationSlice {
    pub state: SliceState,
    /// Whole minutes
    pub amount: i64,
    pub color: String,
}

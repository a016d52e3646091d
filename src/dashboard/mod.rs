//! One room, one range: the three upstream queries, joined and normalized.

pub mod latest;

pub use latest::{LatestQuery, Superseded};

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::SensorError;
use crate::sensor::SensorQueryClient;
use crate::sensor::models::{DurationSlice, ProximityInterval, TemperatureSample};
use crate::sensor::normalize::{self, NoDataRule};
use crate::sensor::range::TimeRange;

/// Chart-ready data for a room over a range.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RoomDashboard {
    pub room_id: String,
    /// Query string sent upstream
    pub query: String,
    pub temperature: Vec<TemperatureSample>,
    pub proximity: Vec<ProximityInterval>,
    /// Empty when nothing was measured
    pub durations: Vec<DurationSlice>,
}

/// Issue the temperature, door-state and duration queries concurrently, then
/// normalize them. Any single failure fails the whole load.
///
/// # Errors
///
/// Returns the first `SensorError` from the three queries or from normalization.
pub async fn load(
    client: &SensorQueryClient,
    room_id: &str,
    range: &TimeRange,
    rule: NoDataRule,
) -> Result<RoomDashboard, SensorError> {
    let (temperature, intervals, summary) = futures::try_join!(
        client.fetch_temperature(room_id, range),
        client.fetch_door_state_intervals(room_id, range),
        client.fetch_door_state_duration(room_id, range),
    )?;

    let dashboard = RoomDashboard {
        room_id: room_id.to_string(),
        query: range.to_query(),
        temperature: normalize::to_temperature_samples(&temperature.data)?,
        proximity: normalize::to_proximity_intervals(&intervals.data)?,
        durations: normalize::to_duration_slices_with(&summary, rule)?,
    };

    tracing::debug!(
        room_id = %room_id,
        temperature_points = dashboard.temperature.len(),
        proximity_intervals = dashboard.proximity.len(),
        has_durations = !dashboard.durations.is_empty(),
        "Room dashboard loaded"
    );

    Ok(dashboard)
}

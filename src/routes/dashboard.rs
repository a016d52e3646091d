use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::HeaderMap,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::common::AppState;
use crate::dashboard::{self, RoomDashboard};
use crate::error::{AppError, AppResult};
use crate::sensor::TimeRange;

/// Requests carrying the same value cancel each other: only the newest one completes.
pub const SESSION_HEADER: &str = "x-dashboard-session";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct DashboardQuery {
    /// First day of the range (YYYY-MM-DD)
    pub date_from: NaiveDate,
    /// Start time of day (HH:MM or HH:MM:SS)
    pub time_from: String,
    /// Last day of the range (YYYY-MM-DD)
    pub date_to: NaiveDate,
    /// End time of day (HH:MM or HH:MM:SS)
    pub time_to: String,
}

impl From<DashboardQuery> for TimeRange {
    fn from(q: DashboardQuery) -> Self {
        Self::new(q.date_from, q.time_from, q.date_to, q.time_to)
    }
}

/// Get chart data for a room
///
/// Queries temperature, door-state intervals and the open/closed summary
/// concurrently and returns them normalized. `durations` is empty when the
/// room has no door data for the range.
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/dashboard",
    params(
        ("room_id" = String, Path, description = "Room identifier"),
        DashboardQuery,
        ("x-dashboard-session" = Option<String>, Header, description = "Newer requests with the same session abort older ones"),
    ),
    responses(
        (status = 200, description = "Chart data retrieved successfully", body = RoomDashboard),
        (status = 400, description = "Invalid range parameters"),
        (status = 409, description = "Superseded by a newer request in the same session"),
        (status = 502, description = "Sensor platform request failed"),
        (status = 504, description = "Sensor platform timed out"),
    ),
    tag = "dashboard"
)]
pub async fn get_room_dashboard(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> AppResult<Json<RoomDashboard>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let range = TimeRange::from(query);
    let rule = state.config.no_data_rule;

    let load = dashboard::load(&state.sensor_client, &room_id, &range, rule);

    let session = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty());

    let result = match session {
        Some(session_id) => {
            let latest = state.query_session(session_id).await;
            latest.run(load).await.map_err(|_| {
                tracing::debug!(session = %session_id, room_id = %room_id, "Range query superseded");
                AppError::Superseded
            })?
        }
        None => load.await,
    };

    Ok(Json(result?))
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::common::AppState;
use crate::error::AppResult;
use crate::rooms::{self, Room};

#[derive(Debug, Deserialize, IntoParams)]
pub struct RoomsQuery {
    /// Case-insensitive substring of the room name
    pub search: Option<String>,
    /// Drop the cached room list and fetch it again (default: false)
    #[serde(default)]
    pub refresh: bool,
}

/// List rooms
///
/// The room list is fetched from the sensor platform once and then served
/// from memory until `refresh=true` is passed.
#[utoipa::path(
    get,
    path = "/api/rooms",
    params(RoomsQuery),
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = Vec<Room>),
        (status = 502, description = "Sensor platform request failed"),
    ),
    tag = "rooms"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomsQuery>,
) -> AppResult<Json<Vec<Room>>> {
    let all = if query.refresh {
        state.rooms.refresh().await?
    } else {
        state.rooms.list().await?
    };

    let response = match query.search.as_deref() {
        Some(term) => rooms::search(term, &all),
        None => all.to_vec(),
    };

    Ok(Json(response))
}

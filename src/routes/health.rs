use axum::http::StatusCode;

/// Health check endpoint
///
/// Liveness only: returns 200 OK once the router is serving. The sensor
/// platform and the room list cache are not consulted, so an unreachable
/// upstream shows up on `/api/rooms` as 502/504, not here.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

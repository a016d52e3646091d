pub mod dashboard;
pub mod health;
pub mod rooms;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        rooms::list_rooms,
        dashboard::get_room_dashboard,
    ),
    components(
        schemas(
            crate::rooms::Room,
            crate::dashboard::RoomDashboard,
            crate::sensor::models::TemperatureSample,
            crate::sensor::models::ProximityInterval,
            crate::sensor::models::ProximityState,
            crate::sensor::models::DurationSlice,
            crate::sensor::models::SliceState,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rooms", description = "Room list and search"),
        (name = "dashboard", description = "Chart-ready sensor history for a room"),
    ),
    info(
        title = "Room Dashboard API",
        description = "Room temperature and door-state dashboard backend",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/rooms", get(rooms::list_rooms))
        .route("/rooms/{room_id}/dashboard", get(dashboard::get_room_dashboard))
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    // Health check routes
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let routes = Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(docs_routes);

    let base_path = state.config.base_path.clone();
    let routes = if base_path.is_empty() {
        routes
    } else {
        tracing::info!(base_path = %base_path, "Serving under base path");
        Router::new().nest(&base_path, routes)
    };

    routes
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

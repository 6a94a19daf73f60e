//! Route table.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health::greeting_handler))
        // Forecast charts, from the manifest
        .route(
            "/jma/weather-map/forecast/:file",
            get(handlers::forecast::forecast_handler),
        )
        .route(
            "/jma/weather-map/forecast/:area/:file",
            get(handlers::forecast::area_forecast_handler),
        )
        // Archived analysis charts
        .route(
            "/jma/weather-map/archives/:file",
            get(handlers::archive::archive_handler),
        )
        .route(
            "/jma/weather-map/archives/:area/:file",
            get(handlers::archive::area_archive_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        .fallback(handlers::health::unmatched_handler)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

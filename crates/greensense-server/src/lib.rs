#![forbid(unsafe_code)]
//! GreenSense metrics service.
//!
//! A stateless read-only HTTP/JSON surface: each request produces a fresh
//! [`greensense_model`] snapshot for the requested location via the
//! [`SnapshotSource`] seam. No cross-request memory, no caching, no rate
//! limiting; malformed input is silently defaulted and only undefined routes
//! produce an error response.

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use greensense_api::{
    ROUTE_AQI, ROUTE_CARBON, ROUTE_FORECAST, ROUTE_NDVI, ROUTE_RECOMMENDATIONS, ROUTE_STATUS,
    ROUTE_WATER,
};
use std::sync::Arc;

mod config;
mod http;
mod middleware;
mod source;

pub use config::ServerConfig;
pub use source::{
    FixedSource, RandomSource, SnapshotSource, FORECAST_MODEL, FORECAST_NOTES, MAIN_POLLUTANT,
    WATER_FORECAST_NOTE,
};

pub const CRATE_NAME: &str = "greensense-server";

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SnapshotSource>,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }
}

/// Each parameterized route is also registered bare so a missing path
/// segment falls back to the endpoint default instead of a 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_STATUS, get(http::handlers::status_handler))
        .route("/api/aqi", get(http::handlers::aqi_handler))
        .route(ROUTE_AQI, get(http::handlers::aqi_handler))
        .route("/api/carbon", get(http::handlers::carbon_handler))
        .route(ROUTE_CARBON, get(http::handlers::carbon_handler))
        .route("/api/water", get(http::handlers::water_handler))
        .route(ROUTE_WATER, get(http::handlers::water_handler))
        .route("/api/ndvi", get(http::handlers::ndvi_handler))
        .route(ROUTE_NDVI, get(http::handlers::ndvi_handler))
        .route("/api/forecast/pollution", get(http::handlers::forecast_handler))
        .route(ROUTE_FORECAST, get(http::handlers::forecast_handler))
        .route(
            ROUTE_RECOMMENDATIONS,
            get(http::handlers::recommendations_handler),
        )
        .fallback(http::handlers::not_found_handler)
        .layer(from_fn(middleware::request_log_middleware))
        .layer(from_fn(middleware::cors_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_shares_one_source() {
        let state = AppState::new(Arc::new(FixedSource::default()));
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.source, &cloned.source));
    }
}

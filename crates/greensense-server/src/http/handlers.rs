// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use greensense_api::{
    params, ApiError, RecommendationsResponse, DEFAULT_AQI_CITY, DEFAULT_CARBON_CITY,
    DEFAULT_FORECAST_CITY, DEFAULT_NDVI_AREA, DEFAULT_WATER_CITY,
};
use greensense_model::{recommendations_for_risk, AreaId, LocationKey, ServiceStatus};
use std::collections::HashMap;
use tracing::info;

pub(crate) const STATUS_MESSAGE: &str =
    "GreenSense Backend is operational and ready for environmental data.";

fn city_param(path: Option<Path<String>>, default: &'static str) -> LocationKey {
    LocationKey::or_default(path.as_ref().map(|Path(v)| v.as_str()), default)
}

pub(crate) async fn status_handler() -> impl IntoResponse {
    Json(ServiceStatus {
        backend_status: "ok".to_string(),
        server_time: Utc::now(),
        message: STATUS_MESSAGE.to_string(),
    })
}

pub(crate) async fn aqi_handler(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> impl IntoResponse {
    let city = city_param(path, DEFAULT_AQI_CITY);
    info!(route = "/api/aqi", city = %city, "snapshot request");
    Json(state.source.air_quality(&city))
}

pub(crate) async fn carbon_handler(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> impl IntoResponse {
    let city = city_param(path, DEFAULT_CARBON_CITY);
    info!(route = "/api/carbon", city = %city, "snapshot request");
    Json(state.source.carbon(&city))
}

pub(crate) async fn water_handler(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> impl IntoResponse {
    let city = city_param(path, DEFAULT_WATER_CITY);
    info!(route = "/api/water", city = %city, "snapshot request");
    Json(state.source.water(&city))
}

pub(crate) async fn ndvi_handler(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> impl IntoResponse {
    let area = AreaId::or_default(path.as_ref().map(|Path(v)| v.as_str()), DEFAULT_NDVI_AREA);
    info!(route = "/api/ndvi", area = %area, "snapshot request");
    Json(state.source.vegetation(&area))
}

pub(crate) async fn forecast_handler(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> impl IntoResponse {
    let city = city_param(path, DEFAULT_FORECAST_CITY);
    info!(route = "/api/forecast/pollution", city = %city, "forecast request");
    Json(state.source.pollution_forecast(&city))
}

pub(crate) async fn recommendations_handler(
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let risk = params::risk_or_default(query.get("risk").map(String::as_str));
    info!(route = "/api/recommendations", risk, "recommendations request");
    Json(RecommendationsResponse {
        recommendations: recommendations_for_risk(risk),
    })
}

pub(crate) async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiError::not_found()))
}

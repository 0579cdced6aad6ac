#![forbid(unsafe_code)]
//! The HTTP contract between the metrics service and its consumers: route
//! paths, per-endpoint fallback defaults, the uniform not-found shape, and
//! query parameter handling. The service is designed to never error on bad
//! input — every parse failure substitutes a documented default instead.

use greensense_model::RecommendationItem;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const CRATE_NAME: &str = "greensense-api";

pub const ROUTE_STATUS: &str = "/api/status";
pub const ROUTE_AQI: &str = "/api/aqi/:city";
pub const ROUTE_CARBON: &str = "/api/carbon/:city";
pub const ROUTE_WATER: &str = "/api/water/:city";
pub const ROUTE_NDVI: &str = "/api/ndvi/:area_id";
pub const ROUTE_FORECAST: &str = "/api/forecast/pollution/:city";
pub const ROUTE_RECOMMENDATIONS: &str = "/api/recommendations";

/// Fallback location substituted when an AQI request omits or blanks its city.
pub const DEFAULT_AQI_CITY: &str = "Default Location";
pub const DEFAULT_CARBON_CITY: &str = "Global Average";
pub const DEFAULT_WATER_CITY: &str = "Region X";
pub const DEFAULT_NDVI_AREA: &str = "Forest-1A";
pub const DEFAULT_FORECAST_CITY: &str = "Mumbai";
pub const DEFAULT_RISK_SCORE: f64 = 0.8;

/// Uniform error shape returned for any undefined route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            error: "Not Found".to_string(),
            message: "The requested resource was not found. Please check API documentation."
                .to_string(),
        }
    }
}

/// Wire envelope for the recommendations endpoint; items travel wrapped, not
/// as a bare array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationItem>,
}

pub mod params {
    use super::DEFAULT_RISK_SCORE;

    /// Risk score parsing never fails: a missing or unparseable value falls
    /// back to the documented default. Blank path segments are handled the
    /// same way by `LocationKey::or_default` in the model crate.
    #[must_use]
    pub fn risk_or_default(raw: Option<&str>) -> f64 {
        raw.and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(DEFAULT_RISK_SCORE)
    }
}

/// Machine-readable description of the service surface, in the spirit of an
/// OpenAPI sketch: GET only, no auth, no versioning.
#[must_use]
pub fn api_surface() -> Value {
    json!({
        "title": "GreenSense API",
        "transport": "HTTP/JSON, GET only",
        "endpoints": [
            {"path": "/api/status", "params": []},
            {"path": "/api/aqi/{city}", "params": ["city"], "default": DEFAULT_AQI_CITY},
            {"path": "/api/carbon/{city}", "params": ["city"], "default": DEFAULT_CARBON_CITY},
            {"path": "/api/water/{city}", "params": ["city"], "default": DEFAULT_WATER_CITY},
            {"path": "/api/ndvi/{areaId}", "params": ["areaId"], "default": DEFAULT_NDVI_AREA},
            {"path": "/api/forecast/pollution/{city}", "params": ["city"], "default": DEFAULT_FORECAST_CITY},
            {"path": "/api/recommendations", "params": ["risk"], "default": DEFAULT_RISK_SCORE}
        ],
        "error_shape": {"error": "Not Found", "message": "..."}
    })
}

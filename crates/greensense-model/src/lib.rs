#![forbid(unsafe_code)]
//! GreenSense model SSOT.
//!
//! Every record that crosses the wire between the metrics service and the
//! dashboard aggregator is defined here, together with the pure derivation
//! rules for label fields (severity ladders, vegetation status, impact
//! selection). Snapshot *production* lives behind the service's source trait;
//! this crate only knows shapes and rules.

mod location;
mod recommendation;
mod serde_helpers;
mod snapshot;
mod view_model;

pub use location::{AreaId, LocationKey, ValidationError, LOCATION_MAX_LEN};
pub use recommendation::{recommendations_for_risk, ImpactLevel, RecommendationItem, HIGH_RISK_THRESHOLD};
pub use snapshot::{
    AirQualitySnapshot, AqiLevel, CarbonSnapshot, ForecastSnapshot, RiskLevel, SectorShare,
    ServiceStatus, VegetationSnapshot, VegetationStatus, WaterSnapshot, AQI_SCORE_MAX,
    AQI_SCORE_MIN, NDVI_SPARSE_THRESHOLD, PINNED_UNHEALTHY_CITY,
};
pub use view_model::{DashboardViewModel, MetricField};

pub const CRATE_NAME: &str = "greensense-model";

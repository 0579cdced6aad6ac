#![forbid(unsafe_code)]
//! GreenSense dashboard aggregator.
//!
//! Owns the single active location and, on every accepted refresh, fans out
//! one concurrent request per metric endpoint, converts each failure into an
//! unavailable slot, and publishes the merged view model once every fetch has
//! settled. Rendering layers observe the view through a read-only watch
//! subscription; `refresh` is the only write path.

mod aggregator;
mod client;
mod display;

pub use aggregator::{Dashboard, DashboardConfig, RefreshOutcome, DEFAULT_OBSERVATION_AREA};
pub use client::{ClientError, HttpMetricsApi, MetricsApi};
pub use display::{stress_is_critical, AqiColorBand, WATER_STRESS_CRITICAL};

pub const CRATE_NAME: &str = "greensense-dashboard";

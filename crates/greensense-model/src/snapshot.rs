// SPDX-License-Identifier: Apache-2.0

use crate::location::{AreaId, LocationKey};
use crate::serde_helpers;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const AQI_SCORE_MIN: u16 = 10;
pub const AQI_SCORE_MAX: u16 = 209;

/// Vegetation below this index reads as sparse/stressed; exactly at the
/// threshold still counts as healthy.
pub const NDVI_SPARSE_THRESHOLD: f64 = 0.4;

/// The one city the upstream data provider pins to an `Unhealthy` air
/// quality reading regardless of the sampled score.
pub const PINNED_UNHEALTHY_CITY: &str = "Mumbai";

/// Air quality severity ladder. Wire values are the display strings the
/// dashboard shows verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
}

impl AqiLevel {
    /// Provider-side rule: one city is pinned, everything else
    /// reports `Moderate`.
    #[must_use]
    pub fn for_city(city: &LocationKey) -> Self {
        if city.as_str() == PINNED_UNHEALTHY_CITY {
            Self::Unhealthy
        } else {
            Self::Moderate
        }
    }

    /// Threshold ladder over the numeric score, used on the rendering side.
    #[must_use]
    pub fn from_score(score: u16) -> Self {
        match score {
            0..=49 => Self::Good,
            50..=99 => Self::Moderate,
            100..=149 => Self::UnhealthyForSensitiveGroups,
            150..=199 => Self::Unhealthy,
            _ => Self::VeryUnhealthy,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
        }
    }
}

impl Display for AqiLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VegetationStatus {
    #[serde(rename = "Healthy Vegetation")]
    Healthy,
    #[serde(rename = "Sparse/Stressed Vegetation")]
    Sparse,
}

impl VegetationStatus {
    #[must_use]
    pub fn from_index(ndvi: f64) -> Self {
        if ndvi < NDVI_SPARSE_THRESHOLD {
            Self::Sparse
        } else {
            Self::Healthy
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy Vegetation",
            Self::Sparse => "Sparse/Stressed Vegetation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One air quality reading for one location at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AirQualitySnapshot {
    pub city: LocationKey,
    pub aqi: u16,
    pub main_pollutant: String,
    pub level: AqiLevel,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectorShare {
    pub sector: String,
    pub percentage: u8,
}

/// Annual carbon emissions with a rough sector breakdown. Percentages are
/// independently perturbed and only sum near 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CarbonSnapshot {
    pub city: LocationKey,
    pub total_annual_emissions: f64,
    pub industry_breakdown: Vec<SectorShare>,
}

impl CarbonSnapshot {
    #[must_use]
    pub fn breakdown_total(&self) -> u32 {
        self.industry_breakdown
            .iter()
            .map(|s| u32::from(s.percentage))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WaterSnapshot {
    pub city: LocationKey,
    pub total_consumption_liters: f64,
    /// 1.0 (low) to 5.0 (extremely high), one decimal.
    pub stress_index: f64,
    pub forecast: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VegetationSnapshot {
    pub area_id: AreaId,
    pub ndvi: f64,
    pub status: VegetationStatus,
    pub last_updated: DateTime<Utc>,
    pub image_url: String,
    #[serde(with = "serde_helpers::percent_string")]
    pub vegetation_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForecastSnapshot {
    pub city: LocationKey,
    pub model: String,
    pub forecast_date: NaiveDate,
    pub aqi_prediction: u16,
    pub risk: RiskLevel,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceStatus {
    pub backend_status: String,
    pub server_time: DateTime<Utc>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_city_always_reads_unhealthy() {
        let mumbai = LocationKey::parse(PINNED_UNHEALTHY_CITY).expect("key");
        assert_eq!(AqiLevel::for_city(&mumbai), AqiLevel::Unhealthy);

        let paris = LocationKey::parse("Paris").expect("key");
        assert_eq!(AqiLevel::for_city(&paris), AqiLevel::Moderate);
    }

    #[test]
    fn score_ladder_band_edges() {
        assert_eq!(AqiLevel::from_score(0), AqiLevel::Good);
        assert_eq!(AqiLevel::from_score(49), AqiLevel::Good);
        assert_eq!(AqiLevel::from_score(50), AqiLevel::Moderate);
        assert_eq!(AqiLevel::from_score(99), AqiLevel::Moderate);
        assert_eq!(
            AqiLevel::from_score(100),
            AqiLevel::UnhealthyForSensitiveGroups
        );
        assert_eq!(AqiLevel::from_score(150), AqiLevel::Unhealthy);
        assert_eq!(AqiLevel::from_score(200), AqiLevel::VeryUnhealthy);
    }

    #[test]
    fn vegetation_status_boundary_at_threshold() {
        assert_eq!(
            VegetationStatus::from_index(NDVI_SPARSE_THRESHOLD),
            VegetationStatus::Healthy
        );
        assert_eq!(
            VegetationStatus::from_index(0.399),
            VegetationStatus::Sparse
        );
        assert_eq!(VegetationStatus::from_index(0.8), VegetationStatus::Healthy);
    }

    #[test]
    fn aqi_level_wire_strings_match_display_set() {
        for (level, expected) in [
            (AqiLevel::Good, "\"Good\""),
            (AqiLevel::Moderate, "\"Moderate\""),
            (
                AqiLevel::UnhealthyForSensitiveGroups,
                "\"Unhealthy for Sensitive Groups\"",
            ),
            (AqiLevel::Unhealthy, "\"Unhealthy\""),
            (AqiLevel::VeryUnhealthy, "\"Very Unhealthy\""),
        ] {
            assert_eq!(serde_json::to_string(&level).expect("serialize"), expected);
        }
    }

    #[test]
    fn snapshot_wire_fields_are_camel_case() {
        let snapshot = AirQualitySnapshot {
            city: LocationKey::parse("Paris").expect("key"),
            aqi: 42,
            main_pollutant: "PM2.5".to_string(),
            level: AqiLevel::Moderate,
            date: Utc::now(),
        };
        let value = serde_json::to_value(&snapshot).expect("serialize");
        assert!(value.get("mainPollutant").is_some());
        assert!(value.get("main_pollutant").is_none());
    }
}

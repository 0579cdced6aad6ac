// SPDX-License-Identifier: Apache-2.0

use chrono::{Duration, Utc};
use greensense_model::{
    AirQualitySnapshot, AqiLevel, AreaId, CarbonSnapshot, ForecastSnapshot, LocationKey,
    RiskLevel, SectorShare, VegetationSnapshot, VegetationStatus, WaterSnapshot, AQI_SCORE_MAX,
    AQI_SCORE_MIN,
};
use rand::Rng;

pub const MAIN_POLLUTANT: &str = "PM2.5";
pub const FORECAST_MODEL: &str = "ARIMA/LSTM (Mock)";
pub const WATER_FORECAST_NOTE: &str = "Drought risk increasing by 10% in the next quarter.";
pub const FORECAST_NOTES: &str =
    "AQI is expected to peak on Friday due to anticipated low wind speed and temperature inversion.";

/// Produces one snapshot per metric kind for a location, synchronously and
/// without external I/O. The aggregation layer only depends on the shapes, so
/// this seam is where a real data pipeline would plug in later.
pub trait SnapshotSource: Send + Sync + 'static {
    fn air_quality(&self, city: &LocationKey) -> AirQualitySnapshot;
    fn carbon(&self, city: &LocationKey) -> CarbonSnapshot;
    fn water(&self, city: &LocationKey) -> WaterSnapshot;
    fn vegetation(&self, area: &AreaId) -> VegetationSnapshot;
    fn pollution_forecast(&self, city: &LocationKey) -> ForecastSnapshot;
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

fn ndvi_image_url(area: &AreaId) -> String {
    format!(
        "https://placehold.co/600x400/228B22/FFFFFF?text=NDVI+Map+Area+{}",
        area.as_str()
    )
}

/// Simulated upstream provider: every call samples fresh values, so repeated
/// requests for the same key do not agree with each other.
#[derive(Debug, Default, Clone)]
pub struct RandomSource;

impl SnapshotSource for RandomSource {
    fn air_quality(&self, city: &LocationKey) -> AirQualitySnapshot {
        let mut rng = rand::thread_rng();
        AirQualitySnapshot {
            city: city.clone(),
            aqi: rng.gen_range(AQI_SCORE_MIN..=AQI_SCORE_MAX),
            main_pollutant: MAIN_POLLUTANT.to_string(),
            level: AqiLevel::for_city(city),
            date: Utc::now(),
        }
    }

    fn carbon(&self, city: &LocationKey) -> CarbonSnapshot {
        let mut rng = rand::thread_rng();
        CarbonSnapshot {
            city: city.clone(),
            total_annual_emissions: round_to(rng.gen_range(0.0..50_000_000.0), 2),
            industry_breakdown: vec![
                SectorShare {
                    sector: "Energy".to_string(),
                    percentage: 45 + rng.gen_range(0..10),
                },
                SectorShare {
                    sector: "Transportation".to_string(),
                    percentage: 25 + rng.gen_range(0..5),
                },
                SectorShare {
                    sector: "Industry".to_string(),
                    percentage: 15 + rng.gen_range(0..5),
                },
                SectorShare {
                    sector: "Residential/Commercial".to_string(),
                    percentage: 15 - rng.gen_range(0..5),
                },
            ],
        }
    }

    fn water(&self, city: &LocationKey) -> WaterSnapshot {
        let mut rng = rand::thread_rng();
        WaterSnapshot {
            city: city.clone(),
            total_consumption_liters: rng.gen_range(0.0f64..1_000_000_000.0).round(),
            stress_index: round_to(rng.gen_range(1.0..5.0), 1),
            forecast: WATER_FORECAST_NOTE.to_string(),
        }
    }

    fn vegetation(&self, area: &AreaId) -> VegetationSnapshot {
        let mut rng = rand::thread_rng();
        let ndvi = round_to(rng.gen_range(0.3..0.8), 3);
        VegetationSnapshot {
            area_id: area.clone(),
            ndvi,
            status: VegetationStatus::from_index(ndvi),
            last_updated: Utc::now(),
            image_url: ndvi_image_url(area),
            vegetation_change: round_to(rng.gen_range(-1.0..1.0), 2),
        }
    }

    fn pollution_forecast(&self, city: &LocationKey) -> ForecastSnapshot {
        let mut rng = rand::thread_rng();
        ForecastSnapshot {
            city: city.clone(),
            model: FORECAST_MODEL.to_string(),
            forecast_date: (Utc::now() + Duration::days(7)).date_naive(),
            aqi_prediction: rng.gen_range(50..200),
            risk: RiskLevel::Medium,
            notes: FORECAST_NOTES.to_string(),
        }
    }
}

/// Deterministic source for tests: pins every sampled value so label
/// derivation rules can be asserted exactly.
#[derive(Debug, Clone)]
pub struct FixedSource {
    pub aqi_score: u16,
    pub total_emissions: f64,
    pub breakdown: [u8; 4],
    pub consumption_liters: f64,
    pub stress_index: f64,
    pub ndvi: f64,
    pub vegetation_change: f64,
    pub aqi_prediction: u16,
}

impl Default for FixedSource {
    fn default() -> Self {
        Self {
            aqi_score: 95,
            total_emissions: 12_500_000.0,
            breakdown: [48, 27, 17, 12],
            consumption_liters: 500_000_000.0,
            stress_index: 2.5,
            ndvi: 0.55,
            vegetation_change: 0.13,
            aqi_prediction: 120,
        }
    }
}

impl SnapshotSource for FixedSource {
    fn air_quality(&self, city: &LocationKey) -> AirQualitySnapshot {
        AirQualitySnapshot {
            city: city.clone(),
            aqi: self.aqi_score,
            main_pollutant: MAIN_POLLUTANT.to_string(),
            level: AqiLevel::for_city(city),
            date: Utc::now(),
        }
    }

    fn carbon(&self, city: &LocationKey) -> CarbonSnapshot {
        let sectors = ["Energy", "Transportation", "Industry", "Residential/Commercial"];
        CarbonSnapshot {
            city: city.clone(),
            total_annual_emissions: self.total_emissions,
            industry_breakdown: sectors
                .iter()
                .zip(self.breakdown)
                .map(|(sector, percentage)| SectorShare {
                    sector: (*sector).to_string(),
                    percentage,
                })
                .collect(),
        }
    }

    fn water(&self, city: &LocationKey) -> WaterSnapshot {
        WaterSnapshot {
            city: city.clone(),
            total_consumption_liters: self.consumption_liters,
            stress_index: self.stress_index,
            forecast: WATER_FORECAST_NOTE.to_string(),
        }
    }

    fn vegetation(&self, area: &AreaId) -> VegetationSnapshot {
        VegetationSnapshot {
            area_id: area.clone(),
            ndvi: self.ndvi,
            status: VegetationStatus::from_index(self.ndvi),
            last_updated: Utc::now(),
            image_url: ndvi_image_url(area),
            vegetation_change: self.vegetation_change,
        }
    }

    fn pollution_forecast(&self, city: &LocationKey) -> ForecastSnapshot {
        ForecastSnapshot {
            city: city.clone(),
            model: FORECAST_MODEL.to_string(),
            forecast_date: (Utc::now() + Duration::days(7)).date_naive(),
            aqi_prediction: self.aqi_prediction,
            risk: RiskLevel::Medium,
            notes: FORECAST_NOTES.to_string(),
        }
    }
}

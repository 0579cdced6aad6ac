use crate::location::LocationKey;
use crate::recommendation::RecommendationItem;
use crate::snapshot::{
    AirQualitySnapshot, CarbonSnapshot, ForecastSnapshot, VegetationSnapshot, WaterSnapshot,
};
use serde::Serialize;

/// Availability marker for one metric slot in a refresh cycle. A failed fetch
/// leaves the slot `Unavailable` for that cycle; there is no retry and no
/// distinction between transient and permanent failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricField<T> {
    Available(T),
    Unavailable,
}

impl<T> MetricField<T> {
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    #[must_use]
    pub fn as_available(&self) -> Option<&T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable => None,
        }
    }

    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Available(value),
            Err(_) => Self::Unavailable,
        }
    }
}

/// The merged dashboard view for one active location.
///
/// Rebuilt wholesale on every refresh; all populated snapshots were requested
/// under the same `location` but timestamp themselves independently, so the
/// view is consistent per location, not per instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewModel {
    pub location: Option<LocationKey>,
    pub generation: u64,
    pub air_quality: MetricField<AirQualitySnapshot>,
    pub carbon: MetricField<CarbonSnapshot>,
    pub water: MetricField<WaterSnapshot>,
    pub vegetation: MetricField<VegetationSnapshot>,
    pub forecast: MetricField<ForecastSnapshot>,
    pub recommendations: Vec<RecommendationItem>,
}

impl DashboardViewModel {
    /// The view before any refresh has settled: no location, every slot empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            location: None,
            generation: 0,
            air_quality: MetricField::Unavailable,
            carbon: MetricField::Unavailable,
            water: MetricField::Unavailable,
            vegetation: MetricField::Unavailable,
            forecast: MetricField::Unavailable,
            recommendations: Vec::new(),
        }
    }

    #[must_use]
    pub fn available_count(&self) -> usize {
        usize::from(self.air_quality.is_available())
            + usize::from(self.carbon.is_available())
            + usize::from(self.water.is_available())
            + usize::from(self.vegetation.is_available())
            + usize::from(self.forecast.is_available())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_has_no_available_slots() {
        let view = DashboardViewModel::empty();
        assert_eq!(view.available_count(), 0);
        assert!(view.location.is_none());
        assert!(view.recommendations.is_empty());
    }

    #[test]
    fn unavailable_serializes_as_null() {
        let field: MetricField<u32> = MetricField::Unavailable;
        assert_eq!(serde_json::to_value(&field).expect("serialize"), serde_json::Value::Null);

        let field = MetricField::Available(7_u32);
        assert_eq!(
            serde_json::to_value(&field).expect("serialize"),
            serde_json::json!(7)
        );
    }

    #[test]
    fn from_result_maps_errors_to_unavailable() {
        let ok: Result<u8, &str> = Ok(1);
        let err: Result<u8, &str> = Err("unreachable host");
        assert!(MetricField::from_result(ok).is_available());
        assert!(!MetricField::from_result(err).is_available());
    }
}

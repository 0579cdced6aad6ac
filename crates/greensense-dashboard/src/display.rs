use greensense_model::AqiLevel;

/// Stress index readings above this render as critical.
pub const WATER_STRESS_CRITICAL: f64 = 3.5;

#[must_use]
pub fn stress_is_critical(stress_index: f64) -> bool {
    stress_index > WATER_STRESS_CRITICAL
}

/// Color band backing the AQI card accent. The band follows the same score
/// ladder as [`AqiLevel::from_score`], collapsed to four colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiColorBand {
    Green,
    Yellow,
    Orange,
    Red,
}

impl AqiColorBand {
    #[must_use]
    pub fn from_score(score: u16) -> Self {
        match AqiLevel::from_score(score) {
            AqiLevel::Good => Self::Green,
            AqiLevel::Moderate => Self::Yellow,
            AqiLevel::UnhealthyForSensitiveGroups => Self::Orange,
            AqiLevel::Unhealthy | AqiLevel::VeryUnhealthy => Self::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_band_follows_the_score_ladder() {
        assert_eq!(AqiColorBand::from_score(10), AqiColorBand::Green);
        assert_eq!(AqiColorBand::from_score(75), AqiColorBand::Yellow);
        assert_eq!(AqiColorBand::from_score(120), AqiColorBand::Orange);
        assert_eq!(AqiColorBand::from_score(180), AqiColorBand::Red);
        assert_eq!(AqiColorBand::from_score(250), AqiColorBand::Red);
    }

    #[test]
    fn stress_threshold_is_exclusive() {
        assert!(!stress_is_critical(WATER_STRESS_CRITICAL));
        assert!(stress_is_critical(WATER_STRESS_CRITICAL + 0.1));
    }
}

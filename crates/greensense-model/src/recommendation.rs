// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Risk scores strictly above this pick the high-risk recommendation list.
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Immediate,
}

impl ImpactLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Immediate => "Immediate",
        }
    }
}

impl Display for ImpactLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationItem {
    pub id: u32,
    pub title: String,
    pub impact: ImpactLevel,
    pub detail: String,
}

impl RecommendationItem {
    fn new(id: u32, title: &str, impact: ImpactLevel, detail: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            impact,
            detail: detail.to_string(),
        }
    }
}

/// Exactly one of two fixed lists, selected by a single threshold comparison.
/// Scores at or below the threshold get the single low-risk item.
#[must_use]
pub fn recommendations_for_risk(risk_score: f64) -> Vec<RecommendationItem> {
    if risk_score > HIGH_RISK_THRESHOLD {
        vec![
            RecommendationItem::new(
                1,
                "Reduce Meat Consumption",
                ImpactLevel::High,
                "Switching to plant-based meals 3 times a week can save up to 1 ton of CO2 annually.",
            ),
            RecommendationItem::new(
                2,
                "Public Transport Challenge",
                ImpactLevel::Medium,
                "Use public transportation or cycle for 50% of your commute this month.",
            ),
            RecommendationItem::new(
                3,
                "Check for Water Leaks",
                ImpactLevel::Immediate,
                "A single leaky faucet can waste hundreds of liters a month. Fix it now!",
            ),
        ]
    } else {
        vec![RecommendationItem::new(
            4,
            "Optimize Home Energy",
            ImpactLevel::Low,
            "Switch all bulbs to LED and unplug idle devices (vampire power).",
        )]
    }
}

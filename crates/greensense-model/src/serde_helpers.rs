// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serializer};

/// Year-over-year vegetation change travels as a percent string with a
/// trailing `%` (`"0.42%"`), two decimal places.
pub mod percent_string {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{value:.2}%"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom("percent string must be a number with optional % suffix"))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::percent_string")]
        change: f64,
    }

    #[test]
    fn percent_string_round_trip() {
        let json = serde_json::to_string(&Wrapper { change: -0.5 }).expect("serialize");
        assert_eq!(json, r#"{"change":"-0.50%"}"#);
        let back: Wrapper = serde_json::from_str(&json).expect("deserialize");
        assert!((back.change - -0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_string_accepts_bare_number() {
        let back: Wrapper = serde_json::from_str(r#"{"change":"0.13"}"#).expect("deserialize");
        assert!((back.change - 0.13).abs() < f64::EPSILON);
    }
}

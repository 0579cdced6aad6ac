use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const LOCATION_MAX_LEN: usize = 128;

/// Free-text city or region identifier scoping a metrics query.
///
/// Keys are trimmed on parse and rejected only when nothing remains; the
/// metrics service itself never validates them beyond that, it substitutes a
/// per-endpoint default instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("location must not be empty".to_string()));
        }
        if s.len() > LOCATION_MAX_LEN {
            return Err(ValidationError(format!(
                "location exceeds max length {LOCATION_MAX_LEN}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Service-side constructor: a blank or absent segment silently
    /// substitutes `default` instead of erroring. `default` must be a
    /// non-blank literal.
    #[must_use]
    pub fn or_default(raw: Option<&str>, default: &'static str) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Self(s.to_string()),
            _ => Self(default.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for LocationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Area identifier for vegetation-index queries, same trimming rule as
/// [`LocationKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AreaId(String);

impl AreaId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError("area id must not be empty".to_string()));
        }
        if s.len() > LOCATION_MAX_LEN {
            return Err(ValidationError(format!(
                "area id exceeds max length {LOCATION_MAX_LEN}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Same silent defaulting rule as [`LocationKey::or_default`].
    #[must_use]
    pub fn or_default(raw: Option<&str>, default: &'static str) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Self(s.to_string()),
            _ => Self(default.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AreaId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

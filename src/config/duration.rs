//! Age window parsing
//!
//! Accepts plain seconds (`3600`) or a number with a unit suffix:
//! `s` seconds, `m` minutes, `h` hours, `d` days, `w` weeks.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AssetError, AssetResult};

/// Parse a duration string with optional unit suffix
pub fn parse_duration(input: &str) -> AssetResult<Duration> {
    let trimmed = input.trim();
    let invalid = || AssetError::InvalidDuration {
        input: input.to_string(),
    };

    let (num_str, unit) = match trimmed.find(|c: char| c.is_alphabetic()) {
        Some(pos) => {
            let (num, unit) = trimmed.split_at(pos);
            (num.trim(), unit.to_lowercase())
        }
        None => (trimmed, String::new()),
    };

    let value: u64 = num_str.parse().map_err(|_| invalid())?;
    let multiplier = match unit.as_str() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        _ => return Err(invalid()),
    };

    value
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(invalid)
}

/// Configured age window; TOML accepts an integer (seconds) or a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxAge(pub Duration);

impl MaxAge {
    pub fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for MaxAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0.as_secs())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaxAgeDe {
    Seconds(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for MaxAge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match MaxAgeDe::deserialize(deserializer)? {
            MaxAgeDe::Seconds(secs) => Ok(MaxAge::from_secs(secs)),
            MaxAgeDe::Text(text) => parse_duration(&text)
                .map(MaxAge)
                .map_err(serde::de::Error::custom),
        }
    }
}

impl Serialize for MaxAge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0.as_secs())
    }
}

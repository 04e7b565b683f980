//! Shared value types

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A value computed at -delta, base and +delta of one input variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub low: f64,
    pub base: f64,
    pub high: f64,
}

impl SensitivityRow {
    pub fn from_fn(deltas: [f64; 3], mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            low: f(deltas[0]),
            base: f(deltas[1]),
            high: f(deltas[2]),
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.low, self.base, self.high]
    }
}

/// Lenient numeric parse: empty, invalid or non-finite input becomes zero
pub fn parse_number_or_zero(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Serde field helper with the same leniency as form input: numbers pass through,
/// strings go through [`parse_number_or_zero`], anything else becomes zero
pub fn deserialize_number_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(v) if v.is_finite() => v,
        Raw::Number(_) | Raw::Other(_) => 0.0,
        Raw::Text(raw) => parse_number_or_zero(&raw),
    })
}

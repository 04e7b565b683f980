//! Post-occupancy evaluation inputs

use ecometric_types::deserialize_number_or_zero;
use serde::{Deserialize, Serialize};

/// Occupant survey scores (0-5) and metered energy figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoeInputs {
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub comfort_score: f64,
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub air_quality_score: f64,
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub acoustic_score: f64,
    /// Design-phase consumption (kWh/m²)
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub projected_consumption: f64,
    /// Sensor or billing consumption (kWh/m²)
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub real_consumption: f64,
    /// Yearly maintenance budget
    #[serde(deserialize_with = "deserialize_number_or_zero")]
    pub projected_maintenance: f64,
}

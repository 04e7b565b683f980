//! Post-occupancy evaluation (POE) and predictive maintenance alerts

use serde::{Deserialize, Serialize};

use crate::model::{MaterialCatalog, PoeInputs};

/// Deviation above which overconsumption is flagged as high (%)
pub const HIGH_DEVIATION_PERCENT: f64 = 10.0;
/// Years before replacement when capital planning should start
pub const CAPEX_LEAD_YEARS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyStatus {
    Validated,
    Slight,
    High,
}

impl EnergyStatus {
    pub fn recommendation(&self) -> &'static str {
        match self {
            EnergyStatus::Validated => "Performance validated.",
            EnergyStatus::Slight => "Slight overconsumption. Investigate.",
            EnergyStatus::High => "High overconsumption. Calibrate BMS.",
        }
    }
}

/// Component nearest to the end of its service life
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceAlert {
    pub material: String,
    pub replacement_year: i32,
    pub planning_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoeResult {
    /// Mean of the three comfort scores (0-5)
    pub poe_score: f64,
    pub deviation_percent: f64,
    pub energy_status: EnergyStatus,
    pub alert: Option<MaintenanceAlert>,
}

pub fn evaluate_poe(inputs: &PoeInputs, materials: &MaterialCatalog, current_year: i32) -> PoeResult {
    let poe_score = (inputs.comfort_score + inputs.air_quality_score + inputs.acoustic_score) / 3.0;

    let deviation_percent = if inputs.projected_consumption > 0.0 {
        (inputs.real_consumption - inputs.projected_consumption) / inputs.projected_consumption * 100.0
    } else {
        0.0
    };
    let energy_status = if deviation_percent > HIGH_DEVIATION_PERCENT {
        EnergyStatus::High
    } else if deviation_percent > 0.0 {
        EnergyStatus::Slight
    } else {
        EnergyStatus::Validated
    };

    let alert = materials.earliest_replacement().map(|m| {
        let replacement_year = current_year + m.useful_life as i32;
        MaintenanceAlert {
            material: m.name.clone(),
            replacement_year,
            planning_year: replacement_year - CAPEX_LEAD_YEARS,
        }
    });

    PoeResult {
        poe_score,
        deviation_percent,
        energy_status,
        alert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LccaMaterial;

    fn material(id: &str, life: u32) -> LccaMaterial {
        LccaMaterial {
            id: id.to_string(),
            name: id.to_uppercase(),
            unit: "m²".to_string(),
            initial_cost: 1.0,
            annual_maintenance_cost: 0.0,
            useful_life: life,
            replacement_cost_factor: 1.0,
            annual_energy_saving: 0.0,
        }
    }

    fn inputs(real: f64) -> PoeInputs {
        PoeInputs {
            comfort_score: 4.0,
            air_quality_score: 3.5,
            acoustic_score: 4.5,
            projected_consumption: 100.0,
            real_consumption: real,
            projected_maintenance: 12000.0,
        }
    }

    #[test]
    fn test_poe_score_is_mean() {
        let result = evaluate_poe(&inputs(100.0), &MaterialCatalog::default(), 2025);
        assert!((result.poe_score - 4.0).abs() < 1e-9);
        assert!(result.alert.is_none());
    }

    #[test]
    fn test_deviation_bands() {
        let catalog = MaterialCatalog::default();
        assert_eq!(evaluate_poe(&inputs(95.0), &catalog, 2025).energy_status, EnergyStatus::Validated);
        assert_eq!(evaluate_poe(&inputs(105.0), &catalog, 2025).energy_status, EnergyStatus::Slight);
        assert_eq!(evaluate_poe(&inputs(110.0), &catalog, 2025).energy_status, EnergyStatus::Slight);
        assert_eq!(evaluate_poe(&inputs(125.0), &catalog, 2025).energy_status, EnergyStatus::High);
    }

    #[test]
    fn test_zero_projection_has_no_deviation() {
        let mut poe = inputs(300.0);
        poe.projected_consumption = 0.0;
        let result = evaluate_poe(&poe, &MaterialCatalog::default(), 2025);
        assert_eq!(result.deviation_percent, 0.0);
        assert_eq!(result.energy_status, EnergyStatus::Validated);
    }

    #[test]
    fn test_earliest_replacement_alert() {
        let catalog = MaterialCatalog {
            materials: vec![
                material("cork", 50),
                material("zero", 0),
                material("linoleum", 25),
                material("solar", 25),
            ],
        };
        let result = evaluate_poe(&inputs(100.0), &catalog, 2025);
        let alert = result.alert.unwrap();
        assert_eq!(alert.material, "LINOLEUM");
        assert_eq!(alert.replacement_year, 2050);
        assert_eq!(alert.planning_year, 2047);
    }
}

//! Life-cycle cost analysis
//!
//! Yearly maintenance, replacement and energy-saving flows are discounted
//! back to present value over the analysis horizon.
//!
//! # Formula
//! total = initial + Σ maintenance_t + Σ replacement_t − Σ savings_t
//! where every flow at year t is divided by (1 + r)^t

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::discount::{percent, present_value};
use crate::model::LccaMaterial;

/// Longest analysis horizon accepted for a run (years)
pub const MAX_HORIZON_YEARS: u32 = 500;

/// Parameters of one LCCA run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LccaParams {
    /// Installed quantity, in the material's unit
    pub quantity: f64,
    /// Discount rate as a percentage
    pub discount_rate: f64,
    /// Analysis horizon in years; defaults to the material's useful life
    pub horizon_years: Option<u32>,
}

impl LccaParams {
    pub fn new(quantity: f64, discount_rate: f64) -> Self {
        Self {
            quantity,
            discount_rate,
            horizon_years: None,
        }
    }

    pub fn with_horizon(mut self, years: u32) -> Self {
        self.horizon_years = Some(years);
        self
    }
}

/// Discounted flows for a single year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LccaYear {
    pub year: u32,
    pub maintenance: f64,
    pub replacement: f64,
    pub energy_saving: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LccaResult {
    pub material_id: String,
    pub horizon_years: u32,
    pub initial_cost: f64,
    pub maintenance_costs: f64,
    pub replacement_costs: f64,
    pub energy_savings: f64,
    pub total_cost: f64,
    pub schedule: Vec<LccaYear>,
}

/// Labelled, non-negative share for the cost distribution chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LccaBreakdown {
    pub label: &'static str,
    pub value: f64,
}

pub fn calculate_lcca(material: &LccaMaterial, params: &LccaParams) -> LccaResult {
    let rate = percent(params.discount_rate);
    let qty = params.quantity;
    let years = params
        .horizon_years
        .unwrap_or(material.useful_life)
        .min(MAX_HORIZON_YEARS);

    let mut schedule = Vec::with_capacity(years as usize);
    for year in 1..=years {
        let maintenance = present_value(material.annual_maintenance_cost * qty, rate, year);
        let replacement = if material.useful_life > 0
            && year % material.useful_life == 0
            && year < years
        {
            present_value(
                material.initial_cost * material.replacement_cost_factor * qty,
                rate,
                year,
            )
        } else {
            0.0
        };
        let energy_saving = present_value(material.annual_energy_saving * qty, rate, year);
        schedule.push(LccaYear {
            year,
            maintenance,
            replacement,
            energy_saving,
        });
    }

    let maintenance_costs: f64 = schedule.iter().map(|y| y.maintenance).sum();
    let replacement_costs: f64 = schedule.iter().map(|y| y.replacement).sum();
    let energy_savings: f64 = schedule.iter().map(|y| y.energy_saving).sum();
    let initial_cost = material.initial_cost * qty;
    let total_cost = initial_cost + maintenance_costs + replacement_costs - energy_savings;

    debug!(
        material = %material.id,
        years,
        total_cost,
        "lcca computed"
    );

    LccaResult {
        material_id: material.id.clone(),
        horizon_years: years,
        initial_cost,
        maintenance_costs,
        replacement_costs,
        energy_savings,
        total_cost,
        schedule,
    }
}

impl LccaResult {
    /// Chart slices; savings are shown by magnitude
    pub fn breakdown(&self) -> Vec<LccaBreakdown> {
        vec![
            LccaBreakdown {
                label: "Initial Cost",
                value: self.initial_cost.max(0.0),
            },
            LccaBreakdown {
                label: "Maintenance",
                value: self.maintenance_costs.max(0.0),
            },
            LccaBreakdown {
                label: "Replacement",
                value: self.replacement_costs.max(0.0),
            },
            LccaBreakdown {
                label: "Savings",
                value: self.energy_savings.abs(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icb() -> LccaMaterial {
        LccaMaterial {
            id: "amorim_icb".to_string(),
            name: "Expanded Cork Agglomerate (ICB)".to_string(),
            unit: "m²".to_string(),
            initial_cost: 35.0,
            annual_maintenance_cost: 0.001,
            useful_life: 50,
            replacement_cost_factor: 1.0,
            annual_energy_saving: 4.5,
        }
    }

    fn annuity(amount: f64, rate: f64, years: u32) -> f64 {
        (1..=years).map(|t| amount / (1.0 + rate).powi(t as i32)).sum()
    }

    #[test]
    fn test_icb_initial_cost() {
        let result = calculate_lcca(&icb(), &LccaParams::new(10.0, 5.0));
        assert!((result.initial_cost - 350.0).abs() < 1e-9);
        assert_eq!(result.horizon_years, 50);
        assert_eq!(result.schedule.len(), 50);
    }

    #[test]
    fn test_icb_total_matches_components() {
        let result = calculate_lcca(&icb(), &LccaParams::new(10.0, 5.0));
        let maintenance = annuity(0.01, 0.05, 50);
        let savings = annuity(45.0, 0.05, 50);
        assert!((result.maintenance_costs - maintenance).abs() < 1e-9);
        assert!((result.energy_savings - savings).abs() < 1e-9);
        let expected = 350.0 + maintenance + result.replacement_costs - savings;
        assert!((result.total_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_no_replacement_within_useful_life() {
        let result = calculate_lcca(&icb(), &LccaParams::new(10.0, 5.0));
        assert_eq!(result.replacement_costs, 0.0);
    }

    #[test]
    fn test_replacement_fires_on_longer_horizon() {
        let params = LccaParams::new(1.0, 0.0).with_horizon(120);
        let result = calculate_lcca(&icb(), &params);
        // replacements at year 50 and 100, none at 120
        assert!((result.replacement_costs - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_horizon_is_clamped() {
        let params = LccaParams::new(1.0, 5.0).with_horizon(4_000_000_000);
        let result = calculate_lcca(&icb(), &params);
        assert_eq!(result.horizon_years, MAX_HORIZON_YEARS);
        assert_eq!(result.schedule.len(), MAX_HORIZON_YEARS as usize);
    }

    #[test]
    fn test_zero_rate_is_undiscounted() {
        let result = calculate_lcca(&icb(), &LccaParams::new(1.0, 0.0));
        assert!((result.energy_savings - 4.5 * 50.0).abs() < 1e-9);
        assert!((result.maintenance_costs - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_zero_useful_life() {
        let mut material = icb();
        material.useful_life = 0;
        let result = calculate_lcca(&material, &LccaParams::new(2.0, 5.0));
        assert!(result.schedule.is_empty());
        assert!((result.total_cost - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_is_non_negative() {
        let result = calculate_lcca(&icb(), &LccaParams::new(10.0, 5.0));
        let slices = result.breakdown();
        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|s| s.value >= 0.0));
        assert_eq!(slices[3].label, "Savings");
        assert!(slices[3].value > 0.0);
    }
}

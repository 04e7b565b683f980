//! Restoration DCF: NPV with terminal value, ecometric payback

use ecometric_types::SensitivityRow;
use serde::{Deserialize, Serialize};

use super::discount::{percent, present_value};
use crate::model::RestorationInputs;

/// Energy price used when no tariff is configured ($/kWh)
pub const DEFAULT_ENERGY_COST_PER_KWH: f64 = 0.15;

pub const REHAB_VARIATIONS: [f64; 3] = [-0.10, 0.0, 0.10];
/// Discount-rate shifts in percentage points
pub const RATE_SHIFTS: [f64; 3] = [-2.0, 0.0, 2.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorationResult {
    pub soft_costs: f64,
    pub total_investment: f64,
    pub residual_value: f64,
    pub npv: f64,
    pub total_profit_simple: f64,
    pub energy_saved_kwh: f64,
    pub energy_saving_percent: f64,
    pub annual_energy_savings_value: f64,
    /// Years for energy savings to repay the rehabilitation; absent when nothing is saved
    pub payback_years: Option<f64>,
}

/// NPV at ±10 % rehab cost and ±2 points discount rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorationSensitivity {
    pub rehab_cost: SensitivityRow,
    pub discount_rate: SensitivityRow,
}

/// Net present value of the operating income plus terminal value
pub fn net_present_value(
    total_investment: f64,
    annual_revenue: f64,
    residual_value: f64,
    rate: f64,
    years: u32,
) -> f64 {
    let mut npv = -total_investment;
    for year in 1..=years {
        let mut cash_flow = annual_revenue;
        if year == years {
            cash_flow += residual_value;
        }
        npv += present_value(cash_flow, rate, year);
    }
    npv
}

pub fn calculate_restoration(inputs: &RestorationInputs, energy_cost_per_kwh: f64) -> RestorationResult {
    let soft_pct = percent(inputs.soft_costs_percent);
    let cap_rate = percent(inputs.cap_rate);
    let rate = percent(inputs.discount_rate);
    let years = inputs.horizon_years();

    // 1. Financials
    let soft_costs = inputs.rehabilitation_cost * soft_pct;
    let total_investment = inputs.acquisition_cost + inputs.rehabilitation_cost + soft_costs;
    let residual_value = if cap_rate > 0.0 {
        inputs.annual_revenue / cap_rate
    } else {
        inputs.sell_price_after
    };
    let npv = net_present_value(total_investment, inputs.annual_revenue, residual_value, rate, years);
    let total_profit_simple =
        inputs.annual_revenue * years as f64 + residual_value - total_investment;

    // 2. Ecometrics
    let saved_per_m2 = inputs.current_energy_consumption - inputs.projected_energy_consumption;
    let energy_saved_kwh = saved_per_m2 * inputs.area_total;
    let energy_saving_percent = if inputs.current_energy_consumption > 0.0 {
        saved_per_m2 / inputs.current_energy_consumption * 100.0
    } else {
        0.0
    };
    let annual_energy_savings_value = energy_saved_kwh * energy_cost_per_kwh;
    let payback_years = if annual_energy_savings_value > 0.0 {
        Some(inputs.rehabilitation_cost / annual_energy_savings_value)
    } else {
        None
    };

    RestorationResult {
        soft_costs,
        total_investment,
        residual_value,
        npv,
        total_profit_simple,
        energy_saved_kwh,
        energy_saving_percent,
        annual_energy_savings_value,
        payback_years,
    }
}

pub fn restoration_sensitivity(
    inputs: &RestorationInputs,
    energy_cost_per_kwh: f64,
) -> RestorationSensitivity {
    let rehab_cost = SensitivityRow::from_fn(REHAB_VARIATIONS, |v| {
        let varied = RestorationInputs {
            rehabilitation_cost: inputs.rehabilitation_cost * (1.0 + v),
            ..inputs.clone()
        };
        calculate_restoration(&varied, energy_cost_per_kwh).npv
    });
    let discount_rate = SensitivityRow::from_fn(RATE_SHIFTS, |shift| {
        let varied = RestorationInputs {
            discount_rate: inputs.discount_rate + shift,
            ..inputs.clone()
        };
        calculate_restoration(&varied, energy_cost_per_kwh).npv
    });
    RestorationSensitivity {
        rehab_cost,
        discount_rate,
    }
}

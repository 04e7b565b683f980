//! New-construction pro-forma: urban yield, parking, costs and returns

use ecometric_types::SensitivityRow;
use serde::{Deserialize, Serialize};

use super::discount::percent;
use crate::model::NewConstructionInputs;

/// Gross area taken by one car space including circulation (m²)
pub const GROSS_AREA_PER_CAR_SPACE: f64 = 28.0;
/// Gross area taken by one bicycle space (m²)
pub const GROSS_AREA_PER_BIKE_SPACE: f64 = 1.5;

/// Relative price/cost variations used by the sensitivity table
pub const PRICE_VARIATIONS: [f64; 3] = [-0.10, 0.0, 0.10];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConstructionResult {
    // Urban
    pub max_buildable_area: f64,
    pub max_footprint: f64,
    pub theoretical_floors: f64,
    pub number_of_units: u64,
    pub total_car_spaces: u64,
    pub total_bike_spaces: u64,
    pub total_parking_area: f64,
    pub net_sellable_area: f64,
    // Financial
    pub total_construction_cost: f64,
    pub soft_costs: f64,
    pub marketing_costs: f64,
    pub total_investment: f64,
    pub gross_sales_revenue: f64,
    pub gross_profit: f64,
    pub taxes: f64,
    pub net_profit: f64,
    pub roi: f64,
    pub equity: f64,
    pub cash_on_cash_return: f64,
}

/// Net profit at -10 %, base and +10 % of sale price and build cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConstructionSensitivity {
    pub sell_price: SensitivityRow,
    pub build_cost: SensitivityRow,
}

pub fn calculate_new_construction(inputs: &NewConstructionInputs) -> NewConstructionResult {
    let soft_pct = percent(inputs.soft_costs_percent);
    let marketing_pct = percent(inputs.marketing_costs_percent);
    let tax_pct = percent(inputs.tax_rate_percent);
    let ltv_pct = percent(inputs.loan_to_value_percent);
    let coverage = percent(inputs.max_lot_coverage);
    // Entered as 0-100 like the other percentages; older widget builds skipped the /100
    let visitor_pct = percent(inputs.visitor_parking_percent);

    // 1. Urban yield
    let max_buildable_area = inputs.land_area * inputs.floor_area_ratio;
    let max_footprint = inputs.land_area * coverage;
    let mut theoretical_floors = if max_footprint > 0.0 {
        max_buildable_area / max_footprint
    } else {
        0.0
    };
    if inputs.max_building_height > 0.0 && theoretical_floors > inputs.max_building_height {
        theoretical_floors = inputs.max_building_height;
    }
    let number_of_units = if inputs.avg_unit_size > 0.0 {
        whole(max_buildable_area / inputs.avg_unit_size, f64::floor)
    } else {
        0
    };

    let residential_spaces = number_of_units as f64 * inputs.parking_per_unit;
    let visitor_spaces = residential_spaces * visitor_pct;
    let total_car_spaces = whole(residential_spaces + visitor_spaces, f64::ceil);
    let total_bike_spaces = whole(number_of_units as f64 * inputs.bike_parking_per_unit, f64::ceil);
    let total_parking_area = total_car_spaces as f64 * GROSS_AREA_PER_CAR_SPACE
        + total_bike_spaces as f64 * GROSS_AREA_PER_BIKE_SPACE;
    let net_sellable_area = max_buildable_area - total_parking_area;

    // 2. Financials
    let total_construction_cost = max_buildable_area * inputs.build_cost;
    let soft_costs = total_construction_cost * soft_pct;
    let gross_sales_revenue = net_sellable_area * inputs.sell_price;
    let marketing_costs = gross_sales_revenue * marketing_pct;
    let total_investment = inputs.land_cost + total_construction_cost + soft_costs + marketing_costs;

    let gross_profit = gross_sales_revenue - total_investment;
    let taxes = if gross_profit > 0.0 {
        gross_profit * tax_pct
    } else {
        0.0
    };
    let net_profit = gross_profit - taxes;

    let roi = if total_investment > 0.0 {
        net_profit / total_investment * 100.0
    } else {
        0.0
    };
    let equity = total_investment * (1.0 - ltv_pct);
    let cash_on_cash_return = if equity > 0.0 {
        net_profit / equity * 100.0
    } else {
        0.0
    };

    NewConstructionResult {
        max_buildable_area,
        max_footprint,
        theoretical_floors,
        number_of_units,
        total_car_spaces,
        total_bike_spaces,
        total_parking_area,
        net_sellable_area,
        total_construction_cost,
        soft_costs,
        marketing_costs,
        total_investment,
        gross_sales_revenue,
        gross_profit,
        taxes,
        net_profit,
        roi,
        equity,
        cash_on_cash_return,
    }
}

/// Re-run the pro-forma with sale price and build cost varied ±10 %
pub fn new_construction_sensitivity(inputs: &NewConstructionInputs) -> NewConstructionSensitivity {
    let sell_price = SensitivityRow::from_fn(PRICE_VARIATIONS, |v| {
        let varied = NewConstructionInputs {
            sell_price: inputs.sell_price * (1.0 + v),
            ..inputs.clone()
        };
        calculate_new_construction(&varied).net_profit
    });
    let build_cost = SensitivityRow::from_fn(PRICE_VARIATIONS, |v| {
        let varied = NewConstructionInputs {
            build_cost: inputs.build_cost * (1.0 + v),
            ..inputs.clone()
        };
        calculate_new_construction(&varied).net_profit
    });
    NewConstructionSensitivity {
        sell_price,
        build_cost,
    }
}

/// Round to a non-negative whole count
fn whole(value: f64, round: fn(f64) -> f64) -> u64 {
    let rounded = round(value);
    if rounded.is_finite() && rounded > 0.0 {
        rounded as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> NewConstructionInputs {
        NewConstructionInputs {
            land_area: 10000.0,
            floor_area_ratio: 2.5,
            max_lot_coverage: 60.0,
            max_building_height: 5.0,
            avg_unit_size: 90.0,
            parking_per_unit: 1.5,
            visitor_parking_percent: 10.0,
            bike_parking_per_unit: 2.0,
            build_cost: 950.0,
            land_cost: 500000.0,
            sell_price: 2100.0,
            soft_costs_percent: 15.0,
            marketing_costs_percent: 5.0,
            tax_rate_percent: 25.0,
            loan_to_value_percent: 70.0,
        }
    }

    #[test]
    fn test_buildable_area() {
        let result = calculate_new_construction(&sample_inputs());
        assert!((result.max_buildable_area - 25000.0).abs() < 1e-9);
        assert!((result.max_footprint - 6000.0).abs() < 1e-9);
        assert!((result.theoretical_floors - 25000.0 / 6000.0).abs() < 1e-9);
    }

    #[test]
    fn test_units_and_parking() {
        let result = calculate_new_construction(&sample_inputs());
        // floor(25000 / 90) = 277
        assert_eq!(result.number_of_units, 277);
        // ceil(277 * 1.5 * 1.10) = ceil(457.05) = 458
        assert_eq!(result.total_car_spaces, 458);
        assert_eq!(result.total_bike_spaces, 554);
        assert!((result.total_parking_area - (458.0 * 28.0 + 554.0 * 1.5)).abs() < 1e-9);
        assert!((result.net_sellable_area - (25000.0 - 13655.0)).abs() < 1e-9);
    }

    #[test]
    fn test_roi_definition() {
        let result = calculate_new_construction(&sample_inputs());
        let expected = result.net_profit / result.total_investment * 100.0;
        assert!((result.roi - expected).abs() < 1e-9);
        let equity = result.total_investment * 0.3;
        assert!((result.equity - equity).abs() < 1e-6);
        assert!((result.cash_on_cash_return - result.net_profit / equity * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_loss_is_not_taxed() {
        let result = calculate_new_construction(&sample_inputs());
        assert!(result.gross_profit < 0.0);
        assert_eq!(result.taxes, 0.0);
        assert_eq!(result.net_profit, result.gross_profit);
    }

    #[test]
    fn test_profit_is_taxed() {
        let inputs = NewConstructionInputs {
            sell_price: 4000.0,
            ..sample_inputs()
        };
        let result = calculate_new_construction(&inputs);
        assert!(result.gross_profit > 0.0);
        assert!((result.taxes - result.gross_profit * 0.25).abs() < 1e-6);
        assert!((result.net_profit - result.gross_profit * 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_height_cap() {
        let inputs = NewConstructionInputs {
            max_lot_coverage: 10.0,
            ..sample_inputs()
        };
        let result = calculate_new_construction(&inputs);
        assert!((result.theoretical_floors - 5.0).abs() < f64::EPSILON);

        let uncapped = NewConstructionInputs {
            max_lot_coverage: 10.0,
            max_building_height: 0.0,
            ..sample_inputs()
        };
        let result = calculate_new_construction(&uncapped);
        assert!((result.theoretical_floors - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_inputs() {
        let result = calculate_new_construction(&NewConstructionInputs::default());
        assert_eq!(result.number_of_units, 0);
        assert_eq!(result.theoretical_floors, 0.0);
        assert_eq!(result.roi, 0.0);
        assert_eq!(result.cash_on_cash_return, 0.0);
    }

    #[test]
    fn test_full_leverage_has_no_cash_on_cash() {
        let inputs = NewConstructionInputs {
            loan_to_value_percent: 100.0,
            ..sample_inputs()
        };
        let result = calculate_new_construction(&inputs);
        assert_eq!(result.cash_on_cash_return, 0.0);
    }

    #[test]
    fn test_sensitivity_base_matches_result() {
        let inputs = sample_inputs();
        let base = calculate_new_construction(&inputs).net_profit;
        let sens = new_construction_sensitivity(&inputs);
        assert!((sens.sell_price.base - base).abs() < 1e-6);
        assert!((sens.build_cost.base - base).abs() < 1e-6);
        assert!(sens.sell_price.low < sens.sell_price.high);
        assert!(sens.build_cost.low > sens.build_cost.high);
    }
}

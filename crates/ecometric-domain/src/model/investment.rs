//! Investment analysis input snapshots and form definitions

use std::collections::BTreeMap;

use ecometric_types::{deserialize_number_or_zero, parse_number_or_zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of real-estate operation being analysed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    NewConstruction,
    Restoration,
}

impl ProjectType {
    pub fn title(&self) -> &'static str {
        match self {
            ProjectType::NewConstruction => "Investment Analysis: New Construction",
            ProjectType::Restoration => "Investment Analysis: Restoration/Rehabilitation",
        }
    }

    pub fn sections(&self) -> Vec<FieldSection> {
        match self {
            ProjectType::NewConstruction => new_construction_sections(),
            ProjectType::Restoration => restoration_sections(),
        }
    }
}

/// One input of an analysis form
#[derive(Debug, Clone, Serialize)]
pub struct FieldDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub description: &'static str,
}

impl FieldDefinition {
    /// Percent fields are shown with a `%` suffix in reports
    pub fn is_percent(&self) -> bool {
        self.label.contains("(%)")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSection {
    pub title: &'static str,
    pub fields: Vec<FieldDefinition>,
}

const fn field(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    description: &'static str,
) -> FieldDefinition {
    FieldDefinition {
        id,
        label,
        placeholder,
        description,
    }
}

fn new_construction_sections() -> Vec<FieldSection> {
    vec![
        FieldSection {
            title: "1. Urban and Land Data",
            fields: vec![
                field("land_area", "Total Land Area (m²)", "e.g., 10000", "The total surface area of the property lot."),
                field("floor_area_ratio", "Floor Area Ratio (m²/m²)", "e.g., 2.5", "Ratio of a building's total floor area to the size of the land."),
                field("max_lot_coverage", "Max Lot Coverage (%)", "e.g., 60", "The maximum percentage of the land that can be covered by the building's footprint."),
                field("max_building_height", "Max Height (Number of floors)", "e.g., 5", "The maximum number of floors allowed by local regulations."),
            ],
        },
        FieldSection {
            title: "2. Units and Parking",
            fields: vec![
                field("avg_unit_size", "Average Residential Unit Size (m²)", "e.g., 90", "The average gross area of a single apartment or housing unit to be built."),
                field("parking_per_unit", "Parking Spaces per Unit", "e.g., 1.5", "Number of parking spaces required for each residential unit."),
                field("visitor_parking_percent", "Visitor Parking (%)", "e.g., 10", "Additional parking for visitors."),
                field("bike_parking_per_unit", "Bicycle Spaces per Unit", "e.g., 2", "Number of secure bicycle parking spaces required for each unit."),
            ],
        },
        FieldSection {
            title: "3. Costs and Prices",
            fields: vec![
                field("build_cost", "Construction Cost ($/m²)", "e.g., 950", "The estimated cost to build one square meter (includes parking areas)."),
                field("land_cost", "Total Land Cost ($)", "e.g., 500000", "The total acquisition price of the land."),
                field("sell_price", "Estimated Sale Price ($/m²)", "e.g., 2100", "The projected price for one square meter of sellable residential area."),
            ],
        },
        FieldSection {
            title: "4. Advanced Costs & Financing",
            fields: vec![
                field("soft_costs_percent", "Soft Costs (%)", "e.g., 15", "Percentage of construction cost for non-construction expenses like permits, design fees, etc."),
                field("marketing_costs_percent", "Marketing & Sales Costs (%)", "e.g., 5", "Percentage of sales revenue for marketing and commission expenses."),
                field("tax_rate_percent", "Tax Rate on Profit (%)", "e.g., 25", "The corporate tax rate applied to the gross profit."),
                field("loan_to_value_percent", "Financing / Loan-to-Value (%)", "e.g., 70", "The percentage of the total investment that will be financed by a loan."),
            ],
        },
    ]
}

fn restoration_sections() -> Vec<FieldSection> {
    vec![
        FieldSection {
            title: "1. Initial Investment",
            fields: vec![
                field("acquisition_cost", "Property Acquisition Cost ($)", "e.g., 800000", "The purchase cost of the existing building."),
                field("rehabilitation_cost", "Total Rehabilitation Cost ($)", "e.g., 350000", "The estimated cost of the restoration work."),
                field("soft_costs_percent", "Soft Costs (%)", "e.g., 10", "Percentage of rehabilitation cost for non-construction expenses like permits, design fees, etc."),
                field("sell_price_after", "Estimated Post-Rehab Sale/Rent Value ($)", "e.g., 1500000", "Projected sale price after rehabilitation (Residual Value)."),
            ],
        },
        FieldSection {
            title: "2. Ecometrics and Operation",
            fields: vec![
                field("area_total", "Total Area to be Intervened (m²)", "e.g., 1500", "The total area to be rehabilitated."),
                field("current_energy_consumption", "Current Energy Consumption (kWh/m²)", "e.g., 150", "The building's current annual consumption (pre-rehab)."),
                field("projected_energy_consumption", "Projected Energy Consumption (kWh/m²)", "e.g., 50", "The expected annual consumption after rehabilitation."),
                field("years_of_operation", "Years of Projection (Analysis Horizon)", "e.g., 25", "Time horizon for cash flow analysis."),
            ],
        },
        FieldSection {
            title: "3. Discounted Cash Flow (DCF)",
            fields: vec![
                field("annual_revenue", "Net Annual Operating Income ($)", "e.g., 80000", "Net annual income from rent or operation."),
                field("cap_rate", "Capitalization Rate (Cap Rate) (%)", "e.g., 5", "Rate to calculate the Terminal Value."),
                field("discount_rate", "Discount Rate (WACC) (%)", "e.g., 8", "Cost of capital for calculating NPV."),
            ],
        },
    ]
}

/// Generates field accessors by form id plus form application with zero coercion
macro_rules! form_fields {
    ($ty:ident, $label:literal, [$($id:ident),* $(,)?]) => {
        impl $ty {
            pub fn value(&self, id: &str) -> Option<f64> {
                match id {
                    $(stringify!($id) => Some(self.$id),)*
                    _ => None,
                }
            }

            fn slot(&mut self, id: &str) -> Option<&mut f64> {
                match id {
                    $(stringify!($id) => Some(&mut self.$id),)*
                    _ => None,
                }
            }

            /// Overwrite fields from raw form values; unparsable entries become zero
            pub fn apply_form(&mut self, form: &BTreeMap<String, String>) {
                for (key, raw) in form {
                    match self.slot(key) {
                        Some(slot) => *slot = parse_number_or_zero(raw),
                        None => debug!(field = %key, form = $label, "ignoring unknown form field"),
                    }
                }
            }

            /// Build from raw form values; unparsable entries become zero
            pub fn from_form(form: &BTreeMap<String, String>) -> Self {
                let mut inputs = Self::default();
                inputs.apply_form(form);
                inputs
            }
        }
    };
}

/// New-construction form snapshot; percentages are given as 0-100
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewConstructionInputs {
    #[serde(alias = "landArea", deserialize_with = "deserialize_number_or_zero")]
    pub land_area: f64,
    #[serde(alias = "floorAreaRatio", deserialize_with = "deserialize_number_or_zero")]
    pub floor_area_ratio: f64,
    #[serde(alias = "maxLotCoverage", deserialize_with = "deserialize_number_or_zero")]
    pub max_lot_coverage: f64,
    #[serde(alias = "maxBuildingHeight", deserialize_with = "deserialize_number_or_zero")]
    pub max_building_height: f64,
    #[serde(alias = "avgUnitSize", deserialize_with = "deserialize_number_or_zero")]
    pub avg_unit_size: f64,
    #[serde(alias = "parkingPerUnit", deserialize_with = "deserialize_number_or_zero")]
    pub parking_per_unit: f64,
    #[serde(alias = "visitorParkingPercent", deserialize_with = "deserialize_number_or_zero")]
    pub visitor_parking_percent: f64,
    #[serde(alias = "bikeParkingPerUnit", deserialize_with = "deserialize_number_or_zero")]
    pub bike_parking_per_unit: f64,
    #[serde(alias = "buildCost", deserialize_with = "deserialize_number_or_zero")]
    pub build_cost: f64,
    #[serde(alias = "landCost", deserialize_with = "deserialize_number_or_zero")]
    pub land_cost: f64,
    #[serde(alias = "sellPrice", deserialize_with = "deserialize_number_or_zero")]
    pub sell_price: f64,
    #[serde(alias = "softCostsPercent", deserialize_with = "deserialize_number_or_zero")]
    pub soft_costs_percent: f64,
    #[serde(alias = "marketingCostsPercent", deserialize_with = "deserialize_number_or_zero")]
    pub marketing_costs_percent: f64,
    #[serde(alias = "taxRatePercent", deserialize_with = "deserialize_number_or_zero")]
    pub tax_rate_percent: f64,
    #[serde(alias = "loanToValuePercent", deserialize_with = "deserialize_number_or_zero")]
    pub loan_to_value_percent: f64,
}

form_fields!(
    NewConstructionInputs,
    "new-construction",
    [
        land_area,
        floor_area_ratio,
        max_lot_coverage,
        max_building_height,
        avg_unit_size,
        parking_per_unit,
        visitor_parking_percent,
        bike_parking_per_unit,
        build_cost,
        land_cost,
        sell_price,
        soft_costs_percent,
        marketing_costs_percent,
        tax_rate_percent,
        loan_to_value_percent,
    ]
);

/// Restoration form snapshot; percentages are given as 0-100
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestorationInputs {
    #[serde(alias = "acquisitionCost", deserialize_with = "deserialize_number_or_zero")]
    pub acquisition_cost: f64,
    #[serde(alias = "rehabilitationCost", deserialize_with = "deserialize_number_or_zero")]
    pub rehabilitation_cost: f64,
    #[serde(alias = "softCostsPercent", deserialize_with = "deserialize_number_or_zero")]
    pub soft_costs_percent: f64,
    #[serde(alias = "sellPriceAfter", deserialize_with = "deserialize_number_or_zero")]
    pub sell_price_after: f64,
    #[serde(alias = "areaTotal", deserialize_with = "deserialize_number_or_zero")]
    pub area_total: f64,
    #[serde(alias = "currentEnergyConsumption", deserialize_with = "deserialize_number_or_zero")]
    pub current_energy_consumption: f64,
    #[serde(alias = "projectedEnergyConsumption", deserialize_with = "deserialize_number_or_zero")]
    pub projected_energy_consumption: f64,
    #[serde(alias = "yearsOfOperation", deserialize_with = "deserialize_number_or_zero")]
    pub years_of_operation: f64,
    #[serde(alias = "annualRevenue", deserialize_with = "deserialize_number_or_zero")]
    pub annual_revenue: f64,
    #[serde(alias = "capRate", deserialize_with = "deserialize_number_or_zero")]
    pub cap_rate: f64,
    #[serde(alias = "discountRate", deserialize_with = "deserialize_number_or_zero")]
    pub discount_rate: f64,
}

form_fields!(
    RestorationInputs,
    "restoration",
    [
        acquisition_cost,
        rehabilitation_cost,
        soft_costs_percent,
        sell_price_after,
        area_total,
        current_energy_consumption,
        projected_energy_consumption,
        years_of_operation,
        annual_revenue,
        cap_rate,
        discount_rate,
    ]
);

impl RestorationInputs {
    /// Analysis horizon in whole years
    pub fn horizon_years(&self) -> u32 {
        if self.years_of_operation.is_finite() && self.years_of_operation > 0.0 {
            self.years_of_operation.floor() as u32
        } else {
            0
        }
    }
}

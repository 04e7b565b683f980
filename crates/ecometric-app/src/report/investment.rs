//! Comprehensive investment report for both project types

use chrono::NaiveDate;
use ecometric_domain::model::{NewConstructionInputs, ProjectType};
use ecometric_domain::service::{
    NewConstructionResult, NewConstructionSensitivity, RestorationResult, RestorationSensitivity,
};
use ecometric_types::SensitivityRow;

use super::format::{format_currency, format_decimal, format_number};
use super::report_date;
use crate::app::InvestmentAnalysis;

pub fn investment_report(analysis: &InvestmentAnalysis, issued: NaiveDate) -> String {
    match analysis {
        InvestmentAnalysis::NewConstruction {
            inputs,
            result,
            sensitivity,
        } => new_construction_report(analysis, inputs, result, sensitivity, issued),
        InvestmentAnalysis::Restoration {
            result,
            sensitivity,
            ..
        } => restoration_report(analysis, result, sensitivity, issued),
    }
}

/// Input value as shown in reports: percents verbatim with `%`, others grouped
fn format_input(value: f64, is_percent: bool) -> String {
    if is_percent {
        return format!("{} %", value);
    }
    if value.fract() == 0.0 {
        format_number(value)
    } else {
        let s = format_decimal(value, 2);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn push_inputs(report: &mut String, analysis: &InvestmentAnalysis) {
    for section in analysis.project_type().sections() {
        report.push_str(&format!("   -- {} --\n", section.title));
        for field in &section.fields {
            let value = analysis.input_value(field.id).unwrap_or(0.0);
            report.push_str(&format!(
                "   {}: {}\n",
                field.label,
                format_input(value, field.is_percent())
            ));
        }
    }
    report.push('\n');
}

fn push_sensitivity(
    report: &mut String,
    headers: [&str; 4],
    rows: &[(&str, SensitivityRow)],
) {
    report.push_str(&format!(
        "   {:<28} {:>18} {:>18} {:>18}\n",
        headers[0], headers[1], headers[2], headers[3]
    ));
    for (label, row) in rows {
        let [low, base, high] = row.as_array();
        report.push_str(&format!(
            "   {:<28} {:>18} {:>18} {:>18}\n",
            label,
            format_currency(low),
            format_currency(base),
            format_currency(high)
        ));
    }
}

fn new_construction_report(
    analysis: &InvestmentAnalysis,
    inputs: &NewConstructionInputs,
    result: &NewConstructionResult,
    sensitivity: &NewConstructionSensitivity,
    issued: NaiveDate,
) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "VIABILITY REPORT: {}\n",
        ProjectType::NewConstruction.title().to_uppercase()
    ));
    report.push_str(&format!("Analysis Date: {}\n\n", report_date(issued)));

    report.push_str("I. INPUT PARAMETERS (URBAN & FINANCIAL)\n");
    push_inputs(&mut report, analysis);

    report.push_str("II. VIABILITY SUMMARY\n");
    report.push_str(&format!(
        "   PROJECTED NET PROFIT: {}\n",
        format_currency(result.net_profit)
    ));
    report.push_str(&format!(
        "   RETURN ON INVESTMENT (ROI): {:.2} %\n",
        result.roi
    ));
    report.push_str(&format!(
        "   CASH-ON-CASH RETURN: {:.2} %\n",
        result.cash_on_cash_return
    ));
    report.push_str("   Cost Distribution\n");
    report.push_str(&format!(
        "     Total Investment:  {}\n",
        format_currency(result.total_investment)
    ));
    report.push_str(&format!("     Land Cost:         {}\n", format_currency(inputs.land_cost)));
    report.push_str(&format!(
        "     Construction Cost: {}\n",
        format_currency(result.total_construction_cost)
    ));
    report.push_str(&format!(
        "     Soft & Mkt Costs:  {}\n",
        format_currency(result.soft_costs + result.marketing_costs)
    ));
    let status = if result.net_profit >= 0.0 {
        "The project yields a positive Net Profit. It is recommended to proceed."
    } else {
        "The Net Profit is negative. Re-evaluate costs or increase sale price."
    };
    report.push_str(&format!("   {}\n\n", status));

    report.push_str("III. DETAILED URBAN ANALYSIS\n");
    report.push_str(&format!(
        "   The project maximizes the lot's potential with a buildable area of {} m², allowing for the development of {} residential units.\n",
        format_number(result.max_buildable_area),
        format_number(result.number_of_units as f64)
    ));
    report.push_str(&format!(
        "   The design incorporates a parking infrastructure of {} car spaces and {} bicycle spaces, occupying {} m².\n\n",
        format_number(result.total_car_spaces as f64),
        format_number(result.total_bike_spaces as f64),
        format_number(result.total_parking_area)
    ));

    report.push_str("IV. RISK ANALYSIS (SENSITIVITY)\n");
    push_sensitivity(
        &mut report,
        ["Variable", "-10% (Net Profit)", "Base", "+10% (Net Profit)"],
        &[
            ("Sale Price", sensitivity.sell_price),
            ("Construction Cost", sensitivity.build_cost),
        ],
    );
    report
}

fn restoration_report(
    analysis: &InvestmentAnalysis,
    result: &RestorationResult,
    sensitivity: &RestorationSensitivity,
    issued: NaiveDate,
) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "INVESTMENT & ECOMETRIC REPORT: {}\n",
        ProjectType::Restoration.title().to_uppercase()
    ));
    report.push_str(&format!("Analysis Date: {}\n\n", report_date(issued)));

    report.push_str("I. KEY INPUT PARAMETERS\n");
    push_inputs(&mut report, analysis);

    report.push_str("II. NET PRESENT VALUE (NPV) SUMMARY\n");
    report.push_str(&format!(
        "   TOTAL INVESTMENT: {}\n",
        format_currency(result.total_investment)
    ));
    report.push_str(&format!("   NPV: {}\n", format_currency(result.npv)));
    let status = if result.npv >= 0.0 {
        "The project yields value above the discount rate. It is recommended to proceed."
    } else {
        "The Net Present Value is negative. Re-evaluate rehabilitation costs or increase residual value."
    };
    report.push_str(&format!("   Status: {}\n", status));
    report.push_str(&format!(
        "   Residual (Terminal) Value: {}\n",
        format_currency(result.residual_value)
    ));
    report.push_str(&format!(
        "   Projected Simple Profit: {}\n\n",
        format_currency(result.total_profit_simple)
    ));

    report.push_str("III. ECOMETRICS & ENERGY EFFICIENCY\n");
    report.push_str(&format!(
        "   Gross Energy Savings: {} kWh/year, representing a reduction of {:.1} % in consumption.\n",
        format_number(result.energy_saved_kwh),
        result.energy_saving_percent
    ));
    match result.payback_years {
        Some(years) => report.push_str(&format!(
            "   Ecometric Payback: The cost of rehabilitation is amortized in {:.1} years solely with the saving on the energy bill.\n",
            years
        )),
        None => report.push_str(
            "   Ecometric Payback: Not reached. The rehabilitation produces no energy bill savings.\n",
        ),
    }
    report.push_str(
        "   Ecometric Advantage: The large Embodied Carbon Footprint associated with demolition and new construction is avoided.\n\n",
    );

    report.push_str("IV. RISK ANALYSIS (NPV SENSITIVITY)\n");
    push_sensitivity(
        &mut report,
        ["Variable", "-10% (NPV)", "Base (NPV)", "+10% (NPV)"],
        &[("Rehabilitation Cost", sensitivity.rehab_cost)],
    );
    push_sensitivity(
        &mut report,
        ["Variable", "-2% (NPV)", "Base (NPV)", "+2% (NPV)"],
        &[("Discount Rate (WACC)", sensitivity.discount_rate)],
    );
    report
}

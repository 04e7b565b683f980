//! Excel export of an investment analysis

use std::path::Path;

use ecometric_types::{Error, Result, SensitivityRow};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::app::InvestmentAnalysis;

/// Export inputs, results and sensitivity to a workbook with three sheets
pub fn export_investment_to_excel(analysis: &InvestmentAnalysis, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let inputs_sheet = workbook.add_worksheet();
    write_inputs_sheet(inputs_sheet, analysis)?;

    let results_sheet = workbook.add_worksheet();
    write_results_sheet(results_sheet, analysis)?;

    let sensitivity_sheet = workbook.add_worksheet();
    write_sensitivity_sheet(sensitivity_sheet, analysis)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_inputs_sheet(sheet: &mut Worksheet, analysis: &InvestmentAnalysis) -> Result<()> {
    sheet
        .set_name("Inputs")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, analysis.project_type().title(), &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut row = 2;
    for section in analysis.project_type().sections() {
        sheet
            .write_string_with_format(row, 0, section.title, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
        for field in &section.fields {
            sheet
                .write_string(row, 0, field.label)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 1, analysis.input_value(field.id).unwrap_or(0.0))
                .map_err(|e| Error::Excel(e.to_string()))?;
            row += 1;
        }
        row += 1;
    }

    sheet
        .set_column_width(0, 45)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn result_rows(analysis: &InvestmentAnalysis) -> Vec<(&'static str, f64)> {
    match analysis {
        InvestmentAnalysis::NewConstruction { result: r, .. } => vec![
            ("Max Buildable Area (m²)", r.max_buildable_area),
            ("Max Footprint (m²)", r.max_footprint),
            ("Theoretical Floors", r.theoretical_floors),
            ("Residential Units", r.number_of_units as f64),
            ("Car Spaces", r.total_car_spaces as f64),
            ("Bicycle Spaces", r.total_bike_spaces as f64),
            ("Parking Area (m²)", r.total_parking_area),
            ("Net Sellable Area (m²)", r.net_sellable_area),
            ("Construction Cost", r.total_construction_cost),
            ("Soft Costs", r.soft_costs),
            ("Marketing Costs", r.marketing_costs),
            ("Total Investment", r.total_investment),
            ("Sales Revenue", r.gross_sales_revenue),
            ("Gross Profit", r.gross_profit),
            ("Taxes", r.taxes),
            ("Net Profit", r.net_profit),
            ("ROI (%)", r.roi),
            ("Equity", r.equity),
            ("Cash-on-Cash Return (%)", r.cash_on_cash_return),
        ],
        InvestmentAnalysis::Restoration {
            result: r,
            energy_price_per_kwh,
            ..
        } => {
            let mut rows = vec![
                ("Soft Costs", r.soft_costs),
                ("Total Investment", r.total_investment),
                ("Residual Value", r.residual_value),
                ("NPV", r.npv),
                ("Simple Profit", r.total_profit_simple),
                ("Energy Saved (kWh/year)", r.energy_saved_kwh),
                ("Consumption Reduction (%)", r.energy_saving_percent),
                ("Energy Price ($/kWh)", *energy_price_per_kwh),
                ("Annual Energy Savings", r.annual_energy_savings_value),
            ];
            if let Some(years) = r.payback_years {
                rows.push(("Ecometric Payback (years)", years));
            }
            rows
        }
    }
}

fn write_results_sheet(sheet: &mut Worksheet, analysis: &InvestmentAnalysis) -> Result<()> {
    sheet
        .set_name("Results")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("#,##0.00");

    sheet
        .write_string_with_format(0, 0, "Metric", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string_with_format(0, 1, "Value", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    for (idx, (label, value)) in result_rows(analysis).into_iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string(row, 0, label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number_with_format(row, 1, value, &number_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 32)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 18)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_sensitivity_sheet(sheet: &mut Worksheet, analysis: &InvestmentAnalysis) -> Result<()> {
    sheet
        .set_name("Sensitivity")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("#,##0");

    let rows: Vec<(&str, &str, SensitivityRow)> = match analysis {
        InvestmentAnalysis::NewConstruction { sensitivity, .. } => vec![
            ("Sale Price", "±10%", sensitivity.sell_price),
            ("Construction Cost", "±10%", sensitivity.build_cost),
        ],
        InvestmentAnalysis::Restoration { sensitivity, .. } => vec![
            ("Rehabilitation Cost", "±10%", sensitivity.rehab_cost),
            ("Discount Rate (WACC)", "±2 pts", sensitivity.discount_rate),
        ],
    };

    let headers = ["Variable", "Variation", "Low", "Base", "High"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (idx, (label, variation, values)) in rows.into_iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string(row, 0, label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, variation)
            .map_err(|e| Error::Excel(e.to_string()))?;
        for (offset, value) in values.as_array().into_iter().enumerate() {
            sheet
                .write_number_with_format(row, (offset + 2) as u16, value, &number_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    sheet
        .set_column_width(0, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

//! Output formatting module

use ecometric_app::app::catalog_service::SolutionEntry;
use ecometric_app::app::InvestmentAnalysis;
use ecometric_app::report::format::{format_currency, format_decimal, format_euro};
use ecometric_domain::model::{
    CertificationCatalog, CriterionInfo, Feed, LccaMaterial, Listing, MaterialCatalog, ProjectType,
};
use ecometric_domain::service::{
    AppraisalResult, LccaParams, LccaResult, PoeResult, ScoreSummary,
};
use ecometric_types::{OutputFormat, Result};
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_certifications(format: OutputFormat, catalog: &CertificationCatalog) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&catalog.certifications);
    }
    println!("\nCertification Systems");
    println!("=====================");
    for cert in &catalog.certifications {
        println!(
            "{:<8} {:<8} max {:>6} {}  criteria: {}",
            cert.id,
            cert.name,
            format_decimal(cert.max_score, 0),
            cert.score_unit,
            if cert.has_criteria() { "yes" } else { "no" }
        );
        let levels: Vec<String> = cert
            .levels
            .iter()
            .map(|l| format!("{} ≥ {}", l.label, l.min_score))
            .collect();
        println!("         levels: {}", levels.join(", "));
    }
    Ok(())
}

pub fn output_evaluation(format: OutputFormat, summary: &ScoreSummary) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(summary);
    }
    println!("\nSustainability Evaluation ({})", summary.certification);
    println!("==============================");
    println!(
        "Score:           {} / {} {}",
        format_decimal(summary.score, 2),
        format_decimal(summary.max_score, 0),
        summary.score_unit
    );
    println!("Level:           {}", summary.level);
    println!("Progress:        {:.1}%", summary.progress_percent);

    if !summary.aspects.is_empty() {
        println!("\n--- Aspects ---");
        for aspect in &summary.aspects {
            println!(
                "{:<32} {:>5.2} / {:<5.2} (weight {:.1})",
                aspect.aspect, aspect.points, aspect.max_points, aspect.weight
            );
        }
    }
    Ok(())
}

pub fn output_criterion(
    format: OutputFormat,
    aspect: &str,
    area: &str,
    info: Option<&CriterionInfo>,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&json!({ "aspect": aspect, "area": area, "info": info }));
    }
    println!("\n{} / {}", aspect, area);
    let Some(info) = info else {
        println!("No information available for this criterion.");
        return Ok(());
    };
    println!("\nObjective:\n  {}", info.objective);
    println!("\nPractical Example:\n  {}", info.example);
    println!("\nBenefits:\n  {}", info.benefits);
    if let Some(reg) = &info.regulation {
        println!("\nApplicable Regulation:\n  {}\n  {}", reg.name, reg.link);
    }
    Ok(())
}

pub fn output_solutions(format: OutputFormat, area: &str, solutions: &[SolutionEntry]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(solutions);
    }
    println!("\nSolutions: {}", area);
    if solutions.is_empty() {
        println!("No market solutions listed for this criterion.");
        return Ok(());
    }
    for entry in solutions {
        let s = &entry.solution;
        println!("\n{}", s.name);
        println!("  Manufacturers: {}", s.manufacturer);
        println!("  Application:   {}", s.application);
        println!("  {}", s.description);
        if let Some(co2) = s.kg_co2e {
            println!("  Embodied carbon: {} kgCO2e", co2);
        }
        if let Some(m) = &entry.lcca {
            println!(
                "  LCCA: {} ({} / {}, life {} years)",
                m.id,
                format_euro(m.initial_cost),
                m.unit,
                m.useful_life
            );
        }
        println!("  {}", s.link);
    }
    Ok(())
}

pub fn output_lcca(
    format: OutputFormat,
    material: &LccaMaterial,
    params: &LccaParams,
    result: &LccaResult,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&json!({
            "material": material,
            "params": params,
            "result": result,
            "breakdown": result.breakdown(),
        }));
    }
    println!("\nLife-Cycle Cost Analysis");
    println!("========================");
    println!("Material:        {}", material.name);
    println!("Quantity:        {} {}", params.quantity, material.unit);
    println!("Discount rate:   {} %", params.discount_rate);
    println!("Horizon:         {} years", result.horizon_years);
    println!("\n--- Present Value ---");
    println!("Initial cost:    {}", format_euro(result.initial_cost));
    println!("Maintenance:     {}", format_euro(result.maintenance_costs));
    println!("Replacement:     {}", format_euro(result.replacement_costs));
    println!("Energy savings:  {}", format_euro(-result.energy_savings));
    println!("-------------------------");
    println!("Total LCC:       {}", format_euro(result.total_cost));
    Ok(())
}

pub fn output_materials(format: OutputFormat, catalog: &MaterialCatalog) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&catalog.materials);
    }
    println!(
        "\n{:<18} {:<42} {:>12} {:>6} {:>10}",
        "ID", "Name", "Cost", "Life", "Saving/yr"
    );
    for m in &catalog.materials {
        println!(
            "{:<18} {:<42} {:>12} {:>6} {:>10}",
            m.id,
            m.name,
            format!("{}/{}", format_euro(m.initial_cost), m.unit),
            m.useful_life,
            format_decimal(m.annual_energy_saving, 2)
        );
    }
    Ok(())
}

pub fn output_investment(format: OutputFormat, analysis: &InvestmentAnalysis) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(analysis);
    }
    println!("\n{}", analysis.project_type().title());
    println!("==========================================");
    match analysis {
        InvestmentAnalysis::NewConstruction {
            result,
            sensitivity,
            ..
        } => {
            println!("--- Urban ---");
            println!("Buildable area:  {} m²", format_decimal(result.max_buildable_area, 2));
            println!("Footprint:       {} m²", format_decimal(result.max_footprint, 2));
            println!("Floors:          {:.1}", result.theoretical_floors);
            println!("Units:           {}", result.number_of_units);
            println!("Car spaces:      {}", result.total_car_spaces);
            println!("Bike spaces:     {}", result.total_bike_spaces);
            println!("Parking area:    {} m²", format_decimal(result.total_parking_area, 2));
            println!("Sellable area:   {} m²", format_decimal(result.net_sellable_area, 2));
            println!("\n--- Financial ---");
            println!("Investment:      {}", format_currency(result.total_investment));
            println!("Sales revenue:   {}", format_currency(result.gross_sales_revenue));
            println!("Gross profit:    {}", format_currency(result.gross_profit));
            println!("Taxes:           {}", format_currency(result.taxes));
            println!("Net profit:      {}", format_currency(result.net_profit));
            println!("ROI:             {:.2}%", result.roi);
            println!("Equity:          {}", format_currency(result.equity));
            println!("Cash-on-cash:    {:.2}%", result.cash_on_cash_return);
            println!("\n--- Net Profit Sensitivity (-10% / base / +10%) ---");
            print_row("Sale price", sensitivity.sell_price.as_array());
            print_row("Build cost", sensitivity.build_cost.as_array());
        }
        InvestmentAnalysis::Restoration {
            result,
            sensitivity,
            ..
        } => {
            println!("--- Financial ---");
            println!("Investment:      {}", format_currency(result.total_investment));
            println!("Residual value:  {}", format_currency(result.residual_value));
            println!("NPV:             {}", format_currency(result.npv));
            println!("Simple profit:   {}", format_currency(result.total_profit_simple));
            println!("\n--- Ecometrics ---");
            println!("Energy saved:    {} kWh/yr", format_decimal(result.energy_saved_kwh, 0));
            println!("Saving:          {:.1}%", result.energy_saving_percent);
            println!(
                "Savings value:   {}/yr",
                format_currency(result.annual_energy_savings_value)
            );
            match result.payback_years {
                Some(years) => println!("Payback:         {:.1} years", years),
                None => println!("Payback:         not reached"),
            }
            println!("\n--- NPV Sensitivity ---");
            print_row("Rehab cost ±10%", sensitivity.rehab_cost.as_array());
            print_row("Rate ±2 pts", sensitivity.discount_rate.as_array());
        }
    }
    Ok(())
}

fn print_row(label: &str, values: [f64; 3]) {
    let cells: Vec<String> = values.iter().map(|v| format!("{:>14}", format_currency(*v))).collect();
    println!("{:<16}{}", label, cells.join(""));
}

pub fn output_fields(format: OutputFormat, project_type: ProjectType) -> Result<()> {
    let sections = project_type.sections();
    if format == OutputFormat::Json {
        return print_json(&sections);
    }
    println!("\n{}", project_type.title());
    for section in &sections {
        println!("\n{}", section.title);
        for field in &section.fields {
            println!("  {:<30} {} ({})", field.id, field.label, field.placeholder);
            println!("  {:<30} {}", "", field.description);
        }
    }
    Ok(())
}

pub fn output_appraisal(format: OutputFormat, result: &AppraisalResult) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(result);
    }
    println!("\nAppraisal: {}", result.kind);
    println!("===============");
    for (label, value) in &result.details {
        println!("{:<26} {}", format!("{}:", label), value);
    }
    println!("{:<26} {}", "Estimated market value:", format_euro(result.valuation));
    println!("Applicant:                 {}", result.applicant);
    println!("Appraiser:                 {}", result.appraiser);
    Ok(())
}

pub fn output_poe(format: OutputFormat, result: &PoeResult) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(result);
    }
    println!("\nPost-Occupancy Evaluation");
    println!("=========================");
    println!("POE score:       {:.1} / 5", result.poe_score);
    println!("Energy deviation: {:.1}%", result.deviation_percent);
    println!("Status:          {}", result.energy_status.recommendation());
    match &result.alert {
        Some(alert) => println!(
            "Maintenance:     {} replacement in {} (plan capex from {})",
            alert.material, alert.replacement_year, alert.planning_year
        ),
        None => println!("Maintenance:     no critical alerts"),
    }
    Ok(())
}

pub fn output_listings(format: OutputFormat, feed: Feed, items: &[Listing]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(items);
    }
    println!("\n{} ({})", feed.data_key(), items.len());
    if items.is_empty() {
        println!("{}", ecometric_app::app::EMPTY_STATE_MESSAGE);
        return Ok(());
    }
    for item in items {
        println!(
            "{:<12} {:<40} {}",
            item.data_publicacao.as_deref().unwrap_or("-"),
            item.titulo,
            item.localizacao
        );
    }
    Ok(())
}

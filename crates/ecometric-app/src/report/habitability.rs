//! Operational validation (POE) report

use chrono::NaiveDate;
use ecometric_domain::model::PoeInputs;
use ecometric_domain::service::habitability::HIGH_DEVIATION_PERCENT;
use ecometric_domain::service::PoeResult;

use super::format::format_currency;
use super::report_date;

const LOW_POE_SCORE: f64 = 3.0;

fn poe_status(poe_score: f64) -> &'static str {
    if poe_score < LOW_POE_SCORE {
        "Low score. Detailed acoustic and thermal investigation is recommended."
    } else {
        "Good habitability score, indicating high occupant satisfaction."
    }
}

fn deviation_section(deviation: f64) -> String {
    if deviation.abs() > HIGH_DEVIATION_PERCENT {
        format!(
            "Critical Deviation: The real energy consumption is {:.1}% higher than projected. This indicates a major failure in the Digital Twin or Building Management System (BMS). Immediate recalibration is required.",
            deviation
        )
    } else if deviation < 0.0 {
        format!(
            "Efficiency Bonus: The asset consumes {:.1}% LESS than projected, confirming high efficiency or low occupancy.",
            deviation.abs()
        )
    } else {
        format!(
            "Validated Performance: The energy deviation is within the tolerance ({:.1}%), validating the initial design models.",
            deviation
        )
    }
}

pub fn poe_report(inputs: &PoeInputs, result: &PoeResult, issued: NaiveDate) -> String {
    let mut report = String::new();
    report.push_str("OPERATIONAL VALIDATION REPORT: HABI-TECH PRO\n");
    report.push_str(&format!("Analysis Date: {}\n\n", report_date(issued)));

    report.push_str("I. KEY HABITABILITY METRICS (POE)\n");
    report.push_str(&format!("   Thermal Comfort Score:  {:.1} / 5.0\n", inputs.comfort_score));
    report.push_str(&format!("   Air Quality Score:      {:.1} / 5.0\n", inputs.air_quality_score));
    report.push_str(&format!("   Acoustic Comfort Score: {:.1} / 5.0\n", inputs.acoustic_score));
    report.push_str(&format!(
        "   OVERALL HABITABILITY SCORE: {:.2} / 5.0\n",
        result.poe_score
    ));
    report.push_str(&format!("   {}\n\n", poe_status(result.poe_score)));

    report.push_str("II. DIGITAL TWIN CALIBRATION\n");
    report.push_str(&format!(
        "   Projected Consumption: {} kWh/m² (from Design Phase)\n",
        inputs.projected_consumption
    ));
    report.push_str(&format!(
        "   Real Consumption (Sensor/Billing): {} kWh/m²\n",
        inputs.real_consumption
    ));
    report.push_str(&format!("   Real Deviation: {:.1} %\n", result.deviation_percent));
    report.push_str(&format!(
        "   Projected Maintenance Cost: {} / year\n",
        format_currency(inputs.projected_maintenance)
    ));
    report.push_str(&format!("   Recommendation: {}\n", result.energy_status.recommendation()));
    report.push_str(&format!("   {}\n\n", deviation_section(result.deviation_percent)));

    report.push_str("III. PREDICTIVE MAINTENANCE (LCCA FEEDBACK)\n");
    match &result.alert {
        Some(alert) => {
            report.push_str(&format!("   Earliest Critical Alert: {}\n", alert.material));
            report.push_str(&format!(
                "   Projected Replacement Year: {}\n",
                alert.replacement_year
            ));
            report.push_str(&format!(
                "   Recommendation: Initiate the process for capital expenditure planning in the year {}.\n",
                alert.planning_year
            ));
        }
        None => report.push_str("   No critical alerts.\n"),
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::builtin_materials;
    use ecometric_domain::service::evaluate_poe;

    fn inputs(real: f64) -> PoeInputs {
        PoeInputs {
            comfort_score: 4.0,
            air_quality_score: 4.5,
            acoustic_score: 3.5,
            projected_consumption: 50.0,
            real_consumption: real,
            projected_maintenance: 12000.0,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_critical_deviation() {
        let inputs = inputs(60.0);
        let result = evaluate_poe(&inputs, builtin_materials(), 2025);
        let report = poe_report(&inputs, &result, date());
        assert!(report.contains("Analysis Date: 1/15/2025"));
        assert!(report.contains("OVERALL HABITABILITY SCORE: 4.00 / 5.0"));
        assert!(report.contains("Critical Deviation: The real energy consumption is 20.0% higher"));
        assert!(report.contains("High overconsumption. Calibrate BMS."));
        assert!(report.contains("$12,000 / year"));
        assert!(report.contains("Earliest Critical Alert: Linoleum Flooring"));
        assert!(report.contains("Projected Replacement Year: 2050"));
        assert!(report.contains("planning in the year 2047."));
    }

    #[test]
    fn test_efficiency_bonus() {
        let inputs = inputs(45.0);
        let result = evaluate_poe(&inputs, builtin_materials(), 2025);
        let report = poe_report(&inputs, &result, date());
        assert!(report.contains("Efficiency Bonus: The asset consumes 10.0% LESS"));
    }

    #[test]
    fn test_low_score_and_no_alert() {
        let mut low = inputs(50.0);
        low.comfort_score = 2.0;
        low.acoustic_score = 2.0;
        let result = evaluate_poe(&low, &Default::default(), 2025);
        let report = poe_report(&low, &result, date());
        assert!(report.contains("Low score."));
        assert!(report.contains("Validated Performance"));
        assert!(report.contains("No critical alerts."));
    }
}

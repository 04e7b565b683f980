//! Commercial appraisal report

use chrono::NaiveDate;
use ecometric_domain::service::AppraisalResult;

use super::format::format_decimal;
use super::report_date;

pub fn appraisal_report(result: &AppraisalResult, issued: NaiveDate) -> String {
    let mut report = String::new();
    report.push_str("COMMERCIAL APPRAISAL REPORT\n");
    report.push_str(&format!("Issue Date: {}\n\n", report_date(issued)));

    report.push_str("1. General Information\n");
    report.push_str(&format!("   Applicant:  {}\n", result.applicant));
    report.push_str(&format!("   Appraiser:  {}\n", result.appraiser));
    report.push_str(&format!("   Asset Type: {}\n\n", result.kind));

    report.push_str("2. Details and Valuation\n");
    for (label, value) in &result.details {
        report.push_str(&format!("   {}: {}\n", label, value));
    }
    report.push_str(&format!(
        "\n   Estimated Market Value: ${}\n\n",
        format_decimal(result.valuation, 2)
    ));

    report.push_str("3. Preliminary SWOT Analysis\n");
    report.push_str(&format!("   Strengths:     {}\n", result.swot.strengths));
    report.push_str(&format!("   Weaknesses:    {}\n", result.swot.weaknesses));
    report.push_str(&format!("   Opportunities: {}\n", result.swot.opportunities));
    report.push_str(&format!("   Threats:       {}\n", result.swot.threats));
    report
}

//! Sustainability descriptive report

use ecometric_domain::model::Certification;
use ecometric_domain::service::EvaluationState;

pub const DEFAULT_PROJECT_NAME: &str = "this project";

/// Narrative of the strategies behind every checked criterion
///
/// Each aspect with a checked credit gets a header; each area contributes
/// its descriptive text once, in catalog order.
pub fn descriptive_report(
    cert: &Certification,
    state: &EvaluationState,
    project_name: Option<&str>,
) -> String {
    let name = project_name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME);

    let mut report = String::new();
    report.push_str("SUSTAINABILITY DESCRIPTIVE REPORT\n");
    report.push_str(&format!("PROJECT: {}\n\n", name.to_uppercase()));
    report.push_str(&format!(
        "This report describes the sustainability strategies adopted for {}, based on the criteria of the {} evaluation system.\n\n",
        name, cert.name
    ));

    let checked = state.checked_areas(cert);
    if checked.is_empty() {
        report.push_str("No sustainability criteria were selected in the evaluation.");
        return report;
    }

    let mut current_aspect: Option<&str> = None;
    for (aspect, area) in &checked {
        if current_aspect != Some(aspect.as_str()) {
            report.push_str(&format!("\n--- {} ---\n\n", aspect.to_uppercase()));
            current_aspect = Some(aspect.as_str());
        }
        let text = cert
            .area(aspect, area)
            .ok()
            .and_then(|a| a.info.as_ref())
            .and_then(|info| info.descriptive_report.as_deref());
        if let Some(text) = text {
            report.push_str(&format!(">> CRITERION: {}\n", area.to_uppercase()));
            report.push_str(&format!("{}\n\n", text));
        }
    }
    report
}

//! Sustainability evaluation use case

use std::str::FromStr;

use ecometric_domain::model::Certification;
use ecometric_domain::service::{EvaluationState, ScoreSummary};
use ecometric_types::{Error, Result, WeightProfile};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One checked credit, addressed by aspect / area / credit name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSelection {
    pub aspect: String,
    pub area: String,
    pub credit: String,
}

impl FromStr for CreditSelection {
    type Err = Error;

    /// Parses `Aspect/Area/Credit`; the credit name may itself contain `/`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '/').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(aspect), Some(area), Some(credit))
                if !aspect.is_empty() && !area.is_empty() && !credit.is_empty() =>
            {
                Ok(Self {
                    aspect: aspect.to_string(),
                    area: area.to_string(),
                    credit: credit.to_string(),
                })
            }
            _ => Err(Error::InvalidInput(format!(
                "expected Aspect/Area/Credit, got '{}'",
                s
            ))),
        }
    }
}

/// Evaluation snapshot as stored in a TOML/JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub profile: Option<WeightProfile>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub credits: Vec<CreditSelection>,
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub summary: ScoreSummary,
    pub state: EvaluationState,
}

/// Apply every selection to a fresh state and score it
pub fn evaluate(
    cert: &Certification,
    profile: WeightProfile,
    selections: &[CreditSelection],
) -> Result<Evaluation> {
    let mut state = EvaluationState::new(cert);
    for sel in selections {
        state.toggle_credit(cert, &sel.aspect, &sel.area, &sel.credit, true)?;
    }
    let summary = state.summary(cert, profile);
    info!(
        certification = %cert.id,
        credits = state.checked_count(),
        score = summary.score,
        level = %summary.level,
        "evaluation scored"
    );
    Ok(Evaluation { summary, state })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::get_certification;
    use ecometric_types::CatalogError;

    fn sel(s: &str) -> CreditSelection {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_selection() {
        let s = sel("Resources/Panels and Structure/Use of Certified Wood (FSC/PEFC)");
        assert_eq!(s.aspect, "Resources");
        assert_eq!(s.area, "Panels and Structure");
        assert_eq!(s.credit, "Use of Certified Wood (FSC/PEFC)");
        assert!("Resources/Only two".parse::<CreditSelection>().is_err());
        assert!("//".parse::<CreditSelection>().is_err());
    }

    #[test]
    fn test_empty_evaluation() {
        let lidera = get_certification("lidera").unwrap();
        let eval = evaluate(lidera, WeightProfile::Building, &[]).unwrap();
        assert_eq!(eval.summary.score, 0.0);
        assert_eq!(eval.summary.level, "G");
    }

    #[test]
    fn test_full_aspect_scores_its_weight_share() {
        let lidera = get_certification("lidera").unwrap();
        let selections = vec![
            sel("Local Integration/Bio-climate/Optimized solar orientation"),
            sel("Local Integration/Bio-climate/Protection against dominant winds"),
            sel("Local Integration/Bio-climate/Adequate shadow study"),
        ];
        let eval = evaluate(lidera, WeightProfile::Building, &selections).unwrap();
        // Local Integration weight 1.0 of total 4.7 over the four catalogued aspects
        let expected = 1.0 / 4.7 * 20.0;
        assert!((eval.summary.score - expected).abs() < 1e-9);
        assert_eq!(eval.summary.level, "D");
    }

    #[test]
    fn test_duplicate_selection_counts_once() {
        let lidera = get_certification("lidera").unwrap();
        let one = sel("Environmental Loads/Waste Management/Space for domestic waste separation");
        let eval = evaluate(lidera, WeightProfile::Urban, &[one.clone(), one]).unwrap();
        assert!((eval.state.aspect_points("Environmental Loads") - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_credit_is_error() {
        let lidera = get_certification("lidera").unwrap();
        let err = evaluate(
            lidera,
            WeightProfile::Building,
            &[sel("Resources/Sustainable Insulation/Asbestos")],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::UnknownCredit { .. })));
    }
}

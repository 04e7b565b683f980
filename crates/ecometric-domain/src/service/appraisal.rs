//! Price-per-area valuation with canned SWOT notes

use serde::{Deserialize, Serialize};

use crate::model::{AppraisalRequest, PropertyDetails, PropertyKind};

pub const DEFAULT_APPLICANT: &str = "Not specified";
pub const DEFAULT_APPRAISER: &str = "EcoMetric Evaluator";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swot {
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    pub opportunities: &'static str,
    pub threats: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppraisalResult {
    pub applicant: String,
    pub appraiser: String,
    pub kind: PropertyKind,
    pub valuation: f64,
    /// Labelled facts listed under "Details and Valuation"
    pub details: Vec<(String, String)>,
    pub swot: Swot,
}

pub fn swot_for(kind: PropertyKind) -> Swot {
    match kind {
        PropertyKind::Apartment => Swot {
            strengths: "Stable demand in urban centers.",
            weaknesses: "Condo fees, horizontal property regulations.",
            opportunities: "Potential for short or long-term rental.",
            threats: "Real estate market fluctuations, rising interest rates.",
        },
        PropertyKind::House => Swot {
            strengths: "Greater privacy and space, potential for expansion.",
            weaknesses: "Higher maintenance costs than an apartment.",
            opportunities: "Value increase from garden or energy efficiency improvements.",
            threats: "Higher property taxes, nearby urban development.",
        },
        PropertyKind::Land => Swot {
            strengths: "Flexibility to develop a custom project.",
            weaknesses: "Requires high initial investment for construction, regulatory uncertainty.",
            opportunities: "Development of high-demand projects (residential, commercial).",
            threats: "Changes in urban planning, delays in obtaining licenses.",
        },
    }
}

pub fn appraise(request: &AppraisalRequest) -> AppraisalResult {
    let (valuation, details) = match &request.property {
        PropertyDetails::Apartment {
            area,
            bedrooms,
            market_value,
            ..
        } => (
            area * market_value,
            vec![
                ("Private Gross Area".to_string(), format!("{} m²", area)),
                ("Number of Bedrooms".to_string(), format!("{}", bedrooms)),
            ],
        ),
        PropertyDetails::House {
            area,
            land_area,
            market_value,
        } => (
            area * market_value,
            vec![
                ("Gross Construction Area".to_string(), format!("{} m²", area)),
                ("Land Area".to_string(), format!("{} m²", land_area)),
            ],
        ),
        PropertyDetails::Land {
            area,
            far,
            market_value,
        } => {
            let buildable = area * far;
            (
                buildable * market_value,
                vec![
                    ("Total Area".to_string(), format!("{} m²", area)),
                    (
                        "Potential Buildable Area".to_string(),
                        format!("{:.2} m²", buildable),
                    ),
                ],
            )
        }
    };

    let kind = request.property.kind();
    AppraisalResult {
        applicant: non_blank(request.applicant.as_deref()).unwrap_or(DEFAULT_APPLICANT).to_string(),
        appraiser: non_blank(request.appraiser.as_deref()).unwrap_or(DEFAULT_APPRAISER).to_string(),
        kind,
        valuation,
        details,
        swot: swot_for(kind),
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}

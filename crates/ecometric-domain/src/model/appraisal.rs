//! Property appraisal inputs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Apartment,
    House,
    Land,
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKind::Apartment => write!(f, "Apartment"),
            PropertyKind::House => write!(f, "House"),
            PropertyKind::Land => write!(f, "Land"),
        }
    }
}

/// Type-specific fields captured for the asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropertyDetails {
    Apartment {
        /// Private gross area (m²)
        area: f64,
        bedrooms: f64,
        floor: f64,
        /// Market value per m² in the area
        market_value: f64,
    },
    House {
        /// Gross construction area (m²)
        area: f64,
        land_area: f64,
        market_value: f64,
    },
    Land {
        /// Total land area (m²)
        area: f64,
        /// Floor area ratio (m²/m²)
        far: f64,
        /// Land value per buildable m²
        market_value: f64,
    },
}

impl PropertyDetails {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyDetails::Apartment { .. } => PropertyKind::Apartment,
            PropertyDetails::House { .. } => PropertyKind::House,
            PropertyDetails::Land { .. } => PropertyKind::Land,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalRequest {
    #[serde(default)]
    pub applicant: Option<String>,
    #[serde(default)]
    pub appraiser: Option<String>,
    pub property: PropertyDetails,
}

//! Certification criteria schema (LiderA, BREEAM, LEED)

use std::collections::HashMap;

use ecometric_types::{CatalogError, WeightProfile};
use serde::{Deserialize, Serialize};

/// All certification systems known to the evaluator, in catalog order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationCatalog {
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

impl CertificationCatalog {
    pub fn get(&self, id: &str) -> Option<&Certification> {
        self.certifications.iter().find(|c| c.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&Certification, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownCertification(id.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub max_score: f64,
    #[serde(default = "default_score_unit")]
    pub score_unit: String,
    #[serde(default)]
    pub levels: Vec<Level>,
    #[serde(default)]
    pub weights: Option<WeightTables>,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

fn default_score_unit() -> String {
    "Points".to_string()
}

/// Minimum score required for a classification label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub min_score: f64,
    pub label: String,
}

/// Per-aspect weights for building and urban-scale evaluations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightTables {
    #[serde(default)]
    pub building: HashMap<String, f64>,
    #[serde(default)]
    pub urban: HashMap<String, f64>,
}

impl WeightTables {
    pub fn table(&self, profile: WeightProfile) -> &HashMap<String, f64> {
        match profile {
            WeightProfile::Building => &self.building,
            WeightProfile::Urban => &self.urban,
        }
    }
}

/// Weighting area (e.g. "Resources") grouping several criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aspect {
    pub name: String,
    #[serde(default)]
    pub areas: Vec<Area>,
}

/// A single criterion with its checkable credits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    #[serde(default)]
    pub info: Option<CriterionInfo>,
    #[serde(default)]
    pub solutions: Vec<Solution>,
    #[serde(default)]
    pub credits: Vec<Credit>,
}

impl Area {
    pub fn credit(&self, name: &str) -> Option<&Credit> {
        self.credits.iter().find(|c| c.name == name)
    }

    pub fn max_points(&self) -> f64 {
        self.credits.iter().map(|c| c.points).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credit {
    pub name: String,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionInfo {
    pub objective: String,
    pub example: String,
    pub benefits: String,
    #[serde(default)]
    pub regulation: Option<Regulation>,
    #[serde(default)]
    pub descriptive_report: Option<String>,
}

/// Applicable national regulation for a criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regulation {
    pub name: String,
    pub link: String,
}

/// Market product that satisfies a criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub name: String,
    pub manufacturer: String,
    pub description: String,
    pub application: String,
    pub link: String,
    #[serde(default)]
    pub lcca_id: Option<String>,
    #[serde(default)]
    pub kg_co2e: Option<f64>,
}

impl Certification {
    /// True when the system ships evaluable criteria
    pub fn has_criteria(&self) -> bool {
        !self.aspects.is_empty()
    }

    pub fn aspect(&self, name: &str) -> Option<&Aspect> {
        self.aspects.iter().find(|a| a.name == name)
    }

    pub fn area(&self, aspect: &str, area: &str) -> Result<&Area, CatalogError> {
        let aspect_def = self
            .aspect(aspect)
            .ok_or_else(|| CatalogError::UnknownAspect(aspect.to_string()))?;
        aspect_def
            .areas
            .iter()
            .find(|a| a.name == area)
            .ok_or_else(|| CatalogError::UnknownArea {
                aspect: aspect.to_string(),
                area: area.to_string(),
            })
    }

    pub fn credit_points(&self, aspect: &str, area: &str, credit: &str) -> Result<f64, CatalogError> {
        let area_def = self.area(aspect, area)?;
        area_def
            .credit(credit)
            .map(|c| c.points)
            .ok_or_else(|| CatalogError::UnknownCredit {
                aspect: aspect.to_string(),
                area: area.to_string(),
                credit: credit.to_string(),
            })
    }

    /// Sum of every credit value across the aspect's areas
    pub fn max_aspect_points(&self, aspect: &str) -> f64 {
        self.aspect(aspect)
            .map(|a| a.areas.iter().map(Area::max_points).sum())
            .unwrap_or(0.0)
    }

    /// Weight for an aspect under a profile; missing entries weigh 1
    pub fn weight(&self, profile: WeightProfile, aspect: &str) -> f64 {
        self.weights
            .as_ref()
            .and_then(|w| w.table(profile).get(aspect).copied())
            .unwrap_or(1.0)
    }
}

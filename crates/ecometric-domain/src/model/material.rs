//! Life-cycle cost material records

use ecometric_types::CatalogError;
use serde::{Deserialize, Serialize};

/// Cost and performance data for one construction material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LccaMaterial {
    pub id: String,
    pub name: String,
    pub unit: String,
    /// Cost per unit at installation
    pub initial_cost: f64,
    /// Yearly maintenance cost per unit
    pub annual_maintenance_cost: f64,
    /// Service life in years
    pub useful_life: u32,
    /// Share of the initial cost paid again at each replacement
    #[serde(default = "default_replacement_factor")]
    pub replacement_cost_factor: f64,
    /// Yearly energy cost avoided per unit
    #[serde(default)]
    pub annual_energy_saving: f64,
}

fn default_replacement_factor() -> f64 {
    1.0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialCatalog {
    #[serde(default)]
    pub materials: Vec<LccaMaterial>,
}

impl MaterialCatalog {
    pub fn get(&self, id: &str) -> Option<&LccaMaterial> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&LccaMaterial, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownMaterial(id.to_string()))
    }

    /// Material with the shortest positive useful life
    pub fn earliest_replacement(&self) -> Option<&LccaMaterial> {
        let mut earliest: Option<&LccaMaterial> = None;
        for material in self.materials.iter().filter(|m| m.useful_life > 0) {
            match earliest {
                Some(current) if current.useful_life <= material.useful_life => {}
                _ => earliest = Some(material),
            }
        }
        earliest
    }
}

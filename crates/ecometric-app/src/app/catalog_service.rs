//! Catalog access with optional on-disk overrides

use std::path::PathBuf;

use ecometric_domain::model::{
    Certification, CertificationCatalog, CriterionInfo, LccaMaterial, MaterialCatalog, Solution,
};
use ecometric_domain::repository::CatalogRepository;
use ecometric_infra::CatalogLoader;
use ecometric_types::{Error, Result};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::constants::{builtin_certifications, builtin_materials};

/// Built-in catalogs, each replaceable by a TOML file
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCatalogs {
    certifications_path: Option<PathBuf>,
    materials_path: Option<PathBuf>,
}

impl ConfiguredCatalogs {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            certifications_path: config.certifications_path.clone(),
            materials_path: config.materials_path.clone(),
        }
    }
}

impl CatalogRepository for ConfiguredCatalogs {
    fn certifications(&self) -> std::result::Result<CertificationCatalog, Error> {
        match &self.certifications_path {
            Some(path) => {
                info!(path = %path.display(), "using certification catalog override");
                CatalogLoader::certifications_from_file(path)
            }
            None => Ok(builtin_certifications().clone()),
        }
    }

    fn materials(&self) -> std::result::Result<MaterialCatalog, Error> {
        match &self.materials_path {
            Some(path) => {
                info!(path = %path.display(), "using material catalog override");
                CatalogLoader::materials_from_file(path)
            }
            None => Ok(builtin_materials().clone()),
        }
    }
}

/// Market solution with its LCCA record when one is linked
#[derive(Debug, Clone, Serialize)]
pub struct SolutionEntry {
    #[serde(flatten)]
    pub solution: Solution,
    pub lcca: Option<LccaMaterial>,
}

/// Objective, example, benefits and regulation of a criterion
pub fn criterion_info<'a>(
    cert: &'a Certification,
    aspect: &str,
    area: &str,
) -> Result<Option<&'a CriterionInfo>> {
    Ok(cert.area(aspect, area)?.info.as_ref())
}

/// Solutions recommended for a criterion, resolved against the material catalog
pub fn solutions_for(
    cert: &Certification,
    aspect: &str,
    area: &str,
    materials: &MaterialCatalog,
) -> Result<Vec<SolutionEntry>> {
    let area = cert.area(aspect, area)?;
    Ok(area
        .solutions
        .iter()
        .map(|solution| SolutionEntry {
            lcca: solution
                .lcca_id
                .as_deref()
                .and_then(|id| materials.get(id))
                .cloned(),
            solution: solution.clone(),
        })
        .collect())
}

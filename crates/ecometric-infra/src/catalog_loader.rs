//! Certification and material catalog loader from TOML

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use ecometric_domain::model::{CertificationCatalog, MaterialCatalog};
use ecometric_types::{CatalogError, ConfigError, Error, Result};
use tracing::debug;

/// Parses catalog documents and checks them before use
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load certification systems from a TOML file
    pub fn certifications_from_file(path: &Path) -> Result<CertificationCatalog> {
        let content = read(path, "certification catalog")?;
        Self::certifications_from_str(&content)
    }

    /// Load certification systems from a TOML string
    pub fn certifications_from_str(toml_content: &str) -> Result<CertificationCatalog> {
        let catalog: CertificationCatalog = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse certification catalog TOML: {}",
                e
            )))
        })?;
        validate_certifications(&catalog)?;
        debug!(
            count = catalog.certifications.len(),
            "loaded certification catalog"
        );
        Ok(catalog)
    }

    /// Load LCCA materials from a TOML file
    pub fn materials_from_file(path: &Path) -> Result<MaterialCatalog> {
        let content = read(path, "material catalog")?;
        Self::materials_from_str(&content)
    }

    /// Load LCCA materials from a TOML string
    pub fn materials_from_str(toml_content: &str) -> Result<MaterialCatalog> {
        let catalog: MaterialCatalog = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse material catalog TOML: {}",
                e
            )))
        })?;
        validate_materials(&catalog)?;
        debug!(count = catalog.materials.len(), "loaded material catalog");
        Ok(catalog)
    }
}

fn read(path: &Path, what: &str) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read {}: {}",
            what, e
        )))
    })
}

fn validate_certifications(catalog: &CertificationCatalog) -> Result<()> {
    let mut ids = HashSet::new();
    for cert in &catalog.certifications {
        if !ids.insert(cert.id.as_str()) {
            return Err(invalid(format!("duplicate certification id '{}'", cert.id)));
        }
        if !(cert.max_score.is_finite() && cert.max_score >= 0.0) {
            return Err(invalid(format!("{}: max_score must be >= 0", cert.id)));
        }
        for aspect in &cert.aspects {
            for area in &aspect.areas {
                if let Some(credit) = area
                    .credits
                    .iter()
                    .find(|c| !(c.points.is_finite() && c.points >= 0.0))
                {
                    return Err(invalid(format!(
                        "{}: credit '{}' in {} / {} has negative points",
                        cert.id, credit.name, aspect.name, area.name
                    )));
                }
            }
        }
    }
    Ok(())
}

fn validate_materials(catalog: &MaterialCatalog) -> Result<()> {
    let mut ids = HashSet::new();
    for material in &catalog.materials {
        if !ids.insert(material.id.as_str()) {
            return Err(invalid(format!("duplicate material id '{}'", material.id)));
        }
        if material.initial_cost < 0.0 || material.annual_maintenance_cost < 0.0 {
            return Err(invalid(format!("{}: costs must be >= 0", material.id)));
        }
    }
    Ok(())
}

fn invalid(msg: String) -> Error {
    Error::Catalog(CatalogError::Invalid(msg))
}

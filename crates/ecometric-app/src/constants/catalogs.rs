//! Catalog documents compiled into the binary

use std::sync::LazyLock;

use ecometric_domain::model::{Certification, CertificationCatalog, LccaMaterial, MaterialCatalog};
use ecometric_infra::CatalogLoader;
use tracing::error;

const CERTIFICATIONS_TOML: &str = include_str!("data/certifications.toml");
const LCCA_TOML: &str = include_str!("data/lcca.toml");

static CERTIFICATIONS: LazyLock<CertificationCatalog> = LazyLock::new(|| {
    CatalogLoader::certifications_from_str(CERTIFICATIONS_TOML).unwrap_or_else(|e| {
        error!(error = %e, "built-in certification catalog is invalid");
        CertificationCatalog::default()
    })
});

static MATERIALS: LazyLock<MaterialCatalog> = LazyLock::new(|| {
    CatalogLoader::materials_from_str(LCCA_TOML).unwrap_or_else(|e| {
        error!(error = %e, "built-in material catalog is invalid");
        MaterialCatalog::default()
    })
});

pub fn builtin_certifications() -> &'static CertificationCatalog {
    &CERTIFICATIONS
}

pub fn builtin_materials() -> &'static MaterialCatalog {
    &MATERIALS
}

/// Get a built-in certification by id (lidera, breeam, leed)
pub fn get_certification(id: &str) -> Option<&'static Certification> {
    CERTIFICATIONS.get(&id.to_lowercase())
}

/// Get a built-in LCCA material by id
pub fn get_material(id: &str) -> Option<&'static LccaMaterial> {
    MATERIALS.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_parse() {
        assert!(CatalogLoader::certifications_from_str(CERTIFICATIONS_TOML).is_ok());
        assert!(CatalogLoader::materials_from_str(LCCA_TOML).is_ok());
    }

    #[test]
    fn test_certification_lookup() {
        let lidera = get_certification("LiderA").unwrap();
        assert!((lidera.max_score - 20.0).abs() < 1e-9);
        assert_eq!(lidera.aspects.len(), 4);
        assert!(lidera.has_criteria());

        let leed = get_certification("leed").unwrap();
        assert!(!leed.has_criteria());
        assert_eq!(leed.levels[0].label, "Platinum");
        assert!(get_certification("dgnb").is_none());
    }

    #[test]
    fn test_material_lookup() {
        assert_eq!(builtin_materials().materials.len(), 11);
        let icb = get_material("amorim_icb").unwrap();
        assert!((icb.initial_cost - 35.0).abs() < 1e-9);
        assert_eq!(icb.useful_life, 50);
        let pv = get_material("solar_panels").unwrap();
        assert!((pv.replacement_cost_factor - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_solution_links_resolve() {
        for aspect in &get_certification("lidera").unwrap().aspects {
            for area in &aspect.areas {
                for solution in &area.solutions {
                    if let Some(id) = &solution.lcca_id {
                        assert!(get_material(id).is_some(), "dangling lcca_id {}", id);
                    }
                }
            }
        }
    }

    #[test]
    fn test_earliest_replacement_is_linoleum() {
        // linoleum and solar panels both last 25 years; catalog order decides
        let earliest = builtin_materials().earliest_replacement().unwrap();
        assert_eq!(earliest.id, "linoleum");
    }
}

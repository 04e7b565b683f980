//! LCCA use case over a material catalog

use ecometric_domain::model::MaterialCatalog;
use ecometric_domain::service::lcca::MAX_HORIZON_YEARS;
use ecometric_domain::service::{calculate_lcca, LccaParams, LccaResult};
use ecometric_types::{Error, Result};
use tracing::info;

pub fn run_lcca(materials: &MaterialCatalog, material_id: &str, params: &LccaParams) -> Result<LccaResult> {
    if !(params.quantity.is_finite() && params.quantity >= 0.0) {
        return Err(Error::InvalidInput(format!(
            "quantity must be a non-negative number, got {}",
            params.quantity
        )));
    }
    if let Some(years) = params.horizon_years.filter(|y| *y > MAX_HORIZON_YEARS) {
        return Err(Error::InvalidInput(format!(
            "horizon of {} years exceeds the {} year limit",
            years, MAX_HORIZON_YEARS
        )));
    }
    let material = materials.require(material_id)?;
    let result = calculate_lcca(material, params);
    info!(
        material = %material.id,
        quantity = params.quantity,
        rate = params.discount_rate,
        total = result.total_cost,
        "lcca computed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::builtin_materials;
    use ecometric_types::CatalogError;

    #[test]
    fn test_cork_initial_cost() {
        let result = run_lcca(builtin_materials(), "amorim_icb", &LccaParams::new(10.0, 5.0)).unwrap();
        assert!((result.initial_cost - 350.0).abs() < 1e-9);
        assert_eq!(result.horizon_years, 50);
        assert_eq!(result.replacement_costs, 0.0);
    }

    #[test]
    fn test_unknown_material() {
        let err = run_lcca(builtin_materials(), "asbestos", &LccaParams::new(1.0, 5.0)).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::UnknownMaterial(_))));
    }

    #[test]
    fn test_horizon_limit() {
        let params = LccaParams::new(1.0, 5.0).with_horizon(4_000_000_000);
        let err = run_lcca(builtin_materials(), "linoleum", &params).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let params = LccaParams::new(1.0, 5.0).with_horizon(MAX_HORIZON_YEARS);
        let result = run_lcca(builtin_materials(), "linoleum", &params).unwrap();
        assert_eq!(result.schedule.len(), MAX_HORIZON_YEARS as usize);
    }

    #[test]
    fn test_negative_quantity() {
        assert!(run_lcca(builtin_materials(), "linoleum", &LccaParams::new(-1.0, 5.0)).is_err());
    }
}

//! Investment analysis use case: base case plus sensitivity for either project type

use std::collections::BTreeMap;
use std::path::Path;

use ecometric_domain::model::{NewConstructionInputs, ProjectType, RestorationInputs};
use ecometric_domain::service::{
    calculate_new_construction, calculate_restoration, new_construction_sensitivity,
    restoration_sensitivity, NewConstructionResult, NewConstructionSensitivity, RestorationResult,
    RestorationSensitivity,
};
use ecometric_types::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use super::input::load_document;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "project_type", rename_all = "kebab-case")]
pub enum InvestmentAnalysis {
    NewConstruction {
        inputs: NewConstructionInputs,
        result: NewConstructionResult,
        sensitivity: NewConstructionSensitivity,
    },
    Restoration {
        inputs: RestorationInputs,
        result: RestorationResult,
        sensitivity: RestorationSensitivity,
        energy_price_per_kwh: f64,
    },
}

impl InvestmentAnalysis {
    pub fn project_type(&self) -> ProjectType {
        match self {
            InvestmentAnalysis::NewConstruction { .. } => ProjectType::NewConstruction,
            InvestmentAnalysis::Restoration { .. } => ProjectType::Restoration,
        }
    }

    /// Input value by form field id
    pub fn input_value(&self, id: &str) -> Option<f64> {
        match self {
            InvestmentAnalysis::NewConstruction { inputs, .. } => inputs.value(id),
            InvestmentAnalysis::Restoration { inputs, .. } => inputs.value(id),
        }
    }
}

pub fn analyze_new_construction(inputs: NewConstructionInputs) -> InvestmentAnalysis {
    let result = calculate_new_construction(&inputs);
    let sensitivity = new_construction_sensitivity(&inputs);
    info!(
        units = result.number_of_units,
        net_profit = result.net_profit,
        roi = result.roi,
        "new-construction analysis complete"
    );
    InvestmentAnalysis::NewConstruction {
        inputs,
        result,
        sensitivity,
    }
}

pub fn analyze_restoration(inputs: RestorationInputs, energy_price_per_kwh: f64) -> InvestmentAnalysis {
    let result = calculate_restoration(&inputs, energy_price_per_kwh);
    let sensitivity = restoration_sensitivity(&inputs, energy_price_per_kwh);
    info!(npv = result.npv, payback = ?result.payback_years, "restoration analysis complete");
    InvestmentAnalysis::Restoration {
        inputs,
        result,
        sensitivity,
        energy_price_per_kwh,
    }
}

/// Parse `field=value` pairs as given on the command line
pub fn parse_assignments(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut form = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| Error::InvalidInput(format!("expected field=value, got '{}'", pair)))?;
        form.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(form)
}

pub fn new_construction_inputs(path: Option<&Path>, pairs: &[String]) -> Result<NewConstructionInputs> {
    load_snapshot(path, pairs, NewConstructionInputs::apply_form)
}

pub fn restoration_inputs(path: Option<&Path>, pairs: &[String]) -> Result<RestorationInputs> {
    load_snapshot(path, pairs, RestorationInputs::apply_form)
}

/// Snapshot file (if any) overlaid with command-line assignments
fn load_snapshot<T: DeserializeOwned + Default>(
    path: Option<&Path>,
    pairs: &[String],
    apply_form: fn(&mut T, &BTreeMap<String, String>),
) -> Result<T> {
    let form = parse_assignments(pairs)?;
    let mut inputs = match path {
        Some(path) => load_document(path)?,
        None => T::default(),
    };
    apply_form(&mut inputs, &form);
    Ok(inputs)
}

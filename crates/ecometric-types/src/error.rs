//! Error types for ecometric

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Lookup failures against the static catalogs
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown certification: {0}")]
    UnknownCertification(String),

    #[error("Unknown aspect '{0}'")]
    UnknownAspect(String),

    #[error("Unknown area '{area}' in aspect '{aspect}'")]
    UnknownArea { aspect: String, area: String },

    #[error("Unknown credit '{credit}' in {aspect} / {area}")]
    UnknownCredit {
        aspect: String,
        area: String,
        credit: String,
    },

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid catalog data: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

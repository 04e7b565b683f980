//! Configuration management for ecometric
//!
//! Config stored at: ~/.config/ecometric/config.json

use ecometric_domain::service::restoration::DEFAULT_ENERGY_COST_PER_KWH;
use ecometric_types::{ConfigError, OutputFormat, Result, WeightProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Certification used when none is given on the command line
    #[serde(default = "default_certification")]
    pub default_certification: String,

    /// Aspect weight table (building, urban)
    #[serde(default)]
    pub weight_profile: WeightProfile,

    /// LCCA discount rate in percent
    #[serde(default = "default_discount_rate")]
    pub lcca_discount_rate: f64,

    /// Energy price per kWh used for restoration payback
    #[serde(default = "default_energy_price")]
    pub energy_price_per_kwh: f64,

    /// Directory holding the site's `_dados` feeds
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,

    /// Certification catalog override (TOML)
    #[serde(default)]
    pub certifications_path: Option<PathBuf>,

    /// LCCA material catalog override (TOML)
    #[serde(default)]
    pub materials_path: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_certification() -> String {
    "lidera".to_string()
}

fn default_discount_rate() -> f64 {
    5.0
}

fn default_energy_price() -> f64 {
    DEFAULT_ENERGY_COST_PER_KWH
}

fn default_site_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            default_certification: default_certification(),
            weight_profile: WeightProfile::default(),
            lcca_discount_rate: default_discount_rate(),
            energy_price_per_kwh: default_energy_price(),
            site_root: default_site_root(),
            certifications_path: None,
            materials_path: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ecometric");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "EcoMetric Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:      {}", self.output_format)?;
        writeln!(f, "Certification:      {}", self.default_certification)?;
        writeln!(f, "Weight profile:     {}", self.weight_profile)?;
        writeln!(f, "LCCA discount rate: {}%", self.lcca_discount_rate)?;
        writeln!(f, "Energy price:       {}/kWh", self.energy_price_per_kwh)?;
        writeln!(f, "Site root:          {}", self.site_root.display())?;
        writeln!(
            f,
            "Certifications:     {}",
            self.certifications_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Materials:          {}",
            self.materials_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:        {}", path.display())?;
        }

        Ok(())
    }
}

//! CLI definition using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use ecometric_domain::model::{Feed, ProjectType};
use ecometric_types::{OutputFormat, WeightProfile};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecometric")]
#[command(version)]
#[command(about = "Sustainability scoring, life-cycle costing and real-estate viability analysis")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List certification systems and their classification levels
    Certs,

    /// Score a set of checked credits
    Evaluate {
        /// Evaluation snapshot (TOML or JSON) with certification, profile and credits
        input: Option<PathBuf>,

        /// Certification id (lidera, breeam, leed). Uses config value if not specified.
        #[arg(long, short = 'c')]
        cert: Option<String>,

        /// Weight profile. Uses config value if not specified.
        #[arg(long)]
        profile: Option<WeightProfile>,

        /// Checked credit as "Aspect/Area/Credit" (repeatable)
        #[arg(long = "credit")]
        credits: Vec<String>,

        /// Print the descriptive report for the checked criteria
        #[arg(long)]
        report: bool,

        /// Project name used in the descriptive report
        #[arg(long)]
        project: Option<String>,
    },

    /// Show objective, example, benefits and regulation of a criterion
    Criterion {
        /// Aspect name (e.g. "Resources")
        aspect: String,

        /// Area name (e.g. "Sustainable Insulation")
        area: String,

        #[arg(long, short = 'c')]
        cert: Option<String>,
    },

    /// List market solutions for a criterion
    Solutions {
        aspect: String,

        area: String,

        #[arg(long, short = 'c')]
        cert: Option<String>,
    },

    /// Life-cycle cost analysis of a material
    Lcca {
        /// Material id (see `materials`)
        material: String,

        /// Installed quantity in the material's unit
        #[arg(long, short = 'q')]
        quantity: f64,

        /// Discount rate in percent. Uses config value if not specified.
        #[arg(long, short = 'r')]
        rate: Option<f64>,

        /// Analysis horizon in years (defaults to the material's useful life)
        #[arg(long)]
        years: Option<u32>,

        /// Write the year-by-year schedule to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List LCCA material records
    Materials,

    /// Investment viability analysis
    Invest {
        #[command(subcommand)]
        kind: InvestCommand,
    },

    /// Show the form fields of an investment analysis
    Fields {
        #[arg(value_enum)]
        kind: ProjectKind,
    },

    /// Appraise a property
    Appraise {
        #[command(subcommand)]
        property: AppraiseCommand,

        /// Applicant name
        #[arg(long)]
        applicant: Option<String>,

        /// Appraiser name
        #[arg(long)]
        appraiser: Option<String>,

        /// Print the full appraisal report
        #[arg(long)]
        report: bool,
    },

    /// Post-occupancy evaluation with predictive maintenance alert
    Poe {
        /// Input snapshot (TOML or JSON); flags override its values
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Thermal comfort score (0-5)
        #[arg(long)]
        comfort: Option<f64>,

        /// Air quality score (0-5)
        #[arg(long)]
        air_quality: Option<f64>,

        /// Acoustic comfort score (0-5)
        #[arg(long)]
        acoustic: Option<f64>,

        /// Projected consumption (kWh/m²)
        #[arg(long)]
        projected: Option<f64>,

        /// Real consumption (kWh/m²)
        #[arg(long)]
        real: Option<f64>,

        /// Yearly maintenance budget
        #[arg(long)]
        maintenance: Option<f64>,

        /// Reference year for the maintenance alert (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Print the full habitability report
        #[arg(long)]
        report: bool,
    },

    /// Load and render a listing feed
    Listings {
        #[arg(value_enum)]
        feed: FeedKind,

        /// Site root holding `_dados/`. Uses config value if not specified.
        #[arg(long)]
        site_root: Option<PathBuf>,

        /// Render the card grid HTML instead of a summary
        #[arg(long)]
        html: bool,
    },

    /// Generate JobPosting JSON-LD for a job advert
    JobSchema {
        /// Job advert file (TOML or JSON)
        input: PathBuf,

        /// Site origin used for the posting URL (e.g. https://example.pt)
        #[arg(long)]
        origin: Option<String>,

        /// Wrap the JSON-LD in a script element
        #[arg(long)]
        script: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default certification
        #[arg(long)]
        set_cert: Option<String>,

        /// Set default weight profile
        #[arg(long)]
        set_profile: Option<WeightProfile>,

        /// Set default LCCA discount rate (%)
        #[arg(long)]
        set_discount_rate: Option<f64>,

        /// Set energy price per kWh
        #[arg(long)]
        set_energy_price: Option<f64>,

        /// Set site root for listing feeds
        #[arg(long)]
        set_site_root: Option<PathBuf>,

        /// Set certification catalog override file ("" to clear)
        #[arg(long)]
        set_certifications: Option<String>,

        /// Set material catalog override file ("" to clear)
        #[arg(long)]
        set_materials: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum InvestCommand {
    /// New-construction pro-forma
    NewConstruction(InvestArgs),

    /// Restoration DCF / NPV
    Restoration {
        #[command(flatten)]
        args: InvestArgs,

        /// Energy price per kWh. Uses config value if not specified.
        #[arg(long)]
        energy_price: Option<f64>,
    },
}

#[derive(Args)]
pub struct InvestArgs {
    /// Input snapshot (TOML or JSON)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Override a field as id=value (repeatable)
    #[arg(long = "set", value_name = "ID=VALUE")]
    pub assignments: Vec<String>,

    /// Print the comprehensive report
    #[arg(long)]
    pub report: bool,

    /// Export inputs, results and sensitivity to an Excel workbook
    #[arg(long)]
    pub xlsx: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum AppraiseCommand {
    Apartment {
        /// Private gross area (m²)
        #[arg(long)]
        area: f64,

        #[arg(long, default_value_t = 0.0)]
        bedrooms: f64,

        #[arg(long, default_value_t = 0.0)]
        floor: f64,

        /// Market value per m²
        #[arg(long)]
        market_value: f64,
    },
    House {
        /// Gross construction area (m²)
        #[arg(long)]
        area: f64,

        #[arg(long, default_value_t = 0.0)]
        land_area: f64,

        #[arg(long)]
        market_value: f64,
    },
    Land {
        /// Total land area (m²)
        #[arg(long)]
        area: f64,

        /// Floor area ratio (m²/m²)
        #[arg(long)]
        far: f64,

        /// Value per buildable m²
        #[arg(long)]
        market_value: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProjectKind {
    NewConstruction,
    Restoration,
}

impl From<ProjectKind> for ProjectType {
    fn from(kind: ProjectKind) -> Self {
        match kind {
            ProjectKind::NewConstruction => ProjectType::NewConstruction,
            ProjectKind::Restoration => ProjectType::Restoration,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FeedKind {
    Donations,
    Jobs,
    Services,
    Housing,
}

impl From<FeedKind> for Feed {
    fn from(kind: FeedKind) -> Self {
        match kind {
            FeedKind::Donations => Feed::Donations,
            FeedKind::Jobs => Feed::Jobs,
            FeedKind::Services => Feed::Services,
            FeedKind::Housing => Feed::Housing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_invest_overrides() {
        let cli = Cli::try_parse_from([
            "ecometric",
            "--format",
            "json",
            "invest",
            "restoration",
            "--set",
            "discount_rate=6",
            "--set",
            "annual_revenue=40000",
            "--energy-price",
            "0.2",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Invest {
                kind: InvestCommand::Restoration { args, energy_price },
            } => {
                assert_eq!(args.assignments.len(), 2);
                assert_eq!(energy_price, Some(0.2));
            }
            _ => panic!("expected invest restoration"),
        }
    }

    #[test]
    fn test_parse_repeated_credits() {
        let cli = Cli::try_parse_from([
            "ecometric",
            "evaluate",
            "--profile",
            "urban",
            "--credit",
            "Resources/Sustainable Insulation/Use of Hempcrete",
            "--credit",
            "Local Integration/Bio-climate/Adequate shadow study",
        ])
        .unwrap();
        match cli.command {
            Commands::Evaluate {
                credits, profile, ..
            } => {
                assert_eq!(credits.len(), 2);
                assert_eq!(profile, Some(WeightProfile::Urban));
            }
            _ => panic!("expected evaluate"),
        }
    }
}

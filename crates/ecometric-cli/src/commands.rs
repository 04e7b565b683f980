//! Command handlers

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use ecometric_app::app::catalog_service::{criterion_info, solutions_for};
use ecometric_app::app::input::load_document;
use ecometric_app::app::investment_service::{new_construction_inputs, restoration_inputs};
use ecometric_app::app::job_schema::{job_posting_schema, job_posting_script};
use ecometric_app::app::lcca_service::run_lcca;
use ecometric_app::app::{
    analyze_new_construction, analyze_restoration, evaluate, ConfiguredCatalogs, CreditSelection,
    EvaluationRequest, InvestmentAnalysis, ListingService,
};
use ecometric_app::config::Config;
use ecometric_app::export::{export_investment_to_excel, export_lcca_schedule};
use ecometric_app::report::{appraisal_report, descriptive_report, investment_report, poe_report};
use ecometric_domain::model::{
    AppraisalRequest, Certification, CertificationCatalog, Feed, JobPosting, PoeInputs, ProjectType,
    PropertyDetails,
};
use ecometric_domain::repository::CatalogRepository;
use ecometric_domain::service::{appraise, evaluate_poe, LccaParams};
use ecometric_infra::persistence::FileListingRepository;
use ecometric_types::{OutputFormat, Result, WeightProfile};
use tracing::debug;

use crate::cli::{AppraiseCommand, Cli, Commands, InvestArgs, InvestCommand};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);
    let catalogs = ConfiguredCatalogs::from_config(&config);

    match cli.command {
        Commands::Certs => {
            let certifications = catalogs.certifications()?;
            output::output_certifications(format, &certifications)
        }

        Commands::Evaluate {
            input,
            cert,
            profile,
            credits,
            report,
            project,
        } => cmd_evaluate(
            &config,
            &catalogs,
            format,
            input.as_deref(),
            cert,
            profile,
            &credits,
            report,
            project,
        ),

        Commands::Criterion { aspect, area, cert } => {
            let certifications = catalogs.certifications()?;
            let cert = resolve_certification(&certifications, cert.as_deref(), &config)?;
            let info = criterion_info(cert, &aspect, &area)?;
            output::output_criterion(format, &aspect, &area, info)
        }

        Commands::Solutions { aspect, area, cert } => {
            let certifications = catalogs.certifications()?;
            let materials = catalogs.materials()?;
            let cert = resolve_certification(&certifications, cert.as_deref(), &config)?;
            let solutions = solutions_for(cert, &aspect, &area, &materials)?;
            output::output_solutions(format, &area, &solutions)
        }

        Commands::Lcca {
            material,
            quantity,
            rate,
            years,
            csv,
        } => {
            let materials = catalogs.materials()?;
            let mut params = LccaParams::new(quantity, rate.unwrap_or(config.lcca_discount_rate));
            if let Some(years) = years {
                params = params.with_horizon(years);
            }
            let result = run_lcca(&materials, &material, &params)?;
            let record = materials.require(&material)?;
            output::output_lcca(format, record, &params, &result)?;
            if let Some(path) = csv {
                export_lcca_schedule(&result, &path)?;
                println!("Exported to: {}", path.display());
            }
            Ok(())
        }

        Commands::Materials => {
            let materials = catalogs.materials()?;
            output::output_materials(format, &materials)
        }

        Commands::Invest { kind } => match kind {
            InvestCommand::NewConstruction(args) => {
                let inputs = new_construction_inputs(args.input.as_deref(), &args.assignments)?;
                finish_investment(format, &args, analyze_new_construction(inputs))
            }
            InvestCommand::Restoration { args, energy_price } => {
                let inputs = restoration_inputs(args.input.as_deref(), &args.assignments)?;
                let price = energy_price.unwrap_or(config.energy_price_per_kwh);
                finish_investment(format, &args, analyze_restoration(inputs, price))
            }
        },

        Commands::Fields { kind } => output::output_fields(format, ProjectType::from(kind)),

        Commands::Appraise {
            property,
            applicant,
            appraiser,
            report,
        } => {
            let request = AppraisalRequest {
                applicant,
                appraiser,
                property: property_details(property),
            };
            let result = appraise(&request);
            if report {
                println!("{}", appraisal_report(&result, today()));
                return Ok(());
            }
            output::output_appraisal(format, &result)
        }

        Commands::Poe {
            input,
            comfort,
            air_quality,
            acoustic,
            projected,
            real,
            maintenance,
            year,
            report,
        } => {
            let mut inputs: PoeInputs = match input {
                Some(path) => load_document(&path)?,
                None => PoeInputs::default(),
            };
            let overrides = [
                (comfort, &mut inputs.comfort_score),
                (air_quality, &mut inputs.air_quality_score),
                (acoustic, &mut inputs.acoustic_score),
                (projected, &mut inputs.projected_consumption),
                (real, &mut inputs.real_consumption),
                (maintenance, &mut inputs.projected_maintenance),
            ];
            for (value, slot) in overrides {
                if let Some(v) = value {
                    *slot = v;
                }
            }

            let materials = catalogs.materials()?;
            let result = evaluate_poe(&inputs, &materials, year.unwrap_or_else(|| today().year()));
            if report {
                println!("{}", poe_report(&inputs, &result, today()));
                return Ok(());
            }
            output::output_poe(format, &result)
        }

        Commands::Listings {
            feed,
            site_root,
            html,
        } => {
            let root = site_root.unwrap_or_else(|| config.site_root.clone());
            let service = ListingService::new(FileListingRepository::new(root));
            let feed: Feed = feed.into();
            if html {
                println!("{}", service.render_feed(feed));
                return Ok(());
            }
            output::output_listings(format, feed, &service.load(feed))
        }

        Commands::JobSchema {
            input,
            origin,
            script,
        } => {
            let job: JobPosting = load_document(&input)?;
            if script {
                println!("{}", job_posting_script(&job, origin.as_deref())?);
            } else {
                let schema = job_posting_schema(&job, origin.as_deref())?;
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            Ok(())
        }

        Commands::Config {
            show,
            set_output,
            set_cert,
            set_profile,
            set_discount_rate,
            set_energy_price,
            set_site_root,
            set_certifications,
            set_materials,
            reset,
        } => cmd_config(
            config,
            show,
            ConfigUpdate {
                output: set_output,
                cert: set_cert,
                profile: set_profile,
                discount_rate: set_discount_rate,
                energy_price: set_energy_price,
                site_root: set_site_root,
                certifications: set_certifications,
                materials: set_materials,
            },
            reset,
        ),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_certification<'a>(
    catalog: &'a CertificationCatalog,
    requested: Option<&str>,
    config: &Config,
) -> Result<&'a Certification> {
    let id = requested
        .unwrap_or(&config.default_certification)
        .to_lowercase();
    Ok(catalog.require(&id)?)
}

fn cmd_evaluate(
    config: &Config,
    catalogs: &ConfiguredCatalogs,
    format: OutputFormat,
    input: Option<&Path>,
    cert: Option<String>,
    profile: Option<WeightProfile>,
    credits: &[String],
    report: bool,
    project: Option<String>,
) -> Result<()> {
    let mut request: EvaluationRequest = match input {
        Some(path) => load_document(path)?,
        None => EvaluationRequest::default(),
    };
    for raw in credits {
        request.credits.push(raw.parse::<CreditSelection>()?);
    }

    let certifications = catalogs.certifications()?;
    let requested = cert.or(request.certification.clone());
    let certification = resolve_certification(&certifications, requested.as_deref(), config)?;
    let profile = profile.or(request.profile).unwrap_or(config.weight_profile);
    debug!(
        certification = %certification.id,
        profile = %profile,
        credits = request.credits.len(),
        "evaluating"
    );

    let evaluation = evaluate(certification, profile, &request.credits)?;
    if report {
        let name = project.or(request.project_name);
        println!("{}", descriptive_report(certification, &evaluation.state, name.as_deref()));
        return Ok(());
    }
    output::output_evaluation(format, &evaluation.summary)
}

fn finish_investment(format: OutputFormat, args: &InvestArgs, analysis: InvestmentAnalysis) -> Result<()> {
    if args.report {
        println!("{}", investment_report(&analysis, today()));
    } else {
        output::output_investment(format, &analysis)?;
    }
    if let Some(path) = &args.xlsx {
        export_investment_to_excel(&analysis, path)?;
        println!("Exported to: {}", path.display());
    }
    Ok(())
}

fn property_details(command: AppraiseCommand) -> PropertyDetails {
    match command {
        AppraiseCommand::Apartment {
            area,
            bedrooms,
            floor,
            market_value,
        } => PropertyDetails::Apartment {
            area,
            bedrooms,
            floor,
            market_value,
        },
        AppraiseCommand::House {
            area,
            land_area,
            market_value,
        } => PropertyDetails::House {
            area,
            land_area,
            market_value,
        },
        AppraiseCommand::Land {
            area,
            far,
            market_value,
        } => PropertyDetails::Land {
            area,
            far,
            market_value,
        },
    }
}

struct ConfigUpdate {
    output: Option<OutputFormat>,
    cert: Option<String>,
    profile: Option<WeightProfile>,
    discount_rate: Option<f64>,
    energy_price: Option<f64>,
    site_root: Option<PathBuf>,
    certifications: Option<String>,
    materials: Option<String>,
}

/// Empty path clears an override
fn override_path(raw: String) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(PathBuf::from(raw))
    }
}

fn cmd_config(mut config: Config, show: bool, update: ConfigUpdate, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(output_format) = update.output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(cert) = update.cert {
        config.default_certification = cert.to_lowercase();
        modified = true;
    }

    if let Some(profile) = update.profile {
        config.weight_profile = profile;
        modified = true;
    }

    if let Some(rate) = update.discount_rate {
        config.lcca_discount_rate = rate;
        modified = true;
    }

    if let Some(price) = update.energy_price {
        config.energy_price_per_kwh = price;
        modified = true;
    }

    if let Some(root) = update.site_root {
        config.site_root = root;
        modified = true;
    }

    if let Some(path) = update.certifications {
        config.certifications_path = override_path(path);
        modified = true;
    }

    if let Some(path) = update.materials {
        config.materials_path = override_path(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

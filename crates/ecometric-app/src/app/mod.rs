//! Use-case services wiring catalogs, domain calculations and repositories

pub mod catalog_service;
pub mod evaluation_service;
pub mod input;
pub mod investment_service;
pub mod job_schema;
pub mod lcca_service;
pub mod listing_service;

pub use catalog_service::ConfiguredCatalogs;
pub use evaluation_service::{evaluate, CreditSelection, Evaluation, EvaluationRequest};
pub use investment_service::{analyze_new_construction, analyze_restoration, InvestmentAnalysis};
pub use listing_service::{ListingService, EMPTY_STATE_MESSAGE};

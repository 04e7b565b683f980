//! Application service layer - use cases, config, catalogs, reports, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod report;

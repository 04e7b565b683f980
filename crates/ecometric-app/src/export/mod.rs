//! File exports

pub mod excel;
pub mod lcca_csv;

pub use excel::export_investment_to_excel;
pub use lcca_csv::{export_lcca_schedule, write_lcca_schedule};

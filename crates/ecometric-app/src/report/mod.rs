//! Plain-text reports

pub mod appraisal;
pub mod format;
pub mod habitability;
pub mod investment;
pub mod sustainability;

pub use appraisal::appraisal_report;
pub use habitability::poe_report;
pub use investment::investment_report;
pub use sustainability::descriptive_report;

use chrono::NaiveDate;

/// Issue date as printed on reports (M/D/YYYY)
pub fn report_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

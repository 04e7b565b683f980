//! LCCA year-by-year schedule as CSV

use std::fs::File;
use std::io::Write;
use std::path::Path;

use ecometric_domain::service::LccaResult;
use ecometric_types::Result;

const HEADERS: [&str; 5] = [
    "year",
    "maintenance_pv",
    "replacement_pv",
    "energy_saving_pv",
    "net_pv",
];

/// Write the schedule; year 0 carries the initial cost
pub fn write_lcca_schedule<W: Write>(result: &LccaResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)?;
    wtr.write_record([
        "0".to_string(),
        "0.00".to_string(),
        "0.00".to_string(),
        "0.00".to_string(),
        format!("{:.2}", result.initial_cost),
    ])?;
    for year in &result.schedule {
        let net = year.maintenance + year.replacement - year.energy_saving;
        wtr.write_record([
            year.year.to_string(),
            format!("{:.2}", year.maintenance),
            format!("{:.2}", year.replacement),
            format!("{:.2}", year.energy_saving),
            format!("{:.2}", net),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_lcca_schedule(result: &LccaResult, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_lcca_schedule(result, file)
}

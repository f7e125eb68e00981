use crate::domain::model::SavingsResult;
use crate::utils::error::{Result, SavingsError};

pub const REPORT_HEADER: [&str; 7] = [
    "Composition",
    "CO2 Avoided (kg/day)",
    "CO2 Avoided (kg/month)",
    "CO2 Avoided (kg/year)",
    "Expenses Saved (CHF/day)",
    "Expenses Saved (CHF/month)",
    "Expenses Saved (CHF/year)",
];

/// Renders the savings table: one row per composition in input order,
/// 1-based composition numbering, all values to two decimal places.
pub fn render_report(results: &[SavingsResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(REPORT_HEADER)?;

    for (index, result) in results.iter().enumerate() {
        writer.write_record(&[
            (index + 1).to_string(),
            format!("{:.2}", result.co2_avoided_kg.daily),
            format!("{:.2}", result.co2_avoided_kg.monthly),
            format!("{:.2}", result.co2_avoided_kg.yearly),
            format!("{:.2}", result.cost_chf.daily),
            format!("{:.2}", result.cost_chf.monthly),
            format!("{:.2}", result.cost_chf.yearly),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SavingsError::ProcessingError {
            message: format!("failed to flush report buffer: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| SavingsError::ProcessingError {
        message: format!("report is not valid UTF-8: {}", e),
    })
}

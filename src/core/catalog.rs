use crate::domain::model::PlantRecord;
use crate::utils::error::{Result, SavingsError};

// Catalogue column layout: name, absorption, growth, isolation, thermal.
// Growth and isolation are carried in the file but unused downstream.
const COL_NAME: usize = 0;
const COL_ABSORPTION: usize = 1;
const COL_THERMAL: usize = 4;
const MIN_FIELDS: usize = 5;

/// Parses the plant catalogue. The first record is a header and is
/// skipped; an input with no header record at all is fatal. Rows missing
/// any of name/absorption/transmittance are reported and skipped.
/// Loading stops once `max_records` entries have been accepted.
pub fn parse_catalog(data: &[u8], max_records: usize) -> Result<Vec<PlantRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut records = reader.records();
    match records.next() {
        Some(header) => {
            header?;
        }
        None => {
            return Err(SavingsError::ProcessingError {
                message: "catalogue is empty or has an incorrect format".to_string(),
            });
        }
    }

    let mut catalog = Vec::new();
    let mut truncated = false;

    for (row, record) in records.enumerate() {
        let record = record?;

        if catalog.len() >= max_records {
            truncated = true;
            break;
        }

        let name = record.get(COL_NAME).unwrap_or("");
        if record.len() < MIN_FIELDS || name.is_empty() {
            tracing::warn!("Skipping malformed catalogue row {}", row + 2);
            continue;
        }

        catalog.push(PlantRecord {
            name: name.to_string(),
            absorption_coeff: lenient_number(record.get(COL_ABSORPTION).unwrap_or("")),
            thermal_transmittance: lenient_number(record.get(COL_THERMAL).unwrap_or("")),
        });
    }

    if truncated {
        tracing::warn!(
            "Catalogue truncated at the configured maximum of {} plants",
            max_records
        );
    }

    Ok(catalog)
}

/// Unparseable numeric text yields zero. Deliberately lenient to match
/// the established catalogue-ingestion behaviour.
pub(crate) fn lenient_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::debug!("Treating unparseable numeric field '{}' as 0", raw);
        0.0
    })
}

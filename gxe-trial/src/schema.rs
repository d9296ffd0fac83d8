//! Schema validation at the load boundary.
//!
//! A supplied table must carry a header row naming all six trial fields.
//! Column order is free and unknown columns are ignored. Once a table passes
//! here every downstream crate works with [`TrialRecord`] only.

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};

use crate::error::SchemaError;
use crate::record::TrialRecord;

/// Header names a trial table must provide. Case-sensitive.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "Year",
    "Location",
    "Genotype",
    "Yield",
    "Days_to_Flowering",
    "Disease_Score",
];

/// Check that every required field is present in a header row.
pub fn validate_headers(headers: &StringRecord) -> Result<(), SchemaError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !headers.iter().any(|h| h == **field))
        .map(|field| field.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::MissingFields { fields: missing })
    }
}

/// Parse a comma-delimited trial table (with headers) into typed records.
///
/// Fails with [`SchemaError::MissingFields`] before reading any row when a
/// header is absent, and with [`SchemaError::IncompatibleType`] on the first
/// value that does not convert (e.g. `Yield` = `n/a`, `Year` = `2022.5`) or
/// that is not a finite number (`NaN`, `inf`).
///
/// # Example CSV
/// ```text
/// Year,Location,Genotype,Yield,Days_to_Flowering,Disease_Score
/// 2022,Bhakkar,Line-1,2400,92,3
/// ```
pub fn parse_trial_csv(csv_object: &str) -> Result<Vec<TrialRecord>, SchemaError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv_object.as_bytes());

    let headers = rdr.headers()?.clone();
    validate_headers(&headers)?;

    let mut trials = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let trial: TrialRecord = record
            .deserialize(Some(&headers))
            .map_err(|err| into_schema_error(err, line))?;
        check_finite(&trial, line)?;
        trials.push(trial);
    }
    log::debug!("[GxE Debug] schema: parsed {} trial records", trials.len());
    Ok(trials)
}

fn into_schema_error(err: csv::Error, line: u64) -> SchemaError {
    if let ErrorKind::Deserialize { pos, err: de } = err.kind() {
        return SchemaError::IncompatibleType {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(line),
            message: de.to_string(),
        };
    }
    SchemaError::Csv(err)
}

/// `NaN` and infinities parse as `f64` but are not measurements.
fn check_finite(trial: &TrialRecord, line: u64) -> Result<(), SchemaError> {
    for (field, value) in [
        ("Yield", trial.grain_yield),
        ("Days_to_Flowering", trial.days_to_flowering),
        ("Disease_Score", trial.disease_score),
    ] {
        if !value.is_finite() {
            return Err(SchemaError::IncompatibleType {
                line,
                message: format!("field {} is not a finite number: {}", field, value),
            });
        }
    }
    Ok(())
}

/// Error types for trial data loading and ranking
use thiserror::Error;

/// The supplied table does not match the six-field trial schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// One or more required header names are absent
    #[error("Missing required field(s): {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A value could not be converted into its field's type
    #[error("Incompatible value on line {line}: {message}")]
    IncompatibleType { line: u64, message: String },

    /// The delimited text itself is malformed
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// No genotype satisfies the current filter, so there is nothing to rank.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No genotype matches the current filter selection")]
pub struct NoDataError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_name() {
        let err = SchemaError::MissingFields {
            fields: vec!["Yield".to_string(), "Disease_Score".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required field(s): Yield, Disease_Score"
        );
    }

    #[test]
    fn no_data_message() {
        assert_eq!(
            NoDataError.to_string(),
            "No genotype matches the current filter selection"
        );
    }
}

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::schema::parse_trial_csv;

/// Embedded CSV data for the built-in example trial table.
pub static EXAMPLE_TRIALS_CSV: &str = include_str!("../../fixtures/example_trials.csv");

/// One row of a multi-location variety trial.
///
/// Serialized field names match the external CSV header exactly.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Trial season
    #[serde(rename = "Year")]
    pub year: i32,
    /// Trial site identifier
    #[serde(rename = "Location")]
    pub location: String,
    /// Variety/line identifier
    #[serde(rename = "Genotype")]
    pub genotype: String,
    /// Grain yield in kg/ha
    #[serde(rename = "Yield")]
    pub grain_yield: f64,
    #[serde(rename = "Days_to_Flowering")]
    pub days_to_flowering: f64,
    /// Ordinal disease severity, lower is better
    #[serde(rename = "Disease_Score")]
    pub disease_score: f64,
}

impl TrialRecord {
    /// Parse the built-in example table.
    ///
    /// The example goes through the same schema validation as a supplied
    /// table, so both load paths yield identically shaped records.
    pub fn example_table() -> Result<Vec<TrialRecord>, SchemaError> {
        parse_trial_csv(EXAMPLE_TRIALS_CSV)
    }
}

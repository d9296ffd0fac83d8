//! Summary model structs produced by the aggregator.
//!
//! Serialized field names follow the column headings of the trial report,
//! so CSV and JSON output read the same as the text tables.

use serde::Serialize;

/// Per-genotype performance over the filtered trial rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenotypeSummary {
    #[serde(rename = "Genotype")]
    pub genotype: String,
    /// Number of filtered rows for this genotype.
    #[serde(rename = "N")]
    pub n: usize,
    /// Mean yield in kg/ha.
    #[serde(rename = "Mean_Yield")]
    pub mean_yield: f64,
    /// Sample standard deviation of yield. `None` when `n < 2`.
    #[serde(rename = "Yield_SD")]
    pub yield_sd: Option<f64>,
    #[serde(rename = "Mean_Flowering")]
    pub mean_flowering: f64,
    #[serde(rename = "Mean_Disease")]
    pub mean_disease: f64,
}

/// Mean yield of one genotype at one location (G×E cell).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionSummary {
    #[serde(rename = "Genotype")]
    pub genotype: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "N")]
    pub n: usize,
    #[serde(rename = "Mean_Yield")]
    pub mean_yield: f64,
}

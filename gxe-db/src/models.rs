//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the command
//! layer for text, CSV or JSON rendering.

use serde::Serialize;

/// Shape of the loaded trial table, shown above the dataset preview.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrialOverview {
    /// Number of trial records.
    pub rows: usize,
    /// Distinct trial seasons.
    pub years: usize,
    /// Distinct trial sites.
    pub locations: usize,
    /// Distinct genotypes under trial.
    pub genotypes: usize,
}

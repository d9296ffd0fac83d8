//! Predicate filter over the trial table.

use gxe_trial::{FilterSelection, TrialRecord};

/// Keep the rows whose year, location and genotype are all selected.
///
/// Order-preserving. An empty result is a normal outcome, not an error.
pub fn filter(table: &[TrialRecord], selection: &FilterSelection) -> Vec<TrialRecord> {
    let filtered: Vec<TrialRecord> = table
        .iter()
        .filter(|record| selection.contains(record))
        .cloned()
        .collect();
    log::debug!(
        "[GxE Debug] filter: kept {} of {} rows",
        filtered.len(),
        table.len()
    );
    filtered
}

//! Grouped summaries over the filtered trial table.
//!
//! Groups are formed only from rows present in the filtered table, never
//! from the full genotype universe. Output is ordered by group key.

use std::collections::BTreeMap;

use gxe_trial::TrialRecord;

use crate::models::{GenotypeSummary, InteractionSummary};
use crate::stats;

/// Column values collected for one group.
#[derive(Default)]
struct GroupColumns {
    yields: Vec<f64>,
    flowering: Vec<f64>,
    disease: Vec<f64>,
}

/// Compute both summaries in one call.
pub fn summarize(filtered: &[TrialRecord]) -> (Vec<GenotypeSummary>, Vec<InteractionSummary>) {
    (genotype_summaries(filtered), interaction_summaries(filtered))
}

/// One [`GenotypeSummary`] per genotype present in `filtered`.
pub fn genotype_summaries(filtered: &[TrialRecord]) -> Vec<GenotypeSummary> {
    let mut groups: BTreeMap<&str, GroupColumns> = BTreeMap::new();
    for t in filtered {
        let group = groups.entry(t.genotype.as_str()).or_default();
        group.yields.push(t.grain_yield);
        group.flowering.push(t.days_to_flowering);
        group.disease.push(t.disease_score);
    }

    let mut summaries = Vec::with_capacity(groups.len());
    for (genotype, columns) in groups {
        let (Some(mean_yield), Some(mean_flowering), Some(mean_disease)) = (
            stats::mean(&columns.yields),
            stats::mean(&columns.flowering),
            stats::mean(&columns.disease),
        ) else {
            continue;
        };
        summaries.push(GenotypeSummary {
            genotype: genotype.to_string(),
            n: columns.yields.len(),
            mean_yield,
            yield_sd: stats::sample_sd(&columns.yields),
            mean_flowering,
            mean_disease,
        });
    }
    log::debug!(
        "[GxE Debug] aggregate: {} genotype summaries from {} rows",
        summaries.len(),
        filtered.len()
    );
    summaries
}

/// One [`InteractionSummary`] per (genotype, location) pair present in `filtered`.
pub fn interaction_summaries(filtered: &[TrialRecord]) -> Vec<InteractionSummary> {
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for t in filtered {
        groups
            .entry((t.genotype.as_str(), t.location.as_str()))
            .or_default()
            .push(t.grain_yield);
    }

    let summaries: Vec<InteractionSummary> = groups
        .into_iter()
        .filter_map(|((genotype, location), yields)| {
            Some(InteractionSummary {
                genotype: genotype.to_string(),
                location: location.to_string(),
                n: yields.len(),
                mean_yield: stats::mean(&yields)?,
            })
        })
        .collect();
    log::debug!(
        "[GxE Debug] aggregate: {} genotype x location cells from {} rows",
        summaries.len(),
        filtered.len()
    );
    summaries
}

//! One full pass of filter → aggregate → recommend.

use gxe_trial::{FilterSelection, NoDataError, TrialRecord};
use serde::Serialize;

use crate::aggregate::summarize;
use crate::filter::filter;
use crate::models::{GenotypeSummary, InteractionSummary};
use crate::recommend::recommend;

/// Everything the report and chart layers consume, recomputed per selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub filtered: Vec<TrialRecord>,
    pub genotype_summaries: Vec<GenotypeSummary>,
    pub interaction_summaries: Vec<InteractionSummary>,
    /// `Err(NoDataError)` when no genotype survives the filter.
    #[serde(serialize_with = "serialize_recommendation")]
    pub recommendation: Result<GenotypeSummary, NoDataError>,
}

fn serialize_recommendation<S>(
    recommendation: &Result<GenotypeSummary, NoDataError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    recommendation.as_ref().ok().serialize(serializer)
}

/// Run the whole pipeline for one filter selection.
pub fn run(table: &[TrialRecord], selection: &FilterSelection) -> PipelineOutput {
    let filtered = filter(table, selection);
    let (genotype_summaries, interaction_summaries) = summarize(&filtered);
    let recommendation = recommend(&genotype_summaries);
    if let Err(e) = &recommendation {
        log::info!("[GxE Debug] pipeline: {}", e);
    }
    PipelineOutput {
        filtered,
        genotype_summaries,
        interaction_summaries,
        recommendation,
    }
}

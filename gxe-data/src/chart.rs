//! Chart-ready data series.
//!
//! Three charts accompany the trial report: a yield distribution box plot
//! (genotype on x, one box per location), a G×E interaction line plot and a
//! stability scatter. This module only shapes the data; drawing is left to
//! whatever renderer consumes the JSON.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{GenotypeSummary, InteractionSummary};
use crate::pipeline::PipelineOutput;
use crate::stats::quantile_sorted;
use gxe_trial::TrialRecord;

/// Box plot statistics for one genotype at one location.
///
/// Quartiles use linear interpolation between closest ranks. `points`
/// holds every raw yield in table order so renderers can overlay them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YieldBox {
    pub genotype: String,
    pub location: String,
    pub n: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub points: Vec<f64>,
}

/// A single (location, mean yield) vertex of an interaction line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationMean {
    pub location: String,
    pub mean_yield: f64,
}

/// One line of the G×E interaction plot: a genotype across locations.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionLine {
    pub genotype: String,
    pub points: Vec<LocationMean>,
}

/// One genotype on the stability scatter (x = SD, y = mean yield).
///
/// `yield_sd` is `None` for single-row genotypes and serializes as `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StabilityPoint {
    pub genotype: String,
    pub yield_sd: Option<f64>,
    pub mean_yield: f64,
}

/// All chart series for one pipeline run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub yield_boxes: Vec<YieldBox>,
    pub interaction_lines: Vec<InteractionLine>,
    pub stability_points: Vec<StabilityPoint>,
}

impl ChartData {
    pub fn from_output(output: &PipelineOutput) -> Self {
        Self {
            yield_boxes: yield_boxes(&output.filtered),
            interaction_lines: interaction_lines(&output.interaction_summaries),
            stability_points: stability_points(&output.genotype_summaries),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Box statistics per (genotype, location) over the filtered rows.
pub fn yield_boxes(filtered: &[TrialRecord]) -> Vec<YieldBox> {
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for t in filtered {
        groups
            .entry((t.genotype.as_str(), t.location.as_str()))
            .or_default()
            .push(t.grain_yield);
    }

    groups
        .into_iter()
        .filter_map(|((genotype, location), points)| {
            let mut sorted = points.clone();
            sorted.sort_by(f64::total_cmp);
            Some(YieldBox {
                genotype: genotype.to_string(),
                location: location.to_string(),
                n: points.len(),
                min: quantile_sorted(&sorted, 0.0)?,
                q1: quantile_sorted(&sorted, 0.25)?,
                median: quantile_sorted(&sorted, 0.5)?,
                q3: quantile_sorted(&sorted, 0.75)?,
                max: quantile_sorted(&sorted, 1.0)?,
                points,
            })
        })
        .collect()
}

/// Interaction cells regrouped into one line per genotype.
pub fn interaction_lines(cells: &[InteractionSummary]) -> Vec<InteractionLine> {
    let mut lines: BTreeMap<&str, Vec<LocationMean>> = BTreeMap::new();
    for cell in cells {
        lines
            .entry(cell.genotype.as_str())
            .or_default()
            .push(LocationMean {
                location: cell.location.clone(),
                mean_yield: cell.mean_yield,
            });
    }
    lines
        .into_iter()
        .map(|(genotype, points)| InteractionLine {
            genotype: genotype.to_string(),
            points,
        })
        .collect()
}

pub fn stability_points(summaries: &[GenotypeSummary]) -> Vec<StabilityPoint> {
    summaries
        .iter()
        .map(|s| StabilityPoint {
            genotype: s.genotype.clone(),
            yield_sd: s.yield_sd,
            mean_yield: s.mean_yield,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::run;
    use gxe_trial::FilterSelection;

    fn example_chart() -> ChartData {
        let table = TrialRecord::example_table().unwrap();
        ChartData::from_output(&run(&table, &FilterSelection::all(&table)))
    }

    #[test]
    fn yield_boxes_per_genotype_and_location() {
        let chart = example_chart();
        assert_eq!(chart.yield_boxes.len(), 5);

        let layyah = chart
            .yield_boxes
            .iter()
            .find(|b| b.genotype == "Line-1" && b.location == "Layyah")
            .unwrap();
        assert_eq!(layyah.n, 2);
        assert_eq!(layyah.points, vec![2300.0, 2350.0]);
        assert_eq!(layyah.min, 2300.0);
        assert_eq!(layyah.q1, 2312.5);
        assert_eq!(layyah.median, 2325.0);
        assert_eq!(layyah.q3, 2337.5);
        assert_eq!(layyah.max, 2350.0);
    }

    #[test]
    fn interaction_lines_group_cells_by_genotype() {
        let chart = example_chart();
        let line2 = chart
            .interaction_lines
            .iter()
            .find(|l| l.genotype == "Line-2")
            .unwrap();
        assert_eq!(
            line2.points,
            vec![
                LocationMean {
                    location: "Bhakkar".to_string(),
                    mean_yield: 2675.0,
                },
                LocationMean {
                    location: "Multan".to_string(),
                    mean_yield: 2750.0,
                },
            ]
        );
        assert_eq!(chart.interaction_lines.len(), 3);
    }

    #[test]
    fn stability_points_keep_missing_sd() {
        let chart = example_chart();
        let line3 = chart
            .stability_points
            .iter()
            .find(|p| p.genotype == "Line-3")
            .unwrap();
        assert_eq!(line3.yield_sd, None);
        assert_eq!(line3.mean_yield, 2600.0);

        let json: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        let points = json["stability_points"].as_array().unwrap();
        assert!(points
            .iter()
            .any(|p| p["genotype"] == "Line-3" && p["yield_sd"].is_null()));
    }

    #[test]
    fn empty_output_gives_empty_series() {
        let table = TrialRecord::example_table().unwrap();
        let chart = ChartData::from_output(&run(&table, &FilterSelection::default()));
        assert!(chart.yield_boxes.is_empty());
        assert!(chart.interaction_lines.is_empty());
        assert!(chart.stability_points.is_empty());
    }
}

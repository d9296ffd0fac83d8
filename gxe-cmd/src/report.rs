//! Rendering pipeline results as text tables, CSV or JSON.

use std::io::Write;

use gxe_data::models::{GenotypeSummary, InteractionSummary};
use gxe_data::pipeline::PipelineOutput;
use gxe_data::recommend::rank;
use gxe_db::models::TrialOverview;
use gxe_trial::TrialRecord;
use serde::Serialize;

use crate::OutputFormat;

/// A rendered view over one pipeline run.
#[derive(Serialize)]
pub struct Report {
    overview: TrialOverview,
    output: PipelineOutput,
    #[serde(skip)]
    format: OutputFormat,
}

impl Report {
    pub fn new(overview: TrialOverview, output: PipelineOutput, format: OutputFormat) -> Self {
        Self {
            overview,
            output,
            format,
        }
    }

    /// The filtered trial table.
    pub fn preview<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(
                    out,
                    "Dataset: {} rows, {} years, {} locations, {} genotypes ({} rows after filtering)",
                    self.overview.rows,
                    self.overview.years,
                    self.overview.locations,
                    self.overview.genotypes,
                    self.output.filtered.len()
                )?;
                write_text_table(out, &TRIAL_HEADINGS, self.output.filtered.iter().map(trial_row))
            }
            OutputFormat::Csv => write_csv(out, &self.output.filtered),
            OutputFormat::Json => write_json(out, &self.output.filtered),
        }
    }

    /// The per-genotype summary, in ranking order for text output.
    pub fn genotype_summary<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => write_text_table(
                out,
                &SUMMARY_HEADINGS,
                rank(&self.output.genotype_summaries).iter().map(summary_row),
            ),
            OutputFormat::Csv => write_csv(out, &self.output.genotype_summaries),
            OutputFormat::Json => write_json(out, &self.output.genotype_summaries),
        }
    }

    /// Genotype x location mean yields.
    pub fn interaction<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => write_text_table(
                out,
                &INTERACTION_HEADINGS,
                self.output.interaction_summaries.iter().map(interaction_row),
            ),
            OutputFormat::Csv => write_csv(out, &self.output.interaction_summaries),
            OutputFormat::Json => write_json(out, &self.output.interaction_summaries),
        }
    }

    pub fn recommendation<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let best = self.output.recommendation.as_ref();
        match self.format {
            OutputFormat::Text => match best {
                Ok(best) => {
                    writeln!(out, "Recommended Genotype: {}", best.genotype)?;
                    writeln!(out, "Mean Yield: {:.1} kg/ha", best.mean_yield)?;
                    writeln!(out, "Yield Stability (SD): {}", format_sd(best.yield_sd))?;
                    writeln!(out, "Disease Score: {:.1}", best.mean_disease)?;
                    Ok(())
                }
                Err(e) => {
                    writeln!(out, "{}.", e)?;
                    Ok(())
                }
            },
            OutputFormat::Csv => write_csv(out, best.ok()),
            OutputFormat::Json => write_json(out, &best.ok()),
        }
    }

    /// Every section of the report.
    pub fn full<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(out, self),
            OutputFormat::Text | OutputFormat::Csv => {
                let sections: [(&str, fn(&Self, &mut W) -> anyhow::Result<()>); 4] = [
                    ("Dataset Preview", Self::preview),
                    ("Performance Summary", Self::genotype_summary),
                    ("GxE Interaction", Self::interaction),
                    ("Recommendation", Self::recommendation),
                ];
                for (i, (title, section)) in sections.into_iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    match self.format {
                        OutputFormat::Csv => writeln!(out, "# {}", title)?,
                        _ => writeln!(out, "== {} ==", title)?,
                    }
                    section(self, out)?;
                }
                Ok(())
            }
        }
    }
}

const TRIAL_HEADINGS: [&str; 6] = [
    "Year",
    "Location",
    "Genotype",
    "Yield",
    "Days_to_Flowering",
    "Disease_Score",
];

const SUMMARY_HEADINGS: [&str; 6] = [
    "Genotype",
    "N",
    "Mean_Yield",
    "Yield_SD",
    "Mean_Flowering",
    "Mean_Disease",
];

const INTERACTION_HEADINGS: [&str; 4] = ["Genotype", "Location", "N", "Mean_Yield"];

fn trial_row(t: &TrialRecord) -> Vec<String> {
    vec![
        t.year.to_string(),
        t.location.clone(),
        t.genotype.clone(),
        t.grain_yield.to_string(),
        t.days_to_flowering.to_string(),
        t.disease_score.to_string(),
    ]
}

fn summary_row(s: &GenotypeSummary) -> Vec<String> {
    vec![
        s.genotype.clone(),
        s.n.to_string(),
        format!("{:.1}", s.mean_yield),
        format_sd(s.yield_sd),
        format!("{:.1}", s.mean_flowering),
        format!("{:.2}", s.mean_disease),
    ]
}

fn interaction_row(c: &InteractionSummary) -> Vec<String> {
    vec![
        c.genotype.clone(),
        c.location.clone(),
        c.n.to_string(),
        format!("{:.1}", c.mean_yield),
    ]
}

/// Two decimals, or `n/a` for a single-observation genotype.
pub fn format_sd(sd: Option<f64>) -> String {
    sd.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v))
}

/// Left-aligned, space-padded columns with a dashed rule under the header.
fn write_text_table<W, I>(out: &mut W, headings: &[&str], rows: I) -> anyhow::Result<()>
where
    W: Write,
    I: Iterator<Item = Vec<String>>,
{
    let rows: Vec<Vec<String>> = rows.collect();
    let mut widths: Vec<usize> = headings.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(headings.iter().map(|h| h.to_string()).collect()))?;
    writeln!(
        out,
        "{}",
        line(widths.iter().map(|w| "-".repeat(*w)).collect())
    )?;
    if rows.is_empty() {
        writeln!(out, "(no rows)")?;
    }
    for row in rows {
        writeln!(out, "{}", line(row))?;
    }
    Ok(())
}

fn write_csv<W, I, T>(out: &mut W, rows: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

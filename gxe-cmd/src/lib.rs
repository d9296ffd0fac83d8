//! Command implementations for the GxE trial report CLI.
//!
//! Every subcommand loads a trial table, applies the filter options and runs
//! the full pipeline once before rendering its part of the report.

use clap::{Args, Subcommand, ValueEnum};
use std::io::Write;

pub mod report;
pub mod session;

use gxe_data::chart::ChartData;
use report::Report;
use session::Session;

#[derive(Subcommand)]
pub enum Command {
    /// Show the filtered trial table
    Preview(ReportArgs),

    /// Per-genotype performance summary
    Summary(ReportArgs),

    /// Per genotype x location mean yield (GxE interaction)
    Interaction(ReportArgs),

    /// Recommend the best genotype for the current filter
    Recommend(ReportArgs),

    /// Preview, summaries and recommendation in one report
    Report(ReportArgs),

    /// Export chart data series as JSON
    Chart {
        #[command(flatten)]
        data: DataArgs,

        /// Write the JSON here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

/// Where the trial table comes from and how it is filtered.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Trial table CSV (uses the built-in example table when omitted)
    #[arg(short = 'c', long, env = "GXE_TRIALS_CSV")]
    pub csv: Option<String>,

    /// Years to include (repeatable or comma-separated; default all)
    #[arg(short = 'y', long = "year", value_delimiter = ',')]
    pub years: Option<Vec<i32>>,

    /// Locations to include (repeatable or comma-separated; default all)
    #[arg(short = 'l', long = "location", value_delimiter = ',')]
    pub locations: Option<Vec<String>>,

    /// Genotypes to include (repeatable or comma-separated; default all)
    #[arg(short = 'g', long = "genotype", value_delimiter = ',')]
    pub genotypes: Option<Vec<String>>,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Run a command, writing its output to `out`.
pub fn run_to<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Preview(args) => with_report(&args, |r| r.preview(out)),
        Command::Summary(args) => with_report(&args, |r| r.genotype_summary(out)),
        Command::Interaction(args) => with_report(&args, |r| r.interaction(out)),
        Command::Recommend(args) => with_report(&args, |r| r.recommendation(out)),
        Command::Report(args) => with_report(&args, |r| r.full(out)),
        Command::Chart { data, output } => {
            let session = Session::open(&data)?;
            let chart = ChartData::from_output(&session.run_pipeline());
            let json = chart.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    log::info!("[GxE Debug] chart: Chart data written to {}", path);
                }
                None => writeln!(out, "{}", json)?,
            }
            Ok(())
        }
    }
}

fn with_report<F>(args: &ReportArgs, render: F) -> anyhow::Result<()>
where
    F: FnOnce(&Report) -> anyhow::Result<()>,
{
    let session = Session::open(&args.data)?;
    let report = Report::new(session.overview()?, session.run_pipeline(), args.format);
    render(&report)
}

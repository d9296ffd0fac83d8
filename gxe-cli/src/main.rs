//! GxE CLI - variety performance and genotype x environment trial reports.

use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "gxe-cli",
    version,
    about = "Variety performance and GxE analysis for multi-location crop trials"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: gxe_cmd::Command,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();
    gxe_cmd::run(cli.command)
}

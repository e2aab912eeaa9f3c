mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use app::PlotConfig;
use powerlaw_scope::analysis::fit::FitOptions;

/// Fit a power law to a file of integer counts, print summary statistics and
/// show them as a scatter plot. The input file is deleted after it is read.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// File with one integer per line
    path: PathBuf,

    /// Print the report without opening the plot window
    #[arg(long)]
    no_plot: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Usage: {} <path_to_file>", program_name());
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Analysis of {} failed: {e:#}", cli.path.display());
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let analysis = powerlaw_scope::analyze(&cli.path, FitOptions::default())?;
    print!("{}", analysis.report);

    if !cli.no_plot {
        app::show(&cli.path, analysis, PlotConfig::default())?;
    }
    Ok(())
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

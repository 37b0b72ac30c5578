//! Command line interface.
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use colored::*;

use rootlab::input::Params;
use rootlab::report::{self, Outcome};
use rootlab::root_finding::TerminationReason;
use rootlab::runner::Problem;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with `key=value` lines (function, derivative, g, a, b, x0, x1, tol, max_iter).
    input: PathBuf,
}

/// Loads the input file, runs every applicable method and writes
/// `results.txt` / `results.csv` next to the input.
pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let params = Params::load(&cli.input)?;
    let problem = Problem::from_params(params)
        .with_context(|| format!("invalid parameters in {}", cli.input.display()))?;

    let runs = problem.run_all();
    for run in &runs {
        let status = match &run.outcome {
            Outcome::Skipped => "skipped".yellow(),
            Outcome::Solved(s) if s.termination == TerminationReason::ToleranceReached
                => "converged".green(),
            Outcome::Solved(_) => "not converged".yellow(),
            Outcome::Failed(_) => "failed".red(),
        };
        eprintln!(" {} {}", run.method.display_name().blue(), status);
    }

    let out_dir = output_dir(&cli.input)?;
    let paths = report::write_reports(&runs, &out_dir)?;

    println!("{}", "OK".green());
    println!("{}", paths.text.display());
    println!("{}", paths.csv.display());
    Ok(())
}

/// Directory holding the input file, as an absolute path.
fn output_dir(input: &Path) -> anyhow::Result<PathBuf> {
    let abs = std::path::absolute(input)
        .with_context(|| format!("cannot resolve {}", input.display()))?;
    Ok(abs.parent().map(Path::to_path_buf).unwrap_or_default())
}

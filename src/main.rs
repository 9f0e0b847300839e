use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use astrogenomics::config::AnalysisProfile;
use astrogenomics::input::load_input;
use astrogenomics::logging::init_tracing;
use astrogenomics::pipeline::run_analysis;
use astrogenomics::pipeline::stage6_report::write_reports;

#[derive(Debug, Parser)]
#[command(name = "astrogenomics", version)]
#[command(about = "Correlate a birth chart with a genotype profile and validate the result")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse one request file and write summary.json and report.txt
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Request JSON with sample_id, chart and genotypes
    #[arg(long)]
    input: PathBuf,
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// Analysis profile JSON; defaults apply when omitted
    #[arg(long)]
    profile: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    alpha: Option<f64>,
    /// Bootstrap resamples
    #[arg(long)]
    bootstrap: Option<usize>,
    #[arg(long)]
    permutations: Option<usize>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> astrogenomics::Result<()> {
    match cli.command {
        Command::Run(args) => {
            let profile = build_profile(&args)?;
            let input = load_input(&args.input)?;
            let report = run_analysis(&input, &profile)?;
            write_reports(&report, &args.out)?;
            tracing::info!(
                sample = %report.sample_id,
                combined_correlation = report.overall_correlation,
                "analysis finished"
            );
            Ok(())
        }
    }
}

/// Profile file (or defaults) with command-line overrides applied on top.
fn build_profile(args: &RunArgs) -> astrogenomics::Result<AnalysisProfile> {
    let mut profile = match &args.profile {
        Some(path) => AnalysisProfile::load(path)?,
        None => AnalysisProfile::default_v1(),
    };
    if let Some(seed) = args.seed {
        profile.seed = seed;
    }
    if let Some(alpha) = args.alpha {
        profile.alpha = alpha;
    }
    if let Some(n) = args.bootstrap {
        profile.n_bootstrap = n;
    }
    if let Some(n) = args.permutations {
        profile.n_permutations = n;
    }
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

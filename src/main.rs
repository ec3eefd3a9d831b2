use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use percolation::config::SimulationConfig;
use percolation::percolation::stats::{interval_label, validate_parameters};
use percolation::percolation::{run_trial, Percolation, PercolationStats};
use percolation::logging;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const USAGE: &str = "percolation <grid-dimension> <trials-count>";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate the percolation threshold of an n-by-n grid by Monte-Carlo simulation",
    override_usage = USAGE
)]
struct Cli {
    /// Side length of the grid
    grid_size: Option<usize>,
    /// Number of independent trials
    trials: Option<usize>,
    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed the random generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Show a progress bar while trials run
    #[arg(long)]
    progress: bool,
    /// Print the grid of the final trial once it percolates
    #[arg(long)]
    show_last: bool,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    }
    .merge_cli(cli.grid_size, cli.trials, cli.seed, cli.progress);

    let (Some(grid_size), Some(trials)) = (config.grid_size, config.trials) else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let (stats, last_grid) = simulate(grid_size, trials, &config, &mut rng)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats.report())?);
    } else {
        println!("mean\t\t = {}", stats.mean());
        println!("stddev\t\t = {}", stats.stddev());
        println!(
            "{}\t\t = [{}, {}]",
            interval_label(stats.confidence_z()),
            stats.confidence_lo(),
            stats.confidence_hi()
        );
    }

    if cli.show_last {
        print!("{last_grid}");
    }
    Ok(())
}

fn simulate(
    grid_size: usize,
    trials: usize,
    config: &SimulationConfig,
    rng: &mut StdRng,
) -> CliResult<(PercolationStats, Percolation)> {
    validate_parameters(grid_size, trials)?;

    let progress = if config.progress {
        let bar = ProgressBar::new(trials as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} {msg}",
            )?
            .progress_chars("#>-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut samples = Vec::with_capacity(trials);
    let mut last_grid = None;
    for trial in 0..trials {
        let grid = run_trial(grid_size, rng)?;
        let threshold = grid.open_fraction();
        log::debug!("trial {}/{trials}: threshold {threshold:.6}", trial + 1);
        progress.set_message(format!("last threshold {threshold:.4}"));
        progress.inc(1);
        samples.push(threshold);
        last_grid = Some(grid);
    }
    progress.finish_and_clear();

    let stats = PercolationStats::from_samples(grid_size, samples, config.confidence_z)?;
    let last_grid = last_grid.ok_or("no trials were run")?;
    Ok((stats, last_grid))
}

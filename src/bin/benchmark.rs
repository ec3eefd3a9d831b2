use clap::Parser;
use percolation::logging;
use percolation::percolation::PercolationStats;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

struct BenchmarkResult {
    grid_size: usize,
    trials: usize,
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
    total_time_ms: f64,
    per_trial_ms: f64,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sweep grid sizes and report threshold estimates with timings"
)]
struct BenchmarkCli {
    /// Comma-separated list of grid sizes to benchmark (e.g. 16,32,64)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(usize))]
    sizes: Option<Vec<usize>>,
    /// Comma-separated list of trial counts to benchmark (e.g. 30,100)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(usize))]
    trials: Option<Vec<usize>>,
    /// Seed shared by every run
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() {
    logging::init();
    let cli = BenchmarkCli::parse();
    println!("=== Percolation Threshold Benchmark ===\n");

    let grid_sizes = cli.sizes.unwrap_or_else(|| vec![16, 32, 64, 128]);
    let trial_counts = cli.trials.unwrap_or_else(|| vec![50]);

    let mut all_results = Vec::new();
    for &grid_size in &grid_sizes {
        for &trials in &trial_counts {
            println!("Benchmarking n={grid_size}, {trials} trials");
            match run_benchmark(grid_size, trials, cli.seed) {
                Ok(result) => {
                    print_result(&result);
                    all_results.push(result);
                }
                Err(e) => {
                    eprintln!("  ✗ Benchmark failed: {e}");
                }
            }
            println!();
        }
    }

    println!("\n=== Summary Report ===\n");
    print_summary_table(&all_results);
    print_scaling_analysis(&all_results);
}

fn run_benchmark(
    grid_size: usize,
    trials: usize,
    seed: u64,
) -> Result<BenchmarkResult, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Instant::now();
    let stats = PercolationStats::with_rng(grid_size, trials, &mut rng)?;
    let total_time_ms = start.elapsed().as_secs_f64() * 1_000.0;

    Ok(BenchmarkResult {
        grid_size,
        trials,
        mean: stats.mean(),
        stddev: stats.stddev(),
        confidence_lo: stats.confidence_lo(),
        confidence_hi: stats.confidence_hi(),
        total_time_ms,
        per_trial_ms: total_time_ms / trials as f64,
    })
}

fn print_result(result: &BenchmarkResult) {
    println!(
        "  Threshold   → mean {:.6} | stddev {:.6} | 95% CI [{:.6}, {:.6}]",
        result.mean, result.stddev, result.confidence_lo, result.confidence_hi
    );
    println!(
        "  Timing      → total {:>10.2} ms | per trial {:>8.3} ms",
        result.total_time_ms, result.per_trial_ms
    );
}

fn print_summary_table(results: &[BenchmarkResult]) {
    println!(
        "{:<8} {:<8} {:<10} {:<10} {:<10} {:<10} {:<12} {:<12}",
        "n", "Trials", "Mean", "Stddev", "CI lo", "CI hi", "Total(ms)", "Trial(ms)"
    );
    println!("{}", "-".repeat(86));

    for result in results {
        println!(
            "{:<8} {:<8} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<12.2} {:<12.3}",
            result.grid_size,
            result.trials,
            result.mean,
            result.stddev,
            result.confidence_lo,
            result.confidence_hi,
            result.total_time_ms,
            result.per_trial_ms
        );
    }
}

fn print_scaling_analysis(results: &[BenchmarkResult]) {
    println!("\n=== Scaling Analysis ===\n");

    if results.len() < 2 {
        println!("  Need at least two runs to estimate scaling.");
        return;
    }

    let first = &results[0];
    let last = &results[results.len() - 1];
    let site_ratio = (last.grid_size * last.grid_size) as f64
        / (first.grid_size * first.grid_size) as f64;
    let time_ratio = last.per_trial_ms / first.per_trial_ms;

    println!(
        "  Sites: {} → {} ({:.1}x increase)",
        first.grid_size * first.grid_size,
        last.grid_size * last.grid_size,
        site_ratio
    );
    println!("  Per-trial time scaling: {:.2}x", time_ratio);
    if site_ratio > 1.0 && time_ratio.is_finite() && time_ratio > 0.0 {
        println!(
            "  Empirical complexity: O(sites^{:.2})",
            time_ratio.log(site_ratio)
        );
    }
}

use clap::Parser;
use percolation::logging;
use percolation::utils::permutation::{random_sample, sample_tokens};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufWriter, Write};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print k tokens sampled uniformly without replacement from standard input"
)]
struct PermutationCli {
    /// Number of tokens to print
    k: usize,
    /// Seed the random generator for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = PermutationCli::parse();
    let input = io::stdin().lock();
    let tokens = match cli.seed {
        Some(seed) => sample_tokens(input, cli.k, StdRng::seed_from_u64(seed))?,
        None => random_sample(input, cli.k)?,
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()?;
    Ok(())
}

use crate::error::PercolationError;
use crate::percolation::grid::Percolation;
use crate::utils::stats;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// z-score of the two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Monte-Carlo estimate of the percolation threshold of an `n`-by-`n` grid.
///
/// All trials run inside the constructor; the accessors are pure functions of
/// the recorded samples afterwards.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    samples: Vec<f64>,
    confidence_z: f64,
}

/// Summary of a finished run, shaped for serialisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub grid_size: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
}

impl PercolationStats {
    /// Runs `trials` experiments on fresh `n`-by-`n` grids using the thread-local RNG.
    pub fn new(n: usize, trials: usize) -> Result<Self, PercolationError> {
        Self::with_rng(n, trials, &mut rand::rng())
    }

    pub fn with_rng(
        n: usize,
        trials: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, PercolationError> {
        validate_parameters(n, trials)?;

        let mut samples = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = run_trial(n, rng)?.open_fraction();
            log::debug!("trial {}/{trials} on n = {n}: threshold {threshold:.6}", trial + 1);
            samples.push(threshold);
        }

        Self::from_samples(n, samples, CONFIDENCE_95)
    }

    /// Wraps thresholds that were collected elsewhere, e.g. by a driver that
    /// reports progress between trials.
    pub fn from_samples(
        n: usize,
        samples: Vec<f64>,
        confidence_z: f64,
    ) -> Result<Self, PercolationError> {
        validate_parameters(n, samples.len())?;
        let stats = PercolationStats {
            grid_size: n,
            samples,
            confidence_z,
        };
        log::info!(
            "n = {n}, trials = {}: mean {:.6}, stddev {:.6}",
            stats.trials(),
            stats.mean(),
            stats.stddev()
        );
        Ok(stats)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn confidence_z(&self) -> f64 {
        self.confidence_z
    }

    pub fn mean(&self) -> f64 {
        stats::mean(&self.samples).unwrap_or(f64::NAN)
    }

    /// Sample standard deviation of the thresholds.
    ///
    /// A single trial has no spread estimate, so this is NaN when `trials == 1`,
    /// and both confidence bounds are NaN with it.
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.samples).unwrap_or(f64::NAN)
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    pub fn report(&self) -> StatsReport {
        StatsReport {
            grid_size: self.grid_size,
            trials: self.trials(),
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_lo: self.confidence_lo(),
            confidence_hi: self.confidence_hi(),
        }
    }

    fn half_width(&self) -> f64 {
        self.confidence_z * self.stddev() / (self.trials() as f64).sqrt()
    }
}

/// Opens uniformly random sites of a fresh `n`-by-`n` grid until it percolates
/// and returns the percolated grid.
///
/// Draws that land on an already open site are simply repeated; the loop ends
/// because every closed site keeps a positive chance of being drawn.
pub fn run_trial(n: usize, rng: &mut impl Rng) -> Result<Percolation, PercolationError> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = rng.random_range(1..=n);
        let col = rng.random_range(1..=n);
        grid.open(row, col)?;
    }
    Ok(grid)
}

/// Name of the interval spanned by `z` standard errors either side of the mean.
pub fn interval_label(z: f64) -> String {
    if (z - CONFIDENCE_95).abs() < 1e-9 {
        "95% confidence interval".to_owned()
    } else {
        format!("confidence interval (z = {z})")
    }
}

/// Rejects a zero grid size or a zero trial count.
pub fn validate_parameters(n: usize, trials: usize) -> Result<(), PercolationError> {
    if n == 0 {
        return Err(PercolationError::InvalidGridSize(n));
    }
    if trials == 0 {
        return Err(PercolationError::InvalidTrials(trials));
    }
    Ok(())
}

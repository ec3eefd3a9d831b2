//! Monte-Carlo estimation of the percolation threshold of a square grid,
//! together with the double-ended and randomized queues used by the
//! `permutation` sampler.

pub mod collections;
pub mod config;
pub mod error;
pub mod logging;
pub mod percolation;
pub mod utils;

pub use collections::{Deque, RandomizedQueue};
pub use config::{ConfigError, SimulationConfig};
pub use error::{CollectionError, PercolationError, PermutationError};
pub use percolation::{run_trial, Percolation, PercolationStats, StatsReport, WeightedQuickUnion};

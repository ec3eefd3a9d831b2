pub mod grid;
pub mod stats;
pub mod union_find;

pub use grid::Percolation;
pub use stats::{run_trial, PercolationStats, StatsReport, CONFIDENCE_95};
pub use union_find::WeightedQuickUnion;

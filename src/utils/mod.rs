pub mod permutation;
pub mod stats;

use thiserror::Error;

/// Invalid-argument conditions raised by the grid model and the statistics driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    #[error("grid size must be greater than 0, got {0}")]
    InvalidGridSize(usize),

    #[error("trials must be greater than 0, got {0}")]
    InvalidTrials(usize),

    #[error("row index is out of bounds for n = {n}. r:{row}, c:{col}")]
    RowOutOfBounds { row: usize, col: usize, n: usize },

    #[error("col index is out of bounds for n = {n}. r:{row}, c:{col}")]
    ColOutOfBounds { row: usize, col: usize, n: usize },
}

/// Raised when removing or sampling from a container with no elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("{0} is empty")]
    Empty(&'static str),
}

#[derive(Debug, Error)]
pub enum PermutationError {
    #[error("failed to read tokens: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot draw {requested} tokens: {source}")]
    NotEnoughTokens {
        requested: usize,
        #[source]
        source: CollectionError,
    },
}

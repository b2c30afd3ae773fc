use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a time grid was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid needs at least 2 points (got {len})")]
    TooShort { len: usize },
    #[error("grid of {steps} steps cannot be allocated")]
    TooManySteps { steps: usize },
    #[error("grid point {index} is not finite")]
    NonFinite { index: usize },
    #[error("grid is not strictly increasing at index {index}")]
    NotIncreasing { index: usize },
    #[error("grid spacing at index {index} is {found}, expected {expected}")]
    NonUniform { index: usize, expected: f64, found: f64 },
}

/// Errors raised while building or integrating an initial value problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid time grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("initial state is empty")]
    EmptyState,

    #[error("{name}: right-hand side is not implemented")]
    Unimplemented { name: String },

    #[error("{name}: no exact solution is known")]
    NoExactSolution { name: String },

    #[error("parameter {name} must be finite and positive (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },
}

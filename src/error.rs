use thiserror::Error;

/// Main error type for the learning agent
#[derive(Error, Debug)]
pub enum GridqError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Degenerate bounds for dimension {dimension}: low {low} must be below high {high}")]
    DegenerateBounds {
        dimension: usize,
        low: f64,
        high: f64,
    },

    #[error("Dimension {dimension} has a zero bucket count")]
    ZeroBuckets { dimension: usize },

    #[error("Bound override targets dimension {dimension}, observation has {dimensions}")]
    OverrideOutOfRange { dimension: usize, dimensions: usize },

    // Collaborator contract errors
    #[error("Observation has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Environment error: {0}")]
    Environment(String),

    // Numeric errors
    #[error("Q-value for state {state:?} action {action} became non-finite: {value}")]
    NumericDegenerate {
        state: Vec<usize>,
        action: usize,
        value: f64,
    },

    // Generic errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for GridqError
pub type Result<T> = std::result::Result<T, GridqError>;

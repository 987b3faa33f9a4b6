//! Error types for MCMC post-processing
//!
//! Provides a unified error type shared by all mcmc-diagnostics crates.

use thiserror::Error;

/// Core error type for post-processing operations
#[derive(Error, Debug)]
pub enum Error {
    /// Arithmetic between series that were not collected over the same epochs
    #[error("Mismatched epochs: series were not collected over the same epochs")]
    MismatchedEpochs,

    /// Exact-match epoch lookup failed
    #[error("Epoch {epoch} is not present in the series")]
    EpochNotFound { epoch: u64 },

    /// Histogram bin count not divisible by the requested grouping factor
    #[error("Invalid grouping: {n_bins} bins cannot be merged in groups of {n_groups}")]
    InvalidGrouping { n_bins: usize, n_groups: usize },

    /// Zero-variance input whose autocorrelation is undefined
    #[error("Degenerate series: zero variance, autocorrelation is undefined")]
    DegenerateSeries,

    /// A file that does not follow its declared format
    #[error("Malformed file at line {line}: {reason}")]
    MalformedFile { line: usize, reason: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a line that does not parse
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedFile {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

//! Autocorrelation analysis for Markov chain Monte Carlo output
//!
//! Successive MCMC samples are correlated, so the naive standard error
//! of a chain mean understates the true uncertainty. The correction
//! factor is the integrated autocorrelation time: the number of epochs
//! separating effectively independent samples. This crate estimates it
//! in two stages:
//!
//! 1. the normalized autocorrelation function, computed in O(n log n)
//!    via zero-padded FFTs ([`autocorrelation`], with
//!    [`autocorrelation_averaged`] for independent repeats);
//! 2. the integrated time under Sokal's adaptive windowing rule
//!    ([`integrated_time`]), which truncates the noisy tail of the sum
//!    and reports explicitly whether a valid window was found.
//!
//! # Examples
//!
//! ```rust
//! use mcmc_autocorr::{autocorrelation, integrated_time, SOKAL_WINDOW_CUTOFF};
//!
//! // A chain with strong memory: each sample keeps 80% of the last.
//! let mut state = 0.0_f64;
//! let chain: Vec<f64> = (0..8192)
//!     .map(|i| {
//!         let kick = ((i * 2654435761_usize) % 1000) as f64 / 1000.0 - 0.5;
//!         state = 0.8 * state + kick;
//!         state
//!     })
//!     .collect();
//!
//! let acf = autocorrelation(&chain, true).unwrap();
//! assert!((acf[0] - 1.0).abs() < 1e-12);
//!
//! // Averaging this chain buys far fewer independent samples than its
//! // raw length suggests.
//! let estimate = integrated_time(&chain, SOKAL_WINDOW_CUTOFF).unwrap();
//! assert!(estimate.reliable);
//! assert!(estimate.tau > 3.0);
//! ```

pub mod acf;
pub mod sokal;

pub use acf::{autocorrelation, autocorrelation_averaged};
pub use sokal::{
    integrated_time, integrated_time_from_autocorrelation, IntegratedTime, SOKAL_WINDOW_CUTOFF,
};

// Re-export the shared error type for convenience
pub use mcmc_core::{Error, Result};

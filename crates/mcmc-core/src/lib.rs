//! Core containers and summary statistics for MCMC post-processing
//!
//! This crate provides the epoch-indexed series container shared by the
//! mcmc-diagnostics ecosystem, together with the summary statistics
//! reported for equilibrated Markov chain Monte Carlo estimates.
//!
//! # Key Features
//!
//! - **Epoch-aware container**: values stay paired with the epochs they
//!   were sampled at, so misaligned arithmetic is an error instead of a
//!   silently wrong result
//! - **Strict slicing**: epoch bounds must match exactly; off-by-one
//!   block-index bugs surface as [`Error::EpochNotFound`]
//! - **Summary statistics**: mean, population standard deviation and
//!   standard error of the mean, plus running prefix versions for
//!   convergence checks
//! - **Shared error type**: one [`Error`] enum used across the ecosystem
//!
//! # Examples
//!
//! ```rust
//! use mcmc_core::{statistics, PropertySeries};
//!
//! // Kinetic energy sampled over six epochs; the first two are
//! // pre-equilibration and get sliced away before averaging.
//! let energy = PropertySeries::new(
//!     vec![0, 1, 2, 3, 4, 5],
//!     vec![9.1, 4.3, 2.1, 2.0, 2.2, 1.9],
//! )
//! .unwrap();
//!
//! let equilibrated = energy.slice_by_epoch(2, 6).unwrap();
//! let stats = statistics(&equilibrated).unwrap();
//!
//! assert_eq!(stats.n_samples, 4);
//! assert!((stats.mean - 2.05).abs() < 1e-12);
//! ```

pub mod error;
pub mod series;
pub mod statistics;

pub use error::{Error, Result};
pub use series::{PropertySeries, SeriesValue};
pub use statistics::{cumulative_statistics, statistics, CumulativeStatistics, SeriesStatistics};

//! Post-processing diagnostics for Markov chain Monte Carlo output
//!
//! A simulation engine leaves behind a directory of text files per run:
//! property streams sampled once per epoch, histograms, move-acceptance
//! counters. This workspace turns those files into defensible numbers.
//! The member crates split the pipeline:
//!
//! - [`mcmc_core`]: the epoch-indexed [`PropertySeries`] container with
//!   exact-epoch slicing, validated arithmetic, and summary statistics
//!   (re-exported at the root here);
//! - [`autocorr`]: FFT autocorrelation functions and integrated
//!   autocorrelation times under the adaptive window rule;
//! - [`histogram`]: binned counts, regrouping, and radial distribution
//!   functions;
//! - [`io`]: readers and writers for the engine's on-disk formats, plus
//!   a typed per-simulation reader.
//!
//! On top of those, [`analysis`] bundles the per-property numbers a
//! report quotes, and [`batch`] shards that work across independent
//! simulations.
//!
//! # Examples
//!
//! From engine output text to an error bar that accounts for
//! autocorrelation:
//!
//! ```rust
//! use mcmc_diagnostics::io::read_property_series;
//! use mcmc_diagnostics::prelude::*;
//!
//! // One kinetic-energy estimate per epoch, with epoch-to-epoch memory.
//! let mut file = String::from("# kinetic energy estimates\n");
//! let mut state = 0.0_f64;
//! for epoch in 0..512_usize {
//!     let kick = ((epoch * 2654435761) % 1000) as f64 / 1000.0 - 0.5;
//!     state = 0.5 * state + kick;
//!     file.push_str(&format!("{epoch:05}   {:.8e}\n", 1.5 + state));
//! }
//!
//! let series = read_property_series(file.as_bytes(), 1.0).unwrap();
//! assert_eq!(series.len(), 512);
//!
//! // Discard the first 16 epochs as equilibration, then summarize.
//! let bundle = property_diagnostics(&series, 16, SOKAL_WINDOW_CUTOFF).unwrap();
//! assert_eq!(bundle.statistics.first_epoch, 16);
//! assert!(bundle.integrated_time.tau > 1.0);
//! assert!(bundle.corrected_std_err_mean > bundle.statistics.std_err_mean);
//! ```

pub mod analysis;
pub mod batch;

pub use analysis::{property_diagnostics, PropertyDiagnostics};
pub use batch::run_batch;

// The series container is the currency of every API here; its surface
// lives at the root.
pub use mcmc_core::{
    cumulative_statistics, statistics, CumulativeStatistics, Error, PropertySeries, Result,
    SeriesStatistics, SeriesValue,
};

pub use mcmc_autocorr as autocorr;
pub use mcmc_histogram as histogram;
pub use mcmc_io as io;

/// Convenient imports for the common analysis flow
pub mod prelude {
    pub use crate::analysis::{property_diagnostics, PropertyDiagnostics};
    pub use crate::batch::run_batch;
    pub use mcmc_autocorr::{integrated_time, IntegratedTime, SOKAL_WINDOW_CUTOFF};
    pub use mcmc_core::{
        statistics, Error, PropertySeries, Result, SeriesStatistics,
    };
    pub use mcmc_histogram::{radial_distribution, rebin, Histogram, OutOfRangePolicy};
    pub use mcmc_io::{OutputLocator, SimulationReader};
}

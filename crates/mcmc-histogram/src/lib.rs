//! Histogram regrouping and radial distribution functions
//!
//! Simulation codes accumulate distance histograms at fine resolution
//! so that no rebinning decision has to be made while sampling. This
//! crate handles the post-processing side: coarsening those bins into
//! groups and turning pair-distance counts into a radial distribution
//! function g(r).
//!
//! # Example
//!
//! ```
//! use mcmc_histogram::{Histogram, OutOfRangePolicy, rebin, radial_distribution};
//!
//! // Counts proportional to r^2 describe an uncorrelated medium
//! let counts: Vec<u64> = (0..8).map(|i| (2 * i + 1) * (2 * i + 1)).collect();
//! let histogram = Histogram::new(OutOfRangePolicy::DoNothing, 0.0, 8.0, counts)?;
//!
//! let grouped = rebin(&histogram, 2)?;
//! assert_eq!(grouped.counts(), &[10, 74, 202, 394]);
//!
//! let rdf = radial_distribution(&histogram, 1)?;
//! for g in rdf.values() {
//!     assert!((g - 1.0).abs() < 1e-12);
//! }
//! # Ok::<(), mcmc_histogram::Error>(())
//! ```

pub mod histogram;
pub mod rdf;
pub mod rebin;

pub use histogram::{Histogram, OutOfRangePolicy};
pub use rdf::{radial_distribution, RadialDistribution};
pub use rebin::{rebin, GroupedBins};

pub use mcmc_core::{Error, Result};

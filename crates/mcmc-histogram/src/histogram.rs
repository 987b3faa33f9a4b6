//! The fixed-layout histogram value type
//!
//! Simulations accumulate counts into regularly spaced bins whose layout
//! is fixed up front (minimum, maximum, bin count); only the counts and
//! the layout are persisted. This mirrors that representation: no raw
//! samples, just the layout and one count per bin.

use mcmc_core::{Error, Result};

/// What the accumulating side does with samples outside `[min, max]`
///
/// The policy travels with the histogram because it changes how the
/// counts must be read: under [`DoNothing`](Self::DoNothing) the counts
/// are a truncated view of the sampled distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfRangePolicy {
    /// Out-of-range samples were silently dropped
    DoNothing,
    /// Out-of-range samples aborted the simulation
    Throw,
}

impl OutOfRangePolicy {
    /// Decode the integer policy code used on disk
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::DoNothing),
            1 => Ok(Self::Throw),
            _ => Err(Error::InvalidParameter(format!(
                "unknown out-of-range policy code {code}"
            ))),
        }
    }

    /// The integer policy code used on disk
    pub fn code(&self) -> u8 {
        match self {
            Self::DoNothing => 0,
            Self::Throw => 1,
        }
    }
}

/// A histogram over regularly spaced bins
///
/// `counts[i]` covers `[min + i * width, min + (i + 1) * width)` with
/// `width = (max - min) / bin_count`. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    policy: OutOfRangePolicy,
    min: f64,
    max: f64,
    counts: Vec<u64>,
}

impl Histogram {
    /// Create a histogram from its layout and per-bin counts
    ///
    /// Fails unless `min < max`, both are finite, and there is at least
    /// one bin.
    pub fn new(policy: OutOfRangePolicy, min: f64, max: f64, counts: Vec<u64>) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{min}, {max}] must be finite"
            )));
        }
        if min >= max {
            return Err(Error::InvalidParameter(format!(
                "histogram minimum {min} must lie below maximum {max}"
            )));
        }
        if counts.is_empty() {
            return Err(Error::empty_input("histogram counts"));
        }
        Ok(Self {
            policy,
            min,
            max,
            counts,
        })
    }

    /// Get the out-of-range policy the counts were accumulated under
    pub fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// Get the inclusive lower edge of the first bin
    pub fn minimum(&self) -> f64 {
        self.min
    }

    /// Get the upper edge of the last bin
    pub fn maximum(&self) -> f64 {
        self.max
    }

    /// Get the per-bin counts
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Get the number of bins
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Get the common width of the bins
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// Get the total number of accumulated samples
    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Compute the `bin_count + 1` bin edges
    pub fn edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..=self.counts.len())
            .map(|i| self.min + i as f64 * width)
            .collect()
    }
}

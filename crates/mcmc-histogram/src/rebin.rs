//! Merging adjacent histogram bins into coarser groups
//!
//! Long production runs accumulate into finely binned histograms; for
//! analysis, runs of adjacent bins get merged to tame the per-bin
//! noise. Only exact regroupings are allowed: the grouping factor must
//! divide the bin count so every merged bin covers the same number of
//! originals and no count is split.

use mcmc_core::{Error, Result};

use crate::histogram::Histogram;

/// A histogram regrouped into coarser, equally sized bins
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBins {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl GroupedBins {
    /// Get the `len() + 1` edges of the grouped bins
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Get the left edge of every grouped bin
    pub fn left_edges(&self) -> &[f64] {
        &self.edges[..self.counts.len()]
    }

    /// Compute the centre of every grouped bin
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|pair| 0.5 * (pair[0] + pair[1]))
            .collect()
    }

    /// Get the summed count of every grouped bin
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Get the number of grouped bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether there are no grouped bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Merge every run of `n_groups` adjacent bins into one
///
/// The result has `bin_count / n_groups` bins over the same range, each
/// holding the sum of the originals it covers. `n_groups = 1` returns
/// the histogram unchanged. Fails with [`Error::InvalidGrouping`]
/// unless `n_groups` is at least one and divides the bin count exactly.
///
/// # Examples
///
/// ```
/// use mcmc_histogram::{rebin, Histogram, OutOfRangePolicy};
///
/// let histogram =
///     Histogram::new(OutOfRangePolicy::DoNothing, 0.0, 4.0, vec![10, 20, 20, 10]).unwrap();
/// let grouped = rebin(&histogram, 2).unwrap();
///
/// assert_eq!(grouped.edges(), &[0.0, 2.0, 4.0]);
/// assert_eq!(grouped.counts(), &[30, 30]);
/// ```
pub fn rebin(histogram: &Histogram, n_groups: usize) -> Result<GroupedBins> {
    let n_bins = histogram.bin_count();
    if n_groups == 0 || n_bins % n_groups != 0 {
        return Err(Error::InvalidGrouping { n_bins, n_groups });
    }

    let n_grouped = n_bins / n_groups;
    let counts: Vec<u64> = histogram
        .counts()
        .chunks(n_groups)
        .map(|group| group.iter().sum())
        .collect();

    let group_width = (histogram.maximum() - histogram.minimum()) / n_grouped as f64;
    let edges: Vec<f64> = (0..=n_grouped)
        .map(|i| histogram.minimum() + i as f64 * group_width)
        .collect();

    Ok(GroupedBins { edges, counts })
}

//! Radial distribution functions from distance histograms
//!
//! A histogram of pair distances overweights large radii simply because
//! a shell at radius r holds surface proportional to r^2. Dividing the
//! (normalized) counts by the (normalized) squared bin centres removes
//! that geometric factor and yields g(r), which tends to one for an
//! uncorrelated medium.

use mcmc_core::{Error, Result};

use crate::histogram::Histogram;
use crate::rebin::rebin;

/// A radial distribution function over grouped bin centres
#[derive(Debug, Clone, PartialEq)]
pub struct RadialDistribution {
    distances: Vec<f64>,
    values: Vec<f64>,
}

impl RadialDistribution {
    /// Get the bin-centre distances
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Get g(r) at each distance
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether there are no points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Unit-spacing trapezoidal integral
fn trapezoid(values: &[f64]) -> f64 {
    values
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]))
        .sum()
}

/// Compute g(r) from a distance histogram regrouped by `n_groups`
///
/// Merges every `n_groups` adjacent bins per [`rebin`], then divides
/// the trapezoid-normalized counts by the trapezoid-normalized squared
/// bin centres.
///
/// Degenerate inputs fail with [`Error::Computation`] instead of
/// producing infinities: fewer than two grouped bins (the trapezoid
/// normalization needs an interval), an all-zero count vector, or a bin
/// centred at exactly zero.
pub fn radial_distribution(histogram: &Histogram, n_groups: usize) -> Result<RadialDistribution> {
    let grouped = rebin(histogram, n_groups)?;
    if grouped.len() < 2 {
        return Err(Error::Computation(format!(
            "radial distribution needs at least 2 grouped bins, got {}",
            grouped.len()
        )));
    }

    let distances = grouped.centers();
    if distances.iter().any(|&r| r == 0.0) {
        return Err(Error::Computation(
            "bin centred at exactly zero: cannot divide by r^2".to_string(),
        ));
    }

    let mut r_squared: Vec<f64> = distances.iter().map(|&r| r * r).collect();
    let r_squared_integral = trapezoid(&r_squared);
    for value in r_squared.iter_mut() {
        *value /= r_squared_integral;
    }

    let mut values: Vec<f64> = grouped.counts().iter().map(|&c| c as f64).collect();
    let count_integral = trapezoid(&values);
    if count_integral == 0.0 {
        return Err(Error::Computation(
            "histogram holds no counts: cannot normalize".to_string(),
        ));
    }
    for value in values.iter_mut() {
        *value /= count_integral;
    }

    for (value, r2) in values.iter_mut().zip(r_squared.iter()) {
        *value /= r2;
    }

    Ok(RadialDistribution { distances, values })
}

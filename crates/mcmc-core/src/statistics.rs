//! Summary statistics for property series
//!
//! The reporting convention for MCMC estimates: sample mean, population
//! standard deviation (divide by n, not n - 1), and the naive standard
//! error of the mean. The naive SEM ignores autocorrelation; correcting
//! it is the job of the autocorrelation crate.

use std::fmt;

use crate::error::{Error, Result};
use crate::series::{PropertySeries, SeriesValue};

/// Summary statistics of one property series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStatistics {
    /// Epoch of the first sample that entered the statistics
    pub first_epoch: u64,
    /// Number of samples
    pub n_samples: usize,
    /// Sample mean
    pub mean: f64,
    /// Population standard deviation (divide by n)
    pub std_dev: f64,
    /// Standard error of the mean, `std_dev / sqrt(n)`
    pub std_err_mean: f64,
}

impl fmt::Display for SeriesStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, mean = {:.8e} +/- {:.8e} (stddev = {:.8e}, from epoch {})",
            self.n_samples, self.mean, self.std_err_mean, self.std_dev, self.first_epoch
        )
    }
}

/// Running prefix statistics of one property series
///
/// Entry `i` summarizes the first `i + 1` samples; plotting the means
/// against epoch is the usual convergence check.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeStatistics {
    means: Vec<f64>,
    std_err_means: Vec<f64>,
}

impl CumulativeStatistics {
    /// Get the running means
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Get the running standard errors of the mean
    pub fn std_err_means(&self) -> &[f64] {
        &self.std_err_means
    }

    /// Get the number of prefixes summarized
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// Check whether any prefixes were summarized
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

fn float_values<T: SeriesValue>(series: &PropertySeries<T>) -> Result<Vec<f64>> {
    series
        .values()
        .iter()
        .map(|v| {
            v.to_f64()
                .ok_or_else(|| Error::Computation("value not representable as f64".to_string()))
        })
        .collect()
}

/// Compute the summary statistics of a series
///
/// Fails on an empty series.
///
/// # Examples
///
/// ```
/// use mcmc_core::{statistics, PropertySeries};
///
/// let series = PropertySeries::new(vec![0, 1, 2, 3, 4], vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let stats = statistics(&series).unwrap();
///
/// assert_eq!(stats.n_samples, 5);
/// assert!((stats.mean - 3.0).abs() < 1e-12);
/// assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn statistics<T: SeriesValue>(series: &PropertySeries<T>) -> Result<SeriesStatistics> {
    let first_epoch = series
        .first_epoch()
        .ok_or_else(|| Error::empty_input("series statistics"))?;

    let values = float_values(series)?;
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    Ok(SeriesStatistics {
        first_epoch,
        n_samples: values.len(),
        mean,
        std_dev,
        std_err_mean: std_dev / n.sqrt(),
    })
}

/// Compute running means and SEMs for every prefix of a series
///
/// A single pass over running sums; the variance of each prefix comes
/// from `E[x^2] - E[x]^2`, clamped at zero against floating-point
/// cancellation on near-constant data. An empty series yields an empty
/// result.
pub fn cumulative_statistics<T: SeriesValue>(
    series: &PropertySeries<T>,
) -> Result<CumulativeStatistics> {
    let values = float_values(series)?;
    let mut means = Vec::with_capacity(values.len());
    let mut std_err_means = Vec::with_capacity(values.len());

    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for (i, v) in values.into_iter().enumerate() {
        sum += v;
        sum_sq += v * v;
        let n = (i + 1) as f64;
        let mean = sum / n;
        let variance = (sum_sq / n - mean * mean).max(0.0);
        means.push(mean);
        std_err_means.push((variance / n).sqrt());
    }

    Ok(CumulativeStatistics {
        means,
        std_err_means,
    })
}

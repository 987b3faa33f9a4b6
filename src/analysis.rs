//! Per-property diagnostics over the equilibrated samples
//!
//! The per-simulation unit of work: discard the pre-equilibration
//! prefix of one property series, then report the numbers a production
//! summary quotes for it. The interesting output is the corrected
//! standard error, which scales the naive one by the square root of the
//! integrated autocorrelation time.

use std::fmt;

use log::debug;

use mcmc_autocorr::{integrated_time, IntegratedTime};
use mcmc_core::{statistics, PropertySeries, Result, SeriesStatistics};

/// Diagnostics of one property over its equilibrated samples
///
/// `corrected_std_err_mean` is `std_dev * sqrt(tau / n)`; when `tau` is
/// estimated at one, it coincides with the naive
/// [`std_err_mean`](SeriesStatistics::std_err_mean). As with
/// [`IntegratedTime::effective_samples`], the corrected quantities are
/// only meaningful for positive `tau`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDiagnostics {
    /// Summary statistics of the equilibrated slice
    pub statistics: SeriesStatistics,
    /// Integrated autocorrelation time of the equilibrated slice
    pub integrated_time: IntegratedTime,
    /// Effective number of independent samples, `n / tau`
    pub effective_samples: f64,
    /// Standard error of the mean corrected for autocorrelation
    pub corrected_std_err_mean: f64,
}

impl fmt::Display for PropertyDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, mean = {:.8e} +/- {:.8e} (tau = {:.3}, n_eff = {:.1}, from epoch {})",
            self.statistics.n_samples,
            self.statistics.mean,
            self.corrected_std_err_mean,
            self.integrated_time.tau,
            self.effective_samples,
            self.statistics.first_epoch
        )
    }
}

/// Compute the diagnostics bundle for one property series
///
/// `equilibration_epoch` must be a stored epoch; everything before it
/// is discarded and everything from it onwards enters the statistics.
/// `cutoff` is the adaptive window parameter, normally
/// [`SOKAL_WINDOW_CUTOFF`](mcmc_autocorr::SOKAL_WINDOW_CUTOFF). An
/// unreliable window estimate is carried through in
/// [`integrated_time`](PropertyDiagnostics::integrated_time) rather
/// than failing the bundle.
pub fn property_diagnostics(
    series: &PropertySeries<f64>,
    equilibration_epoch: u64,
    cutoff: f64,
) -> Result<PropertyDiagnostics> {
    let start = series.index_of_epoch(equilibration_epoch)?;
    let equilibrated = series.slice_by_index(start, series.len());

    let statistics = statistics(&equilibrated)?;
    let time = integrated_time(equilibrated.values(), cutoff)?;

    let n = equilibrated.len();
    let effective_samples = time.effective_samples(n);
    let corrected_std_err_mean = statistics.std_dev * (time.tau / n as f64).sqrt();
    debug!(
        "diagnostics over {n} samples from epoch {equilibration_epoch}: \
         mean = {:.6e}, tau = {:.3}",
        statistics.mean, time.tau
    );

    Ok(PropertyDiagnostics {
        statistics,
        integrated_time: time,
        effective_samples,
        corrected_std_err_mean,
    })
}

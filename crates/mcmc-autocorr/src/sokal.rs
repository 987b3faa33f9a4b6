//! Integrated autocorrelation time via adaptive windowing
//!
//! Summing the autocorrelation function over every lag lets the noise in
//! the tail dominate, so the running estimate is truncated with Sokal's
//! adaptive rule: stop at the first window at least `cutoff` times the
//! estimate it produces. When no window qualifies the chain is too short
//! relative to its own correlation time; that condition is reported
//! explicitly instead of being folded into the returned value.

use log::warn;

use mcmc_core::{Error, Result};

use crate::acf::autocorrelation;

/// Default adaptive-window cutoff
pub const SOKAL_WINDOW_CUTOFF: f64 = 5.0;

/// An integrated autocorrelation time estimate
///
/// `tau` is measured in epochs between stored samples. Roughly one in
/// `tau` samples carries independent information, which is what makes
/// this the correction factor between the naive and the true standard
/// error of an MCMC mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratedTime {
    /// The integrated autocorrelation time estimate
    pub tau: f64,
    /// The window (largest lag summed) selected by the cutoff rule
    pub window: usize,
    /// False when no window satisfied the cutoff rule and the last lag
    /// was used instead; the chain is then too short for `tau` to be
    /// trusted
    pub reliable: bool,
}

impl IntegratedTime {
    /// Effective number of independent samples among `n_samples` correlated ones
    ///
    /// Strongly anticorrelated chains can estimate `tau` below one (or
    /// even negative); the ratio is only meaningful for positive `tau`.
    pub fn effective_samples(&self, n_samples: usize) -> f64 {
        n_samples as f64 / self.tau
    }
}

/// Estimate the integrated autocorrelation time from a normalized
/// autocorrelation function
///
/// The running estimate over a window `M` is
/// `tau[M] = 2 * (acf[0] + ... + acf[M]) - 1`, which counts lag zero
/// once and doubles the rest. The reported estimate uses the first
/// window `M >= cutoff * tau[M]`; if none qualifies, the last lag is
/// used and the result is marked unreliable.
pub fn integrated_time_from_autocorrelation(
    acf: &[f64],
    cutoff: f64,
) -> Result<IntegratedTime> {
    if acf.is_empty() {
        return Err(Error::empty_input("integrated autocorrelation time"));
    }
    if !cutoff.is_finite() || cutoff <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "window cutoff must be positive and finite, got {cutoff}"
        )));
    }

    let mut running_sum = 0.0;
    let mut taus = Vec::with_capacity(acf.len());
    for &value in acf {
        running_sum += value;
        taus.push(2.0 * running_sum - 1.0);
    }

    for (window, &tau) in taus.iter().enumerate() {
        if window as f64 >= cutoff * tau {
            return Ok(IntegratedTime {
                tau,
                window,
                reliable: true,
            });
        }
    }

    let window = taus.len() - 1;
    warn!(
        "no window among {} lags reached {cutoff} times the running integrated time; \
         the chain is too short for a reliable estimate",
        taus.len()
    );
    Ok(IntegratedTime {
        tau: taus[window],
        window,
        reliable: false,
    })
}

/// Estimate the integrated autocorrelation time of a chain
///
/// Composes the normalized FFT autocorrelation estimate with the
/// adaptive window scan. Use [`SOKAL_WINDOW_CUTOFF`] unless there is a
/// reason not to.
///
/// # Examples
///
/// ```
/// use mcmc_autocorr::{integrated_time, SOKAL_WINDOW_CUTOFF};
///
/// // A smoothed chain keeps memory of its past, so tau exceeds one.
/// let mut state = 0.0_f64;
/// let chain: Vec<f64> = (0..4096)
///     .map(|i| {
///         let kick = ((i * 2654435761_usize) % 1000) as f64 / 1000.0 - 0.5;
///         state = 0.6 * state + kick;
///         state
///     })
///     .collect();
///
/// let estimate = integrated_time(&chain, SOKAL_WINDOW_CUTOFF).unwrap();
/// assert!(estimate.reliable);
/// assert!(estimate.tau > 1.0);
/// ```
pub fn integrated_time(data: &[f64], cutoff: f64) -> Result<IntegratedTime> {
    let acf = autocorrelation(data, true)?;
    integrated_time_from_autocorrelation(&acf, cutoff)
}

//! FFT-based autocorrelation estimation
//!
//! Estimates the autocorrelation function of an MCMC chain in
//! O(n log n) by zero-padding to twice the next power of two (so the
//! circular convolution cannot wrap sample products around the end),
//! transforming, multiplying by the complex conjugate and transforming
//! back.

use rustfft::{num_complex::Complex, FftPlanner};

use mcmc_core::{Error, Result};

/// Estimate the autocorrelation function of a chain
///
/// With `normalize` the result is scaled by its lag-zero value so it
/// starts at exactly 1.0; without it the raw FFT-convention values are
/// returned (zero-lag near a quarter of the sample variance, useful only
/// when combining chains under the same convention).
///
/// Fails with [`Error::DegenerateSeries`] for chains shorter than two
/// samples, and for zero-variance chains when normalizing: the lag-zero
/// value is then zero and the division is undefined.
///
/// # Examples
///
/// ```
/// use mcmc_autocorr::autocorrelation;
///
/// // A perfectly alternating chain is maximally anticorrelated at lag 1.
/// let chain: Vec<f64> = (0..64).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
/// let acf = autocorrelation(&chain, true).unwrap();
///
/// assert!((acf[0] - 1.0).abs() < 1e-12);
/// assert!(acf[1] < -0.9);
/// ```
pub fn autocorrelation(data: &[f64], normalize: bool) -> Result<Vec<f64>> {
    let mut planner = FftPlanner::new();
    autocorrelation_with_planner(data, normalize, &mut planner)
}

/// Average the autocorrelation functions of several equal-length runs
///
/// Independent repeats of the same simulation share a correlation
/// structure; averaging their per-run estimates lag by lag reduces the
/// estimator noise. Runs of differing length are rejected, and a single
/// degenerate run fails the whole call.
pub fn autocorrelation_averaged<S: AsRef<[f64]>>(runs: &[S], normalize: bool) -> Result<Vec<f64>> {
    let first_len = match runs.first() {
        Some(run) => run.as_ref().len(),
        None => return Err(Error::empty_input("autocorrelation averaging")),
    };

    // One planner shared across runs; all runs have the same FFT length
    let mut planner = FftPlanner::new();
    let mut averaged = vec![0.0; first_len];
    for run in runs {
        let run = run.as_ref();
        if run.len() != first_len {
            return Err(Error::size_mismatch(
                first_len,
                run.len(),
                "autocorrelation run",
            ));
        }
        let acf = autocorrelation_with_planner(run, normalize, &mut planner)?;
        for (total, value) in averaged.iter_mut().zip(acf.iter()) {
            *total += *value;
        }
    }

    let n_runs = runs.len() as f64;
    for value in averaged.iter_mut() {
        *value /= n_runs;
    }
    Ok(averaged)
}

fn autocorrelation_with_planner(
    data: &[f64],
    normalize: bool,
    planner: &mut FftPlanner<f64>,
) -> Result<Vec<f64>> {
    if data.len() < 2 {
        return Err(Error::DegenerateSeries);
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("autocorrelation input"));
    }

    let len = data.len();
    let n = len.next_power_of_two();
    let fft_len = 2 * n;
    let mean = data.iter().sum::<f64>() / len as f64;

    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(fft_len);
    buffer.extend(data.iter().map(|&v| Complex::new(v - mean, 0.0)));
    buffer.resize(fft_len, Complex::new(0.0, 0.0));

    let fft = planner.plan_fft_forward(fft_len);
    fft.process(&mut buffer);

    // Power spectrum: F times its conjugate
    for value in buffer.iter_mut() {
        *value = Complex::new(value.norm_sqr(), 0.0);
    }

    let ifft = planner.plan_fft_inverse(fft_len);
    ifft.process(&mut buffer);

    // rustfft leaves the 1/N inverse normalization to the caller; the
    // extra 4n is the scale convention for this zero-padding scheme.
    let scale = 1.0 / (fft_len as f64 * 4.0 * n as f64);
    let mut acf: Vec<f64> = buffer[..len].iter().map(|c| c.re * scale).collect();

    if normalize {
        let lag_zero = acf[0];
        if !(lag_zero > 0.0) || !lag_zero.is_finite() {
            return Err(Error::DegenerateSeries);
        }
        for value in acf.iter_mut() {
            *value /= lag_zero;
        }
    }

    Ok(acf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn alternating(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect()
    }

    #[test]
    fn test_normalized_lag_zero_is_one() {
        let chain: Vec<f64> = (0..128).map(|i| (i as f64 * 0.37).sin()).collect();
        let acf = autocorrelation(&chain, true).unwrap();
        assert_eq!(acf.len(), chain.len());
        assert_relative_eq!(acf[0], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_alternating_chain_lag_one() {
        // Without wraparound the lag-k product sum has len - k terms, so
        // the normalized lag-1 value is exactly -(len - 1)/len.
        let len = 64;
        let acf = autocorrelation(&alternating(len), true).unwrap();
        assert_abs_diff_eq!(acf[1], -((len - 1) as f64) / len as f64, epsilon = 1e-10);
        assert_abs_diff_eq!(acf[2], (len - 2) as f64 / len as f64, epsilon = 1e-10);
    }

    #[test]
    fn test_padding_has_no_wraparound() {
        // Non-power-of-two length exercises the padding path
        let len = 100;
        let acf = autocorrelation(&alternating(len), true).unwrap();
        assert_abs_diff_eq!(acf[1], -((len - 1) as f64) / len as f64, epsilon = 1e-10);
    }

    #[test]
    fn test_constant_chain_is_degenerate_when_normalized() {
        let chain = vec![3.25; 256];
        assert!(matches!(
            autocorrelation(&chain, true),
            Err(Error::DegenerateSeries)
        ));
    }

    #[test]
    fn test_constant_chain_unnormalized_is_zero() {
        // Mean removal zeroes a constant chain; the raw products stay zero
        let chain = vec![3.25; 16];
        let acf = autocorrelation(&chain, false).unwrap();
        for value in acf {
            assert_abs_diff_eq!(value, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_short_chains_are_degenerate() {
        assert!(matches!(
            autocorrelation(&[], true),
            Err(Error::DegenerateSeries)
        ));
        assert!(matches!(
            autocorrelation(&[1.0], true),
            Err(Error::DegenerateSeries)
        ));
        assert!(matches!(
            autocorrelation(&[1.0], false),
            Err(Error::DegenerateSeries)
        ));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let mut chain = alternating(32);
        chain[7] = f64::NAN;
        assert!(matches!(
            autocorrelation(&chain, true),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_averaging_identical_runs_matches_single_run() {
        let chain: Vec<f64> = (0..200).map(|i| (i as f64 * 0.11).cos()).collect();
        let single = autocorrelation(&chain, true).unwrap();
        let averaged =
            autocorrelation_averaged(&[chain.clone(), chain.clone(), chain], true).unwrap();

        for (a, b) in averaged.iter().zip(single.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_averaging_rejects_mismatched_runs() {
        let runs = vec![alternating(64), alternating(32)];
        assert!(matches!(
            autocorrelation_averaged(&runs, true),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_averaging_rejects_empty_run_list() {
        let runs: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            autocorrelation_averaged(&runs, true),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_averaging_fails_on_one_degenerate_run() {
        let runs = vec![alternating(64), vec![1.0; 64]];
        assert!(matches!(
            autocorrelation_averaged(&runs, true),
            Err(Error::DegenerateSeries)
        ));
    }
}

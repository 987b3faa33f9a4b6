//! Integrated autocorrelation times of AR(1) chains
//!
//! Generates chains with known correlation times and compares the
//! windowed estimate against the closed form (1 + phi)/(1 - phi).

use mcmc_autocorr::{integrated_time, SOKAL_WINDOW_CUTOFF};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

fn ar1_chain(phi: f64, len: usize, rng: &mut ChaCha8Rng) -> Vec<f64> {
    let mut state: f64 = 0.0;
    for _ in 0..1024 {
        let kick: f64 = rng.sample(StandardNormal);
        state = phi * state + kick;
    }
    (0..len)
        .map(|_| {
            let kick: f64 = rng.sample(StandardNormal);
            state = phi * state + kick;
            state
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Integrated autocorrelation times for AR(1) chains ===\n");

    let len = 1 << 16;
    let mut rng = ChaCha8Rng::seed_from_u64(2_718_281);

    println!(
        "{:>6} {:>12} {:>12} {:>8} {:>10} {:>12}",
        "phi", "tau (exact)", "tau (est)", "window", "reliable", "n_effective"
    );

    for phi in [0.0, 0.3, 0.6, 0.9, 0.95] {
        let chain = ar1_chain(phi, len, &mut rng);
        let estimate = integrated_time(&chain, SOKAL_WINDOW_CUTOFF)?;
        let exact = (1.0 + phi) / (1.0 - phi);

        println!(
            "{:>6.2} {:>12.3} {:>12.3} {:>8} {:>10} {:>12.0}",
            phi,
            exact,
            estimate.tau,
            estimate.window,
            estimate.reliable,
            estimate.effective_samples(len)
        );
    }

    println!("\nEach chain holds {len} samples; the estimate sharpens as the");
    println!("window grows with tau while staying far below the chain length.");
    Ok(())
}

//! Radial distribution demo
//!
//! Builds a fine-grained distance histogram with a depletion zone at
//! short range and a contact peak, then regroups it and prints g(r).
//!
//! Run with: cargo run --example rdf_demo

use mcmc_histogram::{radial_distribution, rebin, Histogram, OutOfRangePolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Radial Distribution Demo ===\n");

    // 48 bins over r in [0.5, 12.5]. Counts follow r^2 times a pair
    // correlation with an excluded core below r = 2 and a peak near
    // r = 3, which is what a simple liquid histogram looks like.
    let n_bins = 48;
    let min = 0.5;
    let max = 12.5;
    let bin_width = (max - min) / n_bins as f64;

    let counts: Vec<u64> = (0..n_bins)
        .map(|i| {
            let r = min + (i as f64 + 0.5) * bin_width;
            let core = if r < 2.0 { 0.05 } else { 1.0 };
            let peak = 1.0 + 1.8 * (-(r - 3.0) * (r - 3.0)).exp();
            (1000.0 * r * r * core * peak).round() as u64
        })
        .collect();

    let histogram = Histogram::new(OutOfRangePolicy::DoNothing, min, max, counts)?;
    println!(
        "Histogram: {} bins over [{:.1}, {:.1}], {} pair distances",
        histogram.bin_count(),
        histogram.minimum(),
        histogram.maximum(),
        histogram.total_count()
    );

    println!("\n=== Regrouped by 4 into 12 bins ===\n");
    let grouped = rebin(&histogram, 4)?;
    for (center, count) in grouped.centers().iter().zip(grouped.counts()) {
        println!("  r = {:5.2}  counts = {:>8}", center, count);
    }

    println!("\n=== g(r) ===\n");
    let rdf = radial_distribution(&histogram, 4)?;
    for (r, g) in rdf.distances().iter().zip(rdf.values()) {
        let bar = "#".repeat((g * 20.0).round() as usize);
        println!("  r = {:5.2}  g = {:6.3}  {}", r, g, bar);
    }

    println!("\nThe core shows g near zero, the contact shell a peak above");
    println!("one, and large r settles toward one as correlations die out.");

    Ok(())
}

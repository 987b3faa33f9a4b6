//! Property-based tests for regrouping and the radial distribution

use proptest::prelude::*;

use mcmc_histogram::{radial_distribution, rebin, Histogram, OutOfRangePolicy};

/// A grouping factor together with a count vector whose length it divides
fn divisible_counts(max_factor: usize) -> impl Strategy<Value = (usize, Vec<u64>)> {
    (1..=max_factor, 1usize..=6).prop_flat_map(|(n_groups, n_grouped)| {
        prop::collection::vec(0u64..1000, n_groups * n_grouped)
            .prop_map(move |counts| (n_groups, counts))
    })
}

fn trapezoid(values: &[f64]) -> f64 {
    values
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]))
        .sum()
}

proptest! {
    #[test]
    fn rebin_conserves_total_count((n_groups, counts) in divisible_counts(8)) {
        let n_bins = counts.len();
        let total: u64 = counts.iter().sum();
        let histogram = Histogram::new(
            OutOfRangePolicy::DoNothing,
            0.0,
            n_bins as f64,
            counts,
        )
        .unwrap();

        let grouped = rebin(&histogram, n_groups).unwrap();
        prop_assert_eq!(grouped.counts().iter().sum::<u64>(), total);
        prop_assert_eq!(grouped.len(), n_bins / n_groups);
    }

    #[test]
    fn rebin_edges_span_the_original_range((n_groups, counts) in divisible_counts(8)) {
        let n_bins = counts.len();
        let max = n_bins as f64;
        let histogram =
            Histogram::new(OutOfRangePolicy::DoNothing, 0.0, max, counts).unwrap();

        let grouped = rebin(&histogram, n_groups).unwrap();
        let n_grouped = n_bins / n_groups;
        let edges = grouped.edges();
        prop_assert_eq!(edges.len(), n_grouped + 1);
        prop_assert!((edges[0] - 0.0).abs() < 1e-12);
        prop_assert!((edges[n_grouped] - max).abs() < 1e-9);
        for pair in edges.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn rdf_times_shell_weight_recovers_the_counts(
        (n_groups, mut counts) in divisible_counts(8),
        min in 0.5f64..10.0,
        width in 0.5f64..10.0,
    ) {
        // The trapezoid normalization needs at least two grouped bins
        prop_assume!(counts.len() / n_groups >= 2);
        // Guarantee a nonzero count vector
        counts[0] += 1;

        let max = min + width;
        let histogram =
            Histogram::new(OutOfRangePolicy::DoNothing, min, max, counts).unwrap();

        let grouped = rebin(&histogram, n_groups).unwrap();
        let rdf = radial_distribution(&histogram, n_groups).unwrap();

        let r_squared: Vec<f64> = rdf.distances().iter().map(|&r| r * r).collect();
        let r2_integral = trapezoid(&r_squared);
        let raw: Vec<f64> = grouped.counts().iter().map(|&c| c as f64).collect();
        let count_integral = trapezoid(&raw);

        for i in 0..grouped.len() {
            let reconstructed = rdf.values()[i] * r_squared[i] / r2_integral;
            let expected = raw[i] / count_integral;
            prop_assert!((reconstructed - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}

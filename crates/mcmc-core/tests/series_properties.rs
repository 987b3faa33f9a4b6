//! Property-based tests for the series container
//!
//! These pin the slicing and arithmetic invariants across randomly
//! generated epoch layouts, including non-contiguous epochs.

use mcmc_core::{statistics, PropertySeries};
use proptest::prelude::*;

/// Build a strictly increasing epoch sequence from a start and positive gaps
fn epochs_from_gaps(start: u64, gaps: &[u64]) -> Vec<u64> {
    let mut epochs = Vec::with_capacity(gaps.len());
    let mut current = start;
    for &gap in gaps {
        epochs.push(current);
        current += gap;
    }
    epochs
}

proptest! {
    // Slicing by epoch keeps exactly the elements with left <= epoch < right
    #[test]
    fn prop_slice_by_epoch_membership(
        start in 0u64..1000,
        gaps in prop::collection::vec(1u64..6, 2..60),
        pick_a in 0usize..1000,
        pick_b in 0usize..1000,
    ) {
        let epochs = epochs_from_gaps(start, &gaps);
        let values: Vec<f64> = (0..epochs.len()).map(|i| i as f64 * 1.5).collect();
        let series = PropertySeries::new(epochs.clone(), values).unwrap();

        let i = pick_a % epochs.len();
        let j = pick_b % epochs.len();
        let (i, j) = (i.min(j), i.max(j));

        let sliced = series.slice_by_epoch(epochs[i], epochs[j]).unwrap();
        prop_assert_eq!(sliced.epochs(), &epochs[i..j]);
        for epoch in sliced.epochs() {
            prop_assert!(epochs[i] <= *epoch && *epoch < epochs[j]);
        }
    }

    // The right bound one past the last epoch selects the full tail
    #[test]
    fn prop_slice_to_one_past_end(
        start in 0u64..1000,
        gaps in prop::collection::vec(1u64..6, 1..60),
        pick in 0usize..1000,
    ) {
        let epochs = epochs_from_gaps(start, &gaps);
        let values: Vec<f64> = (0..epochs.len()).map(|i| i as f64).collect();
        let series = PropertySeries::new(epochs.clone(), values).unwrap();

        let i = pick % epochs.len();
        let last = *epochs.last().unwrap();
        let tail = series.slice_by_epoch(epochs[i], last + 1).unwrap();
        prop_assert_eq!(tail.epochs(), &epochs[i..]);
    }

    // Index slicing never panics and clamps to the series length
    #[test]
    fn prop_slice_by_index_clamps(
        gaps in prop::collection::vec(1u64..4, 1..40),
        left in 0usize..100,
        right in 0usize..100,
    ) {
        let epochs = epochs_from_gaps(0, &gaps);
        let values: Vec<f64> = (0..epochs.len()).map(|i| i as f64).collect();
        let series = PropertySeries::new(epochs, values).unwrap();

        let sliced = series.slice_by_index(left, right);
        prop_assert!(sliced.len() <= series.len());
        let full = series.slice_by_index(0, series.len() + right);
        prop_assert_eq!(full, series);
    }

    // Adding then subtracting the same series is the identity (exact for integers)
    #[test]
    fn prop_add_subtract_roundtrip(
        gaps in prop::collection::vec(1u64..4, 1..40),
        offsets in prop::collection::vec(-1000i32..1000, 1..40),
    ) {
        let n = gaps.len().min(offsets.len());
        let epochs = epochs_from_gaps(0, &gaps[..n]);
        let a_values: Vec<i32> = (0..n as i32).collect();
        let b_values = offsets[..n].to_vec();

        let a = PropertySeries::new(epochs.clone(), a_values).unwrap();
        let b = PropertySeries::new(epochs, b_values).unwrap();

        let roundtrip = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(roundtrip, a);
    }

    // The mean always lies within the sample range
    #[test]
    fn prop_mean_within_range(
        values in prop::collection::vec(-1e6f64..1e6, 1..100),
    ) {
        let epochs: Vec<u64> = (0..values.len() as u64).collect();
        let series = PropertySeries::new(epochs, values.clone()).unwrap();
        let stats = statistics(&series).unwrap();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(stats.mean >= min - 1e-9 && stats.mean <= max + 1e-9);
        prop_assert!(stats.std_dev >= 0.0);
    }
}

//! Full-pipeline tests: engine text in, quoted numbers out
//!
//! Each test walks the whole path a production analysis takes, from the
//! on-disk formats through slicing, statistics, and the
//! autocorrelation-corrected error bar, with the batch runner on top.

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use mcmc_diagnostics::io::{filenames, read_property_series, write_property_series_file};
use mcmc_diagnostics::prelude::*;

const REFERENCE_FILE: &str = "\
# h
00000 1.0
00001 2.0
00002 3.0
00003 100.0
00004 2.0
";

struct SweepLayout {
    root: PathBuf,
}

impl OutputLocator for SweepLayout {
    type SimId = u32;

    fn output_dir(&self, id: &u32) -> PathBuf {
        self.root.join(format!("sim-{id:04}"))
    }
}

fn scratch_root(case: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mcmc_diag_e2e_{case}_{}", std::process::id()))
}

fn ar1_series(phi: f64, level: f64, len: usize, seed: u64) -> PropertySeries<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state: f64 = 0.0;
    for _ in 0..512 {
        let kick: f64 = rng.sample(StandardNormal);
        state = phi * state + kick;
    }
    let values: Vec<f64> = (0..len)
        .map(|_| {
            let kick: f64 = rng.sample(StandardNormal);
            state = phi * state + kick;
            level + 0.1 * state
        })
        .collect();
    PropertySeries::new((0..len as u64).collect(), values).unwrap()
}

#[test]
fn reference_property_file_reads_slices_and_summarizes() {
    let series = read_property_series(REFERENCE_FILE.as_bytes(), 1.0).unwrap();
    assert_eq!(series.len(), 5);

    // The half-open slice over all five epochs is the series itself
    let full = series.slice_by_epoch(0, 5).unwrap();
    assert_eq!(full, series);

    let stats = statistics(&full).unwrap();
    assert_relative_eq!(stats.mean, 21.6, max_relative = 1e-12);

    // Five samples are far too few for a trustworthy window, but the
    // composition must still hand back a finite estimate.
    let estimate = integrated_time(full.values(), SOKAL_WINDOW_CUTOFF).unwrap();
    assert!(estimate.tau.is_finite());
}

#[test]
fn simulation_directory_to_corrected_error_bar() {
    let root = scratch_root("pipeline");
    let layout = SweepLayout { root: root.clone() };
    let dir = layout.output_dir(&1);
    fs::create_dir_all(&dir).unwrap();

    let series = ar1_series(0.7, 4.5, 2048, 11);
    write_property_series_file(
        dir.join(filenames::KINETIC_ENERGY),
        &series,
        &["kinetic energy estimates"],
    )
    .unwrap();

    let reader = SimulationReader::new(layout);
    let from_disk = reader.kinetic_energy(&1).unwrap();
    assert_eq!(from_disk.epochs(), series.epochs());
    for (written, read) in series.values().iter().zip(from_disk.values()) {
        assert_relative_eq!(*written, *read, max_relative = 1e-8);
    }

    let bundle = property_diagnostics(&from_disk, 64, SOKAL_WINDOW_CUTOFF).unwrap();
    assert_eq!(bundle.statistics.n_samples, 2048 - 64);
    assert!((bundle.statistics.mean - 4.5).abs() < 0.05);

    // phi = 0.7 has an exact integrated time of 17/3
    assert!(bundle.integrated_time.reliable);
    assert!(bundle.integrated_time.tau > 3.0 && bundle.integrated_time.tau < 9.0);
    assert!(bundle.corrected_std_err_mean > bundle.statistics.std_err_mean);
    assert!(bundle.effective_samples < bundle.statistics.n_samples as f64);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn batch_isolates_missing_simulations() {
    let root = scratch_root("batch");
    let layout = SweepLayout { root: root.clone() };

    // Simulations 1 and 3 exist on disk; 2 never ran
    for id in [1_u32, 3] {
        let dir = layout.output_dir(&id);
        fs::create_dir_all(&dir).unwrap();
        let values: Vec<f64> = (0..256)
            .map(|i| id as f64 + ((i * 37) % 11) as f64 / 100.0)
            .collect();
        let series = PropertySeries::new((0..256).collect(), values).unwrap();
        write_property_series_file(dir.join(filenames::KINETIC_ENERGY), &series, &[]).unwrap();
    }

    let reader = SimulationReader::new(layout);
    let outcomes = run_batch(&[1_u32, 2, 3], |id| {
        let series = reader.kinetic_energy(id)?;
        property_diagnostics(&series, 0, SOKAL_WINDOW_CUTOFF)
    });

    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(outcomes[0].1.is_ok());
    assert!(matches!(outcomes[1].1, Err(Error::Io(_))));

    let third = outcomes[2].1.as_ref().unwrap();
    assert!((third.statistics.mean - 3.05).abs() < 0.1);

    fs::remove_dir_all(&root).unwrap();
}

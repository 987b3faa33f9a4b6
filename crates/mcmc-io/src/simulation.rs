//! Typed access to one simulation's output directory
//!
//! A simulation dumps its estimates into one directory per run, one
//! well-known filename per property. How a simulation id maps to that
//! directory is a project-layout decision that stays outside this
//! crate, behind the [`OutputLocator`] seam; [`SimulationReader`]
//! composes a locator with the format readers and the default
//! filenames into one typed method per output file.

use std::path::PathBuf;

use log::debug;

use mcmc_core::{Error, PropertySeries, Result};
use mcmc_histogram::Histogram;

use crate::box_sides::{read_box_sides_file, BoxSides};
use crate::histogram::read_histogram_file;
use crate::property::{
    read_property_columns_file, read_property_series_file, ColumnSpec, PropertyColumn,
};

/// Default names of the files a simulation writes into its output
/// directory
pub mod filenames {
    // Energy estimates, one float column each
    pub const KINETIC_ENERGY: &str = "kinetic.dat";
    pub const PAIR_POTENTIAL_ENERGY: &str = "pair_potential.dat";
    pub const TRIPLET_POTENTIAL_ENERGY: &str = "triplet_potential.dat";
    pub const QUADRUPLET_POTENTIAL_ENERGY: &str = "quadruplet_potential.dat";

    // Sampling diagnostics, one float column each
    pub const CENTRE_OF_MASS_STEP_SIZE: &str = "centre_of_mass_step_size.dat";
    pub const RMS_CENTROID_DISTANCE: &str = "rms_centroid_distance.dat";
    pub const ABSOLUTE_CENTROID_DISTANCE: &str = "absolute_centroid_distance.dat";

    // Move acceptance counters, two integer columns (accepted, rejected)
    pub const CENTRE_OF_MASS_MOVE_ACCEPT: &str = "centre_of_mass_position_move_accept.dat";
    pub const SINGLE_BEAD_MOVE_ACCEPT: &str = "single_bead_position_move_accept.dat";
    pub const BISECTION_MULTIBEAD_MOVE_ACCEPT: &str =
        "bisection_multibead_position_move_accept.dat";

    // Bisection step information, a float and an integer column
    pub const BISECTION_MULTIBEAD_MOVE_INFO: &str = "bisection_multibead_position_move_info.dat";

    // Wall-clock timing, three integer columns
    pub const TIMER: &str = "timer.dat";

    // Histograms
    pub const RADIAL_DIST_HISTOGRAM: &str = "radial_dist_histo.dat";
    pub const CENTROID_RADIAL_DIST_HISTOGRAM: &str = "centroid_radial_dist_histo.dat";

    // Periodic box description
    pub const BOX_SIDES: &str = "box_sides.dat";
}

/// Resolver from an opaque simulation id to its output directory
///
/// Project layouts differ (flat directories, nested job trees, dates
/// in the path), so the mapping stays behind this trait and simulation
/// ids stay opaque to the readers.
pub trait OutputLocator {
    /// Identifier for one simulation within the project
    type SimId;

    /// Directory holding the simulation's output files
    fn output_dir(&self, id: &Self::SimId) -> PathBuf;
}

/// Accepted and rejected move counts for one move type
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAcceptance {
    pub accepted: PropertySeries<i32>,
    pub rejected: PropertySeries<i32>,
}

impl MoveAcceptance {
    /// Compute the per-epoch acceptance rate, accepted / attempted
    ///
    /// Fails with [`Error::Computation`] if any epoch recorded no
    /// attempted moves at all.
    pub fn accept_rates(&self) -> Result<PropertySeries<f64>> {
        let mut rates = Vec::with_capacity(self.accepted.len());
        for ((epoch, accepted), (_, rejected)) in self.accepted.iter().zip(self.rejected.iter()) {
            let attempts = i64::from(accepted) + i64::from(rejected);
            if attempts == 0 {
                return Err(Error::Computation(format!(
                    "acceptance rate undefined: no attempted moves at epoch {epoch}"
                )));
            }
            rates.push(accepted as f64 / attempts as f64);
        }
        PropertySeries::new(self.accepted.epochs().to_vec(), rates)
    }
}

/// Upper-level fraction and lower level recorded by bisection moves
#[derive(Debug, Clone, PartialEq)]
pub struct BisectionMoveInfo {
    pub upper_level_fractions: PropertySeries<f64>,
    pub lower_levels: PropertySeries<i32>,
}

/// Reader for the standard output files of one simulation
///
/// Every method resolves the simulation's directory through the
/// locator, joins the default filename, and parses the file with the
/// matching format reader and column schema.
#[derive(Debug, Clone)]
pub struct SimulationReader<L> {
    locator: L,
}

impl<L: OutputLocator> SimulationReader<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Borrow the directory resolver
    pub fn locator(&self) -> &L {
        &self.locator
    }

    fn file_path(&self, id: &L::SimId, filename: &str) -> PathBuf {
        self.locator.output_dir(id).join(filename)
    }

    /// Read any single-float-column property file by name
    ///
    /// The escape hatch for properties without a dedicated method, and
    /// for normalizing on read (per particle, per bead).
    pub fn property_series(
        &self,
        id: &L::SimId,
        filename: &str,
        normalize_by: f64,
    ) -> Result<PropertySeries<f64>> {
        read_property_series_file(self.file_path(id, filename), normalize_by)
    }

    pub fn kinetic_energy(&self, id: &L::SimId) -> Result<PropertySeries<f64>> {
        self.property_series(id, filenames::KINETIC_ENERGY, 1.0)
    }

    pub fn pair_potential_energy(&self, id: &L::SimId) -> Result<PropertySeries<f64>> {
        self.property_series(id, filenames::PAIR_POTENTIAL_ENERGY, 1.0)
    }

    pub fn triplet_potential_energy(&self, id: &L::SimId) -> Result<PropertySeries<f64>> {
        self.property_series(id, filenames::TRIPLET_POTENTIAL_ENERGY, 1.0)
    }

    pub fn quadruplet_potential_energy(&self, id: &L::SimId) -> Result<PropertySeries<f64>> {
        self.property_series(id, filenames::QUADRUPLET_POTENTIAL_ENERGY, 1.0)
    }

    pub fn centre_of_mass_step_size(&self, id: &L::SimId) -> Result<PropertySeries<f64>> {
        self.property_series(id, filenames::CENTRE_OF_MASS_STEP_SIZE, 1.0)
    }

    pub fn rms_centroid_distance(&self, id: &L::SimId) -> Result<PropertySeries<f64>> {
        self.property_series(id, filenames::RMS_CENTROID_DISTANCE, 1.0)
    }

    pub fn absolute_centroid_distance(&self, id: &L::SimId) -> Result<PropertySeries<f64>> {
        self.property_series(id, filenames::ABSOLUTE_CENTROID_DISTANCE, 1.0)
    }

    pub fn centre_of_mass_move_acceptance(&self, id: &L::SimId) -> Result<MoveAcceptance> {
        self.move_acceptance(id, filenames::CENTRE_OF_MASS_MOVE_ACCEPT)
    }

    pub fn single_bead_move_acceptance(&self, id: &L::SimId) -> Result<MoveAcceptance> {
        self.move_acceptance(id, filenames::SINGLE_BEAD_MOVE_ACCEPT)
    }

    pub fn bisection_multibead_move_acceptance(&self, id: &L::SimId) -> Result<MoveAcceptance> {
        self.move_acceptance(id, filenames::BISECTION_MULTIBEAD_MOVE_ACCEPT)
    }

    pub fn bisection_multibead_move_info(&self, id: &L::SimId) -> Result<BisectionMoveInfo> {
        let path = self.file_path(id, filenames::BISECTION_MULTIBEAD_MOVE_INFO);
        debug!("reading bisection move info from {}", path.display());
        let specs = [ColumnSpec::float(), ColumnSpec::int()];
        let mut columns = read_property_columns_file(&path, &specs)?;
        let lower_levels = pop_int(&mut columns)?;
        let upper_level_fractions = pop_float(&mut columns)?;
        Ok(BisectionMoveInfo {
            upper_level_fractions,
            lower_levels,
        })
    }

    /// Read the wall-clock timer file: three integer columns in file
    /// order
    pub fn timer(
        &self,
        id: &L::SimId,
    ) -> Result<(
        PropertySeries<i32>,
        PropertySeries<i32>,
        PropertySeries<i32>,
    )> {
        let path = self.file_path(id, filenames::TIMER);
        debug!("reading timer data from {}", path.display());
        let specs = [ColumnSpec::int(), ColumnSpec::int(), ColumnSpec::int()];
        let mut columns = read_property_columns_file(&path, &specs)?;
        let third = pop_int(&mut columns)?;
        let second = pop_int(&mut columns)?;
        let first = pop_int(&mut columns)?;
        Ok((first, second, third))
    }

    pub fn radial_distribution_histogram(&self, id: &L::SimId) -> Result<Histogram> {
        read_histogram_file(self.file_path(id, filenames::RADIAL_DIST_HISTOGRAM))
    }

    pub fn centroid_radial_distribution_histogram(&self, id: &L::SimId) -> Result<Histogram> {
        read_histogram_file(self.file_path(id, filenames::CENTROID_RADIAL_DIST_HISTOGRAM))
    }

    pub fn box_sides(&self, id: &L::SimId) -> Result<BoxSides> {
        read_box_sides_file(self.file_path(id, filenames::BOX_SIDES))
    }

    fn move_acceptance(&self, id: &L::SimId, filename: &str) -> Result<MoveAcceptance> {
        let path = self.file_path(id, filename);
        debug!("reading move acceptance counts from {}", path.display());
        let specs = [ColumnSpec::int(), ColumnSpec::int()];
        let mut columns = read_property_columns_file(&path, &specs)?;
        let rejected = pop_int(&mut columns)?;
        let accepted = pop_int(&mut columns)?;
        Ok(MoveAcceptance { accepted, rejected })
    }
}

fn pop_int(columns: &mut Vec<PropertyColumn>) -> Result<PropertySeries<i32>> {
    match columns.pop() {
        Some(column) => column.into_int(),
        None => Err(Error::InvalidInput(
            "missing expected integer column".to_string(),
        )),
    }
}

fn pop_float(columns: &mut Vec<PropertyColumn>) -> Result<PropertySeries<f64>> {
    match columns.pop() {
        Some(column) => column.into_float(),
        None => Err(Error::InvalidInput(
            "missing expected floating-point column".to_string(),
        )),
    }
}

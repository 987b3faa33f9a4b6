//! Readers and writers for the simulation engine's text formats
//!
//! Everything the engine leaves on disk is line-oriented ASCII with
//! `#` comments: property streams (epoch label plus numeric columns),
//! histogram checkpoints, and the periodic box description. This crate
//! parses those formats into the workspace's analysis types, writes
//! them back byte-compatibly (through atomic renames, so readers never
//! observe a half-written file), and layers a typed per-simulation
//! reader over a pluggable directory-layout resolver.
//!
//! All parse failures carry the 1-based line number of the offending
//! line.
//!
//! # Example
//!
//! ```
//! use mcmc_io::read_property_series;
//!
//! let contents = "\
//! ## kinetic energy estimates
//! 00005   1.23456000e+00
//! 00006   2.34567000e+00
//! ";
//!
//! let series = read_property_series(contents.as_bytes(), 1.0)?;
//! assert_eq!(series.epochs(), &[5, 6]);
//! # Ok::<(), mcmc_io::Error>(())
//! ```

mod text;

pub mod box_sides;
pub mod histogram;
pub mod property;
pub mod simulation;

pub use box_sides::{read_box_sides, read_box_sides_file, BoxSides};
pub use histogram::{read_histogram, read_histogram_file, write_histogram, write_histogram_file};
pub use property::{
    read_property_columns, read_property_columns_file, read_property_series,
    read_property_series_file, write_property_columns, write_property_columns_file,
    write_property_series, write_property_series_file, ColumnKind, ColumnSpec, PropertyColumn,
};
pub use simulation::{
    filenames, BisectionMoveInfo, MoveAcceptance, OutputLocator, SimulationReader,
};

pub use mcmc_core::{Error, Result};
pub use mcmc_histogram::{Histogram, OutOfRangePolicy};

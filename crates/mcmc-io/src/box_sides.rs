//! Periodic box dimensions
//!
//! Simulations with periodic boundary conditions record the box once
//! per run: after `#` comments, one line with the dimension count,
//! then one positive side length per line in axis order. The sides are
//! what radial histograms get normalized against.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Index;
use std::path::Path;

use log::debug;

use mcmc_core::{Error, Result};

use crate::text::{required_value, LineCursor};

/// Side lengths of a periodic simulation box
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSides {
    sides: Vec<f64>,
}

impl BoxSides {
    /// Build from side lengths, which must all be positive and finite
    pub fn new(sides: Vec<f64>) -> Result<Self> {
        for &side in &sides {
            if !side.is_finite() || side <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "box sides must be positive and finite, got {side}"
                )));
            }
        }
        Ok(Self { sides })
    }

    /// Get the number of spatial dimensions
    pub fn n_dimensions(&self) -> usize {
        self.sides.len()
    }

    /// Get the side lengths in axis order
    pub fn sides(&self) -> &[f64] {
        &self.sides
    }

    /// Compute the box volume (product of the sides)
    pub fn volume(&self) -> f64 {
        self.sides.iter().product()
    }
}

impl Index<usize> for BoxSides {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.sides[axis]
    }
}

/// Read box sides from their text representation
///
/// Truncation and non-positive side lengths fail with
/// [`Error::MalformedFile`] carrying the 1-based line number.
pub fn read_box_sides<R: BufRead>(reader: R) -> Result<BoxSides> {
    let mut cursor = LineCursor::new(reader);

    let (_, n_dimensions): (usize, usize) =
        required_value(&mut cursor, "the number of dimensions")?;

    let mut sides = Vec::new();
    for _ in 0..n_dimensions {
        let (line_number, side): (usize, f64) = required_value(&mut cursor, "a side length")?;
        if !side.is_finite() || side <= 0.0 {
            return Err(Error::malformed(
                line_number,
                format!("box sides must be positive and finite, got {side}"),
            ));
        }
        sides.push(side);
    }

    Ok(BoxSides { sides })
}

/// Read a box sides file
pub fn read_box_sides_file(path: impl AsRef<Path>) -> Result<BoxSides> {
    let path = path.as_ref();
    debug!("reading box sides from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    read_box_sides(reader)
}

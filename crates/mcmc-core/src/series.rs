//! Epoch-indexed sample series
//!
//! The fundamental container for post-processing: one sampled value per
//! MCMC epoch (block index), with the epochs kept alongside the values so
//! that slicing and arithmetic can be validated against them.

use std::fmt;

use num_traits::{Num, ToPrimitive};

use crate::error::{Error, Result};

/// Value types storable in a [`PropertySeries`]
///
/// Covers the types the on-disk formats produce: `f64` measurements and
/// `i32` counters.
pub trait SeriesValue:
    Copy + PartialOrd + fmt::Debug + Num + ToPrimitive + 'static
{
}

impl<T> SeriesValue for T where
    T: Copy + PartialOrd + fmt::Debug + Num + ToPrimitive + 'static
{
}

/// A property sampled once per epoch over the course of a simulation
///
/// Pairs a strictly increasing sequence of non-negative integer epochs
/// with an equal-length sequence of sampled values. The container is
/// immutable: every transformation returns a new series.
///
/// Arithmetic between two series is only defined when they were collected
/// over exactly the same epochs; anything else is a
/// [`MismatchedEpochs`](Error::MismatchedEpochs) error rather than a
/// silently misaligned result.
///
/// # Examples
///
/// ```
/// use mcmc_core::PropertySeries;
///
/// let series = PropertySeries::new(vec![0, 1, 2, 3], vec![1.5, 2.5, 3.5, 4.5]).unwrap();
/// assert_eq!(series.len(), 4);
///
/// // Half-open epoch slice; the right bound may be one past the last epoch.
/// let tail = series.slice_by_epoch(2, 4).unwrap();
/// assert_eq!(tail.values(), &[3.5, 4.5]);
///
/// let doubled = series.add(&series).unwrap();
/// assert_eq!(doubled.value_at(0), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySeries<T: SeriesValue = f64> {
    epochs: Vec<u64>,
    values: Vec<T>,
}

impl<T: SeriesValue> PropertySeries<T> {
    /// Create a series from parallel epoch and value vectors
    ///
    /// Fails unless the vectors have equal length and the epochs are
    /// strictly increasing (which also makes them unique).
    pub fn new(epochs: Vec<u64>, values: Vec<T>) -> Result<Self> {
        if epochs.len() != values.len() {
            return Err(Error::size_mismatch(
                epochs.len(),
                values.len(),
                "property series values",
            ));
        }
        if let Some(pair) = epochs.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvalidInput(format!(
                "epochs must be strictly increasing, found {} followed by {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { epochs, values })
    }

    /// Create a series with no samples
    pub fn empty() -> Self {
        Self {
            epochs: Vec::new(),
            values: Vec::new(),
        }
    }

    // Internal constructor for slices of an already validated series.
    fn from_validated(epochs: Vec<u64>, values: Vec<T>) -> Self {
        debug_assert_eq!(epochs.len(), values.len());
        Self { epochs, values }
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the epochs
    pub fn epochs(&self) -> &[u64] {
        &self.epochs
    }

    /// Get the sampled values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Get the first sampled epoch
    pub fn first_epoch(&self) -> Option<u64> {
        self.epochs.first().copied()
    }

    /// Get the last sampled epoch
    pub fn last_epoch(&self) -> Option<u64> {
        self.epochs.last().copied()
    }

    /// Iterate over `(epoch, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u64, T)> + '_ {
        self.epochs
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Get the value at a position, `None` past the end
    pub fn value_at(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Get the value sampled at an epoch
    ///
    /// The epoch must match a stored epoch exactly.
    pub fn value_at_epoch(&self, epoch: u64) -> Result<T> {
        let index = self.index_of_epoch(epoch)?;
        Ok(self.values[index])
    }

    /// Get the position of an epoch within the series
    pub fn index_of_epoch(&self, epoch: u64) -> Result<usize> {
        self.epochs
            .binary_search(&epoch)
            .map_err(|_| Error::EpochNotFound { epoch })
    }

    /// Slice by position, half-open `[i_left, i_right)`
    ///
    /// Standard slice truncation semantics: out-of-range indices clamp to
    /// the series length and an inverted range yields an empty series.
    pub fn slice_by_index(&self, i_left: usize, i_right: usize) -> Self {
        let right = i_right.min(self.len());
        let left = i_left.min(right);
        Self::from_validated(
            self.epochs[left..right].to_vec(),
            self.values[left..right].to_vec(),
        )
    }

    /// Slice by epoch, half-open `[epoch_left, epoch_right)`
    ///
    /// Both bounds must match stored epochs exactly, except that
    /// `epoch_right` may be one past the last stored epoch to mean
    /// end-of-series. A bound that matches nothing is an
    /// [`EpochNotFound`](Error::EpochNotFound) error; nearest-match
    /// behavior would hide off-by-one block-index bugs.
    pub fn slice_by_epoch(&self, epoch_left: u64, epoch_right: u64) -> Result<Self> {
        let left = self.index_of_epoch(epoch_left)?;
        let right = match self.epochs.binary_search(&epoch_right) {
            Ok(index) => index,
            Err(_)
                if self.last_epoch().and_then(|last| last.checked_add(1))
                    == Some(epoch_right) =>
            {
                self.len()
            }
            Err(_) => return Err(Error::EpochNotFound { epoch: epoch_right }),
        };
        Ok(self.slice_by_index(left, right))
    }

    /// Slice covering the `n` epochs before the final one
    ///
    /// Shorthand for `slice_by_epoch(last_epoch - n, last_epoch)`; the
    /// final epoch itself is excluded by the half-open convention. Fails
    /// on an empty series, when `n` exceeds the last epoch, or when
    /// `last_epoch - n` is not a stored epoch.
    pub fn last_n(&self, n: u64) -> Result<Self> {
        let last = self
            .last_epoch()
            .ok_or_else(|| Error::empty_input("last_n"))?;
        let left = last.checked_sub(n).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "cannot take the last {n} epochs of a series ending at epoch {last}"
            ))
        })?;
        self.slice_by_epoch(left, last)
    }

    fn check_epochs(&self, other: &Self) -> Result<()> {
        if self.epochs != other.epochs {
            return Err(Error::MismatchedEpochs);
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Self::from_validated(self.epochs.clone(), values)
    }

    fn map_values(&self, op: impl Fn(T) -> T) -> Self {
        let values = self.values.iter().map(|&v| op(v)).collect();
        Self::from_validated(self.epochs.clone(), values)
    }

    /// Elementwise sum of two series collected over the same epochs
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_epochs(other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference of two series collected over the same epochs
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_epochs(other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Elementwise product of two series collected over the same epochs
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.check_epochs(other)?;
        Ok(self.zip_with(other, |a, b| a * b))
    }

    /// Elementwise quotient of two series collected over the same epochs
    ///
    /// Any zero in the divisor series fails the whole operation instead of
    /// producing infinities (or a panic for integer values).
    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.check_epochs(other)?;
        if other.values.iter().any(|&v| v == T::zero()) {
            return Err(Error::Computation(
                "division by zero in divisor series".to_string(),
            ));
        }
        Ok(self.zip_with(other, |a, b| a / b))
    }

    /// Add a scalar to every value
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map_values(|v| v + scalar)
    }

    /// Subtract a scalar from every value
    pub fn subtract_scalar(&self, scalar: T) -> Self {
        self.map_values(|v| v - scalar)
    }

    /// Multiply every value by a scalar
    pub fn multiply_scalar(&self, scalar: T) -> Self {
        self.map_values(|v| v * scalar)
    }

    /// Divide every value by a scalar
    ///
    /// Fails on a zero divisor for the same reason as [`divide`](Self::divide).
    pub fn divide_scalar(&self, scalar: T) -> Result<Self> {
        if scalar == T::zero() {
            return Err(Error::Computation("division by zero scalar".to_string()));
        }
        Ok(self.map_values(|v| v / scalar))
    }
}

impl<T: SeriesValue> Default for PropertySeries<T> {
    fn default() -> Self {
        Self::empty()
    }
}

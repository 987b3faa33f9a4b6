//! Property stream format
//!
//! Most estimated properties come out of the simulation engine in the
//! same shape: leading `#` comments, then whitespace-separated columns
//! with an integer epoch label first and one or more numeric values
//! after it, one row per epoch, epochs strictly increasing.
//!
//! ```text
//! # comment explaining what the results are
//! # maybe another comment?
//! 00005   1.23456000e+00
//! 00006   2.34567000e+00
//! 00007   3.45678000e+00
//! ```
//!
//! Reading is driven by a static per-column schema ([`ColumnSpec`]):
//! each value column declares its numeric type and an optional divisor
//! applied right after parsing. Writing reproduces the engine's
//! formatting so written files are indistinguishable from its own
//! output: zero-padded epochs, scientific notation for floats,
//! right-aligned integers, three-space separators.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use mcmc_core::{Error, PropertySeries, Result};

use crate::text::{format_scientific, parse_token, write_atomic, LineCursor};

/// Numeric type of one value column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 32-bit signed integers (counters, block sizes)
    Int,
    /// 64-bit floats (measurements)
    Float,
}

/// Description of one value column in a property stream
///
/// `normalize_by` is a divisor applied to every parsed value before
/// storage, so per-particle or per-bead quantities can be produced at
/// read time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    kind: ColumnKind,
    normalize_by: f64,
}

impl ColumnSpec {
    /// Describe a column, validating the divisor
    pub fn new(kind: ColumnKind, normalize_by: f64) -> Result<Self> {
        if !normalize_by.is_finite() || normalize_by == 0.0 {
            return Err(Error::InvalidParameter(format!(
                "normalize_by must be finite and nonzero, got {normalize_by}"
            )));
        }
        Ok(Self { kind, normalize_by })
    }

    /// An integer column with no normalization
    pub fn int() -> Self {
        Self {
            kind: ColumnKind::Int,
            normalize_by: 1.0,
        }
    }

    /// A float column with no normalization
    pub fn float() -> Self {
        Self {
            kind: ColumnKind::Float,
            normalize_by: 1.0,
        }
    }

    /// A float column divided by `normalize_by` after parsing
    pub fn float_normalized(normalize_by: f64) -> Result<Self> {
        Self::new(ColumnKind::Float, normalize_by)
    }

    /// Get the column's numeric type
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Get the divisor applied after parsing
    pub fn normalize_by(&self) -> f64 {
        self.normalize_by
    }
}

/// One parsed value column, typed per its [`ColumnSpec`]
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyColumn {
    Int(PropertySeries<i32>),
    Float(PropertySeries<f64>),
}

impl PropertyColumn {
    /// Get the epoch labels shared by every column of the stream
    pub fn epochs(&self) -> &[u64] {
        match self {
            Self::Int(series) => series.epochs(),
            Self::Float(series) => series.epochs(),
        }
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        match self {
            Self::Int(series) => series.len(),
            Self::Float(series) => series.len(),
        }
    }

    /// Check whether the column holds no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the integer series, if this is an integer column
    pub fn as_int(&self) -> Option<&PropertySeries<i32>> {
        match self {
            Self::Int(series) => Some(series),
            Self::Float(_) => None,
        }
    }

    /// Borrow the float series, if this is a float column
    pub fn as_float(&self) -> Option<&PropertySeries<f64>> {
        match self {
            Self::Float(series) => Some(series),
            Self::Int(_) => None,
        }
    }

    /// Take the integer series out of the column
    pub fn into_int(self) -> Result<PropertySeries<i32>> {
        match self {
            Self::Int(series) => Ok(series),
            Self::Float(_) => Err(Error::InvalidInput(
                "expected an integer column, found a floating-point column".to_string(),
            )),
        }
    }

    /// Take the float series out of the column
    pub fn into_float(self) -> Result<PropertySeries<f64>> {
        match self {
            Self::Float(series) => Ok(series),
            Self::Int(_) => Err(Error::InvalidInput(
                "expected a floating-point column, found an integer column".to_string(),
            )),
        }
    }
}

enum ColumnValues {
    Int(Vec<i32>),
    Float(Vec<f64>),
}

impl ColumnValues {
    fn for_spec(spec: &ColumnSpec) -> Self {
        match spec.kind {
            ColumnKind::Int => Self::Int(Vec::new()),
            ColumnKind::Float => Self::Float(Vec::new()),
        }
    }

    fn push(&mut self, line: usize, token: &str, spec: &ColumnSpec) -> Result<()> {
        match self {
            Self::Int(values) => {
                let value: i32 = parse_token(line, token, "an integer value")?;
                let normalized = if spec.normalize_by == 1.0 {
                    value
                } else {
                    (f64::from(value) / spec.normalize_by) as i32
                };
                values.push(normalized);
            }
            Self::Float(values) => {
                let value: f64 = parse_token(line, token, "a numeric value")?;
                values.push(value / spec.normalize_by);
            }
        }
        Ok(())
    }

    fn into_column(self, epochs: &[u64]) -> Result<PropertyColumn> {
        match self {
            Self::Int(values) => Ok(PropertyColumn::Int(PropertySeries::new(
                epochs.to_vec(),
                values,
            )?)),
            Self::Float(values) => Ok(PropertyColumn::Float(PropertySeries::new(
                epochs.to_vec(),
                values,
            )?)),
        }
    }
}

/// Read a property stream with one typed series per declared column
///
/// Every data row must carry exactly `specs.len() + 1` tokens (the
/// epoch plus one per column), epochs must strictly increase, and every
/// token must parse as the declared type; violations fail with
/// [`Error::MalformedFile`] carrying the 1-based line number. A stream
/// with no data rows yields empty series.
pub fn read_property_columns<R: BufRead>(
    reader: R,
    specs: &[ColumnSpec],
) -> Result<Vec<PropertyColumn>> {
    if specs.is_empty() {
        return Err(Error::InvalidParameter(
            "at least one value column must be described".to_string(),
        ));
    }

    let mut cursor = LineCursor::new(reader);
    let mut epochs: Vec<u64> = Vec::new();
    let mut columns: Vec<ColumnValues> = specs.iter().map(ColumnValues::for_spec).collect();

    while let Some((line_number, line)) = cursor.next_content_line()? {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != specs.len() + 1 {
            return Err(Error::malformed(
                line_number,
                format!(
                    "expected {} columns, found {}",
                    specs.len() + 1,
                    tokens.len()
                ),
            ));
        }

        let epoch: u64 = parse_token(line_number, tokens[0], "an epoch label")?;
        if let Some(&previous) = epochs.last() {
            if epoch <= previous {
                return Err(Error::malformed(
                    line_number,
                    format!("epoch {epoch} does not increase past {previous}"),
                ));
            }
        }
        epochs.push(epoch);

        for ((column, spec), token) in columns.iter_mut().zip(specs).zip(&tokens[1..]) {
            column.push(line_number, token, spec)?;
        }
    }

    columns
        .into_iter()
        .map(|column| column.into_column(&epochs))
        .collect()
}

/// Read a single-float-column property stream
///
/// The shape nearly every estimated property uses. Values are divided
/// by `normalize_by` after parsing.
pub fn read_property_series<R: BufRead>(
    reader: R,
    normalize_by: f64,
) -> Result<PropertySeries<f64>> {
    let spec = ColumnSpec::float_normalized(normalize_by)?;
    let mut columns = read_property_columns(reader, &[spec])?;
    match columns.pop() {
        Some(column) => column.into_float(),
        None => Ok(PropertySeries::empty()),
    }
}

/// Write a property stream from typed columns
///
/// `header_lines` are emitted first, each prefixed with `# `. All
/// columns must share identical epochs; float columns must be finite.
pub fn write_property_columns<W: Write>(
    writer: &mut W,
    columns: &[PropertyColumn],
    header_lines: &[&str],
) -> Result<()> {
    let first = match columns.first() {
        Some(first) => first,
        None => {
            return Err(Error::InvalidParameter(
                "at least one column must be written".to_string(),
            ))
        }
    };
    let epochs = first.epochs();
    for column in &columns[1..] {
        if column.epochs() != epochs {
            return Err(Error::MismatchedEpochs);
        }
    }
    for column in columns {
        if let PropertyColumn::Float(series) = column {
            if series.values().iter().any(|value| !value.is_finite()) {
                return Err(Error::non_finite("property series"));
            }
        }
    }

    for line in header_lines {
        writeln!(writer, "# {line}")?;
    }
    for (row, epoch) in epochs.iter().enumerate() {
        write!(writer, "{epoch:05}")?;
        for column in columns {
            match column {
                PropertyColumn::Int(series) => {
                    write!(writer, "   {:>8}", series.values()[row])?;
                }
                PropertyColumn::Float(series) => {
                    write!(writer, "   {}", format_scientific(series.values()[row]))?;
                }
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write a single-float-column property stream
pub fn write_property_series<W: Write>(
    writer: &mut W,
    series: &PropertySeries<f64>,
    header_lines: &[&str],
) -> Result<()> {
    if series.values().iter().any(|value| !value.is_finite()) {
        return Err(Error::non_finite("property series"));
    }

    for line in header_lines {
        writeln!(writer, "# {line}")?;
    }
    for (epoch, value) in series.iter() {
        writeln!(writer, "{epoch:05}   {}", format_scientific(value))?;
    }
    Ok(())
}

/// Read typed columns from a property file
pub fn read_property_columns_file(
    path: impl AsRef<Path>,
    specs: &[ColumnSpec],
) -> Result<Vec<PropertyColumn>> {
    let path = path.as_ref();
    debug!("reading property data from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    read_property_columns(reader, specs)
}

/// Read a single-float-column property file
pub fn read_property_series_file(
    path: impl AsRef<Path>,
    normalize_by: f64,
) -> Result<PropertySeries<f64>> {
    let path = path.as_ref();
    debug!("reading property data from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    read_property_series(reader, normalize_by)
}

/// Write typed columns to a property file through an atomic rename
pub fn write_property_columns_file(
    path: impl AsRef<Path>,
    columns: &[PropertyColumn],
    header_lines: &[&str],
) -> Result<()> {
    let path = path.as_ref();
    debug!("writing property data to {}", path.display());
    write_atomic(path, |writer| {
        write_property_columns(writer, columns, header_lines)
    })
}

/// Write a single-float-column property file through an atomic rename
pub fn write_property_series_file(
    path: impl AsRef<Path>,
    series: &PropertySeries<f64>,
    header_lines: &[&str],
) -> Result<()> {
    let path = path.as_ref();
    debug!("writing property data to {}", path.display());
    write_atomic(path, |writer| {
        write_property_series(writer, series, header_lines)
    })
}

//! Histogram file format
//!
//! The engine checkpoints each histogram as a small header followed by
//! one count per line:
//!
//! ```text
//! # ...canonical comment block...
//! 0                  <- out-of-range policy code
//! 12                 <- number of bins
//! 0.00000000e+00     <- minimum
//! 9.28088750e+00     <- maximum
//! 0                  <- count of bin 0, and so on
//! ```
//!
//! Reading stops after the declared number of counts. Writing emits
//! the same canonical comment block the engine does, so written files
//! round-trip through its own tooling.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use mcmc_core::{Error, Result};
use mcmc_histogram::{Histogram, OutOfRangePolicy};

use crate::text::{format_scientific, required_value, write_atomic, LineCursor};

/// Comment block at the top of every written histogram file
const HISTOGRAM_HEADER: [&str; 7] = [
    "This file contains the state of a regularly-spaced histogram",
    "The layout for the histogram data is as follows:",
    "- [integer] the out-of-range policy (0 = DO_NOTHING, 1 = THROW)",
    "- [integer] the number of bins",
    "- [floating-point] the minimum value",
    "- [floating-point] the maximum value",
    "... followed by the count in each histogram bin, in single-column order...",
];

/// Read a histogram from its text representation
///
/// Unknown policy codes, non-numeric header fields, negative counts
/// and truncation all fail with [`Error::MalformedFile`] carrying the
/// 1-based line number.
pub fn read_histogram<R: BufRead>(reader: R) -> Result<Histogram> {
    let mut cursor = LineCursor::new(reader);

    let (policy_line, code): (usize, u8) =
        required_value(&mut cursor, "an out-of-range policy code")?;
    let policy = OutOfRangePolicy::from_code(code).map_err(|_| {
        Error::malformed(policy_line, format!("unknown out-of-range policy code {code}"))
    })?;

    let (_, n_bins): (usize, usize) = required_value(&mut cursor, "the number of bins")?;
    let (_, minimum): (usize, f64) = required_value(&mut cursor, "the minimum value")?;
    let (header_line, maximum): (usize, f64) = required_value(&mut cursor, "the maximum value")?;

    let mut counts = Vec::new();
    for _ in 0..n_bins {
        let (_, count): (usize, u64) = required_value(&mut cursor, "a bin count")?;
        counts.push(count);
    }

    Histogram::new(policy, minimum, maximum, counts)
        .map_err(|error| Error::malformed(header_line, error.to_string()))
}

/// Write a histogram in the engine's text representation
pub fn write_histogram<W: Write>(writer: &mut W, histogram: &Histogram) -> Result<()> {
    for line in HISTOGRAM_HEADER {
        writeln!(writer, "# {line}")?;
    }
    writeln!(writer, "{}", histogram.policy().code())?;
    writeln!(writer, "{}", histogram.bin_count())?;
    writeln!(writer, "{}", format_scientific(histogram.minimum()))?;
    writeln!(writer, "{}", format_scientific(histogram.maximum()))?;
    for count in histogram.counts() {
        writeln!(writer, "{count}")?;
    }
    Ok(())
}

/// Read a histogram file
pub fn read_histogram_file(path: impl AsRef<Path>) -> Result<Histogram> {
    let path = path.as_ref();
    debug!("reading histogram from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    read_histogram(reader)
}

/// Write a histogram file through an atomic rename
pub fn write_histogram_file(path: impl AsRef<Path>, histogram: &Histogram) -> Result<()> {
    let path = path.as_ref();
    debug!("writing histogram to {}", path.display());
    write_atomic(path, |writer| write_histogram(writer, histogram))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Contents taken from an example simulation output, trailing
    /// whitespace included
    const ENGINE_OUTPUT: &str = "\
# This file contains the state of a regularly-spaced histogram
# The layout for the histogram data is as follows:
# - [integer] the out-of-range policy (0 = DO_NOTHING, 1 = THROW)
# - [integer] the number of bins
# - [floating-point] the minimum value
# - [floating-point] the maximum value
# ... followed by the count in each histogram bin, in single-column order...
0
12
0.00000000e+00
9.28088750e+00
0
10
15
0
123
456
789
0
0
321
654
987
";

    #[test]
    fn test_read_engine_output() {
        let histogram = read_histogram(ENGINE_OUTPUT.as_bytes()).unwrap();

        assert_eq!(histogram.policy(), OutOfRangePolicy::DoNothing);
        assert_eq!(histogram.bin_count(), 12);
        assert_relative_eq!(histogram.minimum(), 0.0);
        assert_relative_eq!(histogram.maximum(), 9.2808875);
        assert_eq!(
            histogram.counts(),
            &[0, 10, 15, 0, 123, 456, 789, 0, 0, 321, 654, 987]
        );
    }

    #[test]
    fn test_unknown_policy_code_is_rejected() {
        let stream = "# header\n5\n2\n0.0\n1.0\n3\n4\n";
        let error = read_histogram(stream.as_bytes()).unwrap_err();
        assert!(matches!(error, Error::MalformedFile { line: 2, .. }));
    }

    #[test]
    fn test_truncated_counts_are_rejected() {
        let stream = "0\n4\n0.0\n1.0\n3\n4\n";
        let error = read_histogram(stream.as_bytes()).unwrap_err();
        assert!(matches!(error, Error::MalformedFile { line: 7, .. }));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let stream = "0\n2\n0.0\n1.0\n3\n-4\n";
        let error = read_histogram(stream.as_bytes()).unwrap_err();
        assert!(matches!(error, Error::MalformedFile { line: 6, .. }));
    }

    #[test]
    fn test_extra_tokens_on_a_count_line_are_rejected() {
        let stream = "0\n2\n0.0\n1.0\n3 4\n";
        let error = read_histogram(stream.as_bytes()).unwrap_err();
        assert!(matches!(error, Error::MalformedFile { line: 5, .. }));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let stream = "0\n2\n5.0\n1.0\n3\n4\n";
        let error = read_histogram(stream.as_bytes()).unwrap_err();
        assert!(matches!(error, Error::MalformedFile { line: 4, .. }));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let histogram = Histogram::new(
            OutOfRangePolicy::Throw,
            0.5,
            4.5,
            vec![10, 0, 25, 3],
        )
        .unwrap();

        let mut output = Vec::new();
        write_histogram(&mut output, &histogram).unwrap();

        let text = String::from_utf8(output.clone()).unwrap();
        assert!(text.starts_with(
            "# This file contains the state of a regularly-spaced histogram\n"
        ));
        assert!(text.contains("\n1\n4\n5.00000000e-01\n4.50000000e+00\n10\n"));

        let back = read_histogram(output.as_slice()).unwrap();
        assert_eq!(back.policy(), histogram.policy());
        assert_eq!(back.counts(), histogram.counts());
        assert_relative_eq!(back.minimum(), histogram.minimum());
        assert_relative_eq!(back.maximum(), histogram.maximum());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "mcmc_io_histogram_{}_{:?}.dat",
            std::process::id(),
            std::thread::current().id()
        ));

        let histogram =
            Histogram::new(OutOfRangePolicy::DoNothing, 0.0, 2.0, vec![7, 9]).unwrap();
        write_histogram_file(&path, &histogram).unwrap();

        let back = read_histogram_file(&path).unwrap();
        assert_eq!(back.counts(), histogram.counts());

        std::fs::remove_file(&path).unwrap();
    }
}

//! Shared plumbing for the engine's text formats
//!
//! Every on-disk format this crate handles is line-oriented ASCII with
//! `#` comment lines. The readers here track physical line numbers so
//! parse failures can point at the offending line, and the writers
//! reproduce the engine's fixed-width column formatting.

use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use mcmc_core::{Error, Result};

/// Suffix of the scratch file used during atomic writes
pub(crate) const TEMPORARY_SUFFIX: &str = "_TEMPORARY";

/// Line reader that skips blank and `#` comment lines and tracks
/// 1-based physical line numbers
pub(crate) struct LineCursor<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Number of the last physical line consumed (0 before any read)
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next line holding data, trimmed, with its line number
    ///
    /// Returns `None` at end of input.
    pub(crate) fn next_content_line(&mut self) -> Result<Option<(usize, String)>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some((self.line_number, trimmed.to_string())));
        }
    }
}

/// Parse one token, reporting the line and the expected field on failure
pub(crate) fn parse_token<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::malformed(line, format!("expected {what}, found {token:?}")))
}

/// Require that a content line carries exactly one token
pub(crate) fn single_token(line_number: usize, line: &str) -> Result<&str> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Ok(token),
        _ => Err(Error::malformed(
            line_number,
            format!("expected a single value, found {line:?}"),
        )),
    }
}

/// Read the next content line as exactly one parsed value
///
/// End of input counts as a malformed (truncated) file, reported one
/// line past the last physical line.
pub(crate) fn required_value<R: BufRead, T: FromStr>(
    cursor: &mut LineCursor<R>,
    what: &str,
) -> Result<(usize, T)> {
    match cursor.next_content_line()? {
        Some((line_number, line)) => {
            let token = single_token(line_number, &line)?;
            let value = parse_token(line_number, token, what)?;
            Ok((line_number, value))
        }
        None => Err(Error::malformed(
            cursor.line_number() + 1,
            format!("unexpected end of file while reading {what}"),
        )),
    }
}

/// Format like C's `%.8e`: eight fractional digits, sign-prefixed
/// two-digit exponent
pub(crate) fn format_scientific(value: f64) -> String {
    let raw = format!("{value:.8e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{mantissa}e{exponent:+03}")
        }
        None => raw,
    }
}

/// Write through a `_TEMPORARY` sibling and rename into place, so a
/// crash mid-write never leaves a half-written file at `path`
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let temp_path = temporary_sibling(path);
    let written = File::create(&temp_path)
        .map_err(Error::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
            Ok(())
        });

    match written {
        Ok(()) => Ok(fs::rename(&temp_path, path)?),
        Err(error) => {
            let _ = fs::remove_file(&temp_path);
            Err(error)
        }
    }
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(TEMPORARY_SUFFIX);
    PathBuf::from(raw)
}

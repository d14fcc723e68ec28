//! Textual persistence of 2D noise fields.
//!
//! The external contract is a comma-separated grid with 3-decimal
//! fixed-point formatting, one field row per line. Loading parses the same
//! format back into a matching-shape field.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array2;

use crate::noise::NoiseField;

/// Errors that can occur while saving or loading a field grid.
#[derive(Debug)]
pub enum ExportError {
    /// Underlying I/O failure while reading or writing the grid file.
    Io(std::io::Error),
    /// A line of the grid file could not be parsed.
    Parse { line: usize, message: String },
    /// The grid file contained no rows.
    Empty,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "I/O error while accessing field grid: {err}"),
            ExportError::Parse { line, message } => {
                write!(f, "Field grid line {line} is malformed: {message}")
            }
            ExportError::Empty => write!(f, "Field grid file contains no rows"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

/// Writes `field` to `path` as comma-separated rows with 3-decimal
/// fixed-point values.
pub fn save_field_csv<P: AsRef<Path>>(field: &NoiseField, path: P) -> Result<(), ExportError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for row in field.values.outer_iter() {
        let line = row
            .iter()
            .map(|value| format!("{:.3}", value))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads a field previously written by [`save_field_csv`].
///
/// Every row must carry the same number of values; ragged or non-numeric
/// input reports the offending line number.
pub fn load_field_csv<P: AsRef<Path>>(path: P) -> Result<NoiseField, ExportError> {
    let contents = fs::read_to_string(path)?;
    let mut flat: Vec<f64> = Vec::new();
    let mut rows = 0usize;
    let mut cols = 0usize;

    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let row: Vec<f64> = line
            .split(',')
            .map(|cell| {
                cell.trim().parse::<f64>().map_err(|err| ExportError::Parse {
                    line: index + 1,
                    message: format!("'{}': {}", cell.trim(), err),
                })
            })
            .collect::<Result<_, _>>()?;
        if rows == 0 {
            cols = row.len();
        } else if row.len() != cols {
            return Err(ExportError::Parse {
                line: index + 1,
                message: format!("expected {} values, found {}", cols, row.len()),
            });
        }
        flat.extend(row);
        rows += 1;
    }

    if rows == 0 {
        return Err(ExportError::Empty);
    }

    let values = Array2::from_shape_vec((rows, cols), flat).map_err(|err| ExportError::Parse {
        line: 0,
        message: err.to_string(),
    })?;
    Ok(NoiseField::from_values(values))
}

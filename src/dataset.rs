//! Reading samples from delimited text tables.
//!
//! The first non-blank line names the columns, later lines hold one sample each.
//! Fields are separated by tabs when the header has a tab, otherwise by
//! runs of spaces. In tab separated tables an empty field is an error. Only the `x` and `y` columns are
//! read, other columns may be present in any order.

use std::{fs::File, io::{BufRead, BufReader}, path::Path};

use crate::{error::InterpolationError, sample::SampleSet};

/// Reads a table with `x` and `y` columns into a [SampleSet].
/// # Example
/// ```
/// use piecewise_interp::dataset::read_table;
///
/// let table = "x\ty\n0\t-1\n1\t1\n2\t2\n";
/// let samples = read_table(table.as_bytes()).unwrap();
/// assert_eq!(samples.ys(), &[-1.0, 1.0, 2.0]);
/// ```
pub fn read_table<R: BufRead>(reader: R) -> Result<SampleSet, InterpolationError> {
    let mut lines = reader.lines().enumerate();
    let mut columns = None;

    for (_, line) in lines.by_ref() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let tabbed = line.contains('\t');
        let names = split_fields(&line, tabbed);
        columns = Some((column_index(&names, "x")?, column_index(&names, "y")?, tabbed));
        break;
    }
    let Some((x_column, y_column, tabbed)) = columns else {
        return Err(InterpolationError::MissingColumn("x".to_string()));
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(&line, tabbed);
        xs.push(parse_field(&fields, x_column, index + 1)?);
        ys.push(parse_field(&fields, y_column, index + 1)?);
    }

    SampleSet::new(xs, ys)
}

/// Opens `path` and reads it with [read_table].
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<SampleSet, InterpolationError> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

fn split_fields(line: &str, tabbed: bool) -> Vec<&str> {
    if tabbed {
        line.split('\t').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

fn column_index(names: &[&str], name: &str) -> Result<usize, InterpolationError> {
    names.iter()
        .position(|n| *n == name)
        .ok_or_else(|| InterpolationError::MissingColumn(name.to_string()))
}

fn parse_field(fields: &[&str], column: usize, line: usize) -> Result<f64, InterpolationError> {
    let value = fields.get(column).copied().unwrap_or_default();
    value.parse().map_err(|_| InterpolationError::Parse { line, value: value.to_string() })
}

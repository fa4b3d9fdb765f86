// File: crates/perf-plot/src/dataset.rs
// Summary: Column-indexed CSV table for measurement results, plus the results writer.

use std::io;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

pub const WIDTH_COLUMN: &str = "Width";
pub const HEIGHT_COLUMN: &str = "Height";
pub const ELAPSED_COLUMN: &str = "Elapsed Time (s)";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("column '{name}' not found (headers: {headers:?})")]
    MissingColumn { name: String, headers: Vec<String> },
}

/// Rows in file order, addressable by header name.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl Dataset {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let rdr = reader_builder().from_path(path.as_ref())?;
        Self::from_csv(rdr)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        Self::from_csv(reader_builder().from_reader(reader))
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Self, DatasetError> {
        let headers = rdr.headers()?.iter().map(str::to_owned).collect::<Vec<_>>();
        debug!(?headers, "read csv headers");
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, DatasetError> {
        self.headers.iter().position(|h| h == name).ok_or_else(|| DatasetError::MissingColumn {
            name: name.to_owned(),
            headers: self.headers.clone(),
        })
    }

    /// Raw cell text, `None` when the row is shorter than the header.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Column `name` coerced to numbers in row order.
    /// Cells that do not parse (including empty or missing ones) become `NaN`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, DatasetError> {
        let idx = self.column_index(name)?;
        let mut missing = 0usize;
        let values = (0..self.rows.len())
            .map(|row| match self.cell(row, idx).and_then(|s| s.trim().parse::<f64>().ok()) {
                Some(v) => v,
                None => {
                    missing += 1;
                    f64::NAN
                }
            })
            .collect();
        if missing > 0 {
            warn!(column = name, missing, "non-numeric cells treated as missing");
        }
        Ok(values)
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    // Short rows are read as-is; absent cells surface as missing values.
    b.has_headers(true).flexible(true);
    b
}

/// One timed simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub width: u32,
    pub height: u32,
    pub elapsed: Duration,
}

/// Write `Width,Height,Elapsed Time (s)` rows, seconds at 6 fixed decimals.
pub fn write_measurements<W: io::Write>(writer: W, rows: &[Measurement]) -> Result<(), DatasetError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([WIDTH_COLUMN, HEIGHT_COLUMN, ELAPSED_COLUMN])?;
    for m in rows {
        wtr.write_record([
            m.width.to_string(),
            m.height.to_string(),
            format!("{:.6}", m.elapsed.as_secs_f64()),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Create or truncate `path` and write `rows` into it.
pub fn write_measurements_to_path(path: impl AsRef<Path>, rows: &[Measurement]) -> Result<(), DatasetError> {
    let file = std::fs::File::create(path.as_ref()).map_err(csv::Error::from)?;
    write_measurements(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Width,Height,Elapsed Time (s)\n10,10,0.010000\n100,100,1.000000\n";

    #[test]
    fn reads_columns_by_name_in_row_order() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.headers(), &["Width", "Height", "Elapsed Time (s)"]);
        assert_eq!(ds.numeric_column(WIDTH_COLUMN).unwrap(), vec![10.0, 100.0]);
        assert_eq!(ds.numeric_column(ELAPSED_COLUMN).unwrap(), vec![0.01, 1.0]);
        assert_eq!(ds.cell(1, 0), Some("100"));
    }

    #[test]
    fn missing_column_lists_headers() {
        let ds = Dataset::from_reader("Height,Elapsed Time (s)\n1,2\n".as_bytes()).unwrap();
        match ds.numeric_column(WIDTH_COLUMN) {
            Err(DatasetError::MissingColumn { name, headers }) => {
                assert_eq!(name, "Width");
                assert_eq!(headers, vec!["Height", "Elapsed Time (s)"]);
            }
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_and_short_cells_become_nan() {
        let ds = Dataset::from_reader("Width,Elapsed Time (s)\n10,abc\n20,\n30\n 40 , 2.5 \n".as_bytes()).unwrap();
        let y = ds.numeric_column(ELAPSED_COLUMN).unwrap();
        assert_eq!(y.len(), 4);
        assert!(y[0].is_nan() && y[1].is_nan() && y[2].is_nan());
        assert_eq!(y[3], 2.5);
        assert_eq!(ds.numeric_column(WIDTH_COLUMN).unwrap(), vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn header_only_file_is_empty() {
        let ds = Dataset::from_reader("Width,Elapsed Time (s)\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert!(ds.numeric_column(WIDTH_COLUMN).unwrap().is_empty());
    }

    #[test]
    fn writer_formats_seconds_with_six_decimals() {
        let rows = [
            Measurement { width: 10, height: 10, elapsed: Duration::from_millis(12) },
            Measurement { width: 20, height: 20, elapsed: Duration::from_micros(1_500_001) },
        ];
        let mut out = Vec::new();
        write_measurements(&mut out, &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Width,Height,Elapsed Time (s)\n10,10,0.012000\n20,20,1.500001\n"
        );
    }
}

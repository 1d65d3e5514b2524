//! CSV Sample Loader Module
//! Handles CSV file loading and column extraction using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Header names the input file must carry.
pub const LATITUDE_COL: &str = "Latitude";
pub const LONGITUDE_COL: &str = "Longitude";
pub const RC_COL: &str = "Rc";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("No such data file: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    #[error("Non-numeric data in column {0}")]
    MalformedData(String),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// The three sample columns, flattened in row order.
#[derive(Debug, Clone, Default)]
pub struct SampleColumns {
    pub latitude: Vec<f64>,
    pub longitude: Vec<f64>,
    pub rc: Vec<f64>,
}

/// Load `path` as a headered CSV and extract the Latitude/Longitude/Rc
/// columns. A header-only file yields empty columns.
pub fn load_samples(path: &Path) -> Result<SampleColumns, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    Ok(SampleColumns {
        latitude: extract_f64(&df, LATITUDE_COL)?,
        longitude: extract_f64(&df, LONGITUDE_COL)?,
        rc: extract_f64(&df, RC_COL)?,
    })
}

/// Pull one named column out as `f64`, preserving row order.
fn extract_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>, LoaderError> {
    let column = df
        .column(name)
        .map_err(|_| LoaderError::ColumnNotFound(name.to_string()))?;

    let casted = column
        .cast(&DataType::Float64)
        .map_err(|_| LoaderError::MalformedData(name.to_string()))?;
    let ca = casted.f64()?;

    // A non-strict cast turns unparsable values into nulls; empty cells
    // arrive as nulls already. Neither can be placed on the grid.
    if ca.null_count() > 0 {
        return Err(LoaderError::MalformedData(name.to_string()));
    }

    Ok((0..ca.len()).filter_map(|i| ca.get(i)).collect())
}

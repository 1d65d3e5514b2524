//! Cutoff Grid - per-year cutoff radius samples on a regular grid
//!
//! Loads a year's `Planet.csv` of (Latitude, Longitude, Rc) samples and
//! pivots the long-format rows onto a regular grid with matching coordinate
//! meshes, ready for contour or surface plotting.

mod data;
mod grid;

pub use data::{LoaderError, PlanetLayout};
pub use grid::{meshgrid, pivot_to_grid, sorted_unique};

use ndarray::Array2;

/// Year used by callers with no particular year in mind.
pub const DEFAULT_YEAR: i32 = 2000;

/// The gridded result: two coordinate meshes and the value grid, all of
/// shape `(y_unique.len(), x_unique.len())`.
#[derive(Debug, Clone)]
pub struct CutoffGrid {
    /// Longitude mesh; every row equals the sorted unique longitudes.
    pub x: Array2<f64>,
    /// Latitude mesh; every column equals the sorted unique latitudes.
    pub y: Array2<f64>,
    /// Cutoff radius per cell, `NAN` where no sample exists.
    pub z: Array2<f64>,
}

/// Load the grid for `year` from the default
/// `cutoff/Planet/<year>/Planet.csv` layout.
pub fn cutoff(year: i32) -> Result<CutoffGrid, LoaderError> {
    cutoff_from(&PlanetLayout::default(), year)
}

/// Load the grid for `year` from a caller-supplied layout.
///
/// An input with zero data rows produces empty 0x0 meshes and grid rather
/// than an error. When two rows share the same (latitude, longitude) pair
/// the last row wins.
pub fn cutoff_from(layout: &PlanetLayout, year: i32) -> Result<CutoffGrid, LoaderError> {
    let samples = data::load_samples(&layout.csv_path(year))?;
    let (x_unique, y_unique, z) =
        grid::pivot_to_grid(&samples.longitude, &samples.latitude, &samples.rc);
    let (x, y) = grid::meshgrid(&x_unique, &y_unique);
    Ok(CutoffGrid { x, y, z })
}

//! Meshgrid Module
//! Broadcasts coordinate axes across the grid shape.

use ndarray::Array2;

/// Standard meshgrid: both outputs have shape `(y_axis.len(), x_axis.len())`,
/// with `x[(i, j)] == x_axis[j]` and `y[(i, j)] == y_axis[i]`.
pub fn meshgrid(x_axis: &[f64], y_axis: &[f64]) -> (Array2<f64>, Array2<f64>) {
    let shape = (y_axis.len(), x_axis.len());
    let x = Array2::from_shape_fn(shape, |(_, j)| x_axis[j]);
    let y = Array2::from_shape_fn(shape, |(i, _)| y_axis[i]);
    (x, y)
}

//! Pivot Module
//! Reshapes long-format (x, y, z) samples into a wide-format value grid.

use ndarray::Array2;

/// Sorted ascending with duplicates removed.
///
/// Total ordering keeps the result well-defined for non-finite inputs.
pub fn sorted_unique(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    // Dedup must agree with the total ordering (-0.0 and 0.0 stay distinct).
    out.dedup_by(|a, b| a.to_bits() == b.to_bits());
    out
}

/// Pivot samples onto a grid indexed by the sorted unique coordinates.
///
/// Returns `(x_unique, y_unique, z)` where `z` has shape
/// `(y_unique.len(), x_unique.len())` and cell `(i, j)` holds the value for
/// `(x_unique[j], y_unique[i])`. Cells no sample covers are `NAN`; when the
/// same (x, y) pair occurs more than once the last row wins.
pub fn pivot_to_grid(xs: &[f64], ys: &[f64], zs: &[f64]) -> (Vec<f64>, Vec<f64>, Array2<f64>) {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert_eq!(xs.len(), zs.len());

    let x_unique = sorted_unique(xs);
    let y_unique = sorted_unique(ys);

    let mut z = Array2::from_elem((y_unique.len(), x_unique.len()), f64::NAN);
    for ((&x, &y), &value) in xs.iter().zip(ys).zip(zs) {
        let j = axis_position(&x_unique, x);
        let i = axis_position(&y_unique, y);
        z[(i, j)] = value;
    }

    (x_unique, y_unique, z)
}

fn axis_position(axis: &[f64], value: f64) -> usize {
    axis.binary_search_by(|probe| probe.total_cmp(&value))
        .expect("coordinate taken from its own axis")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_unique_sorts_and_dedups() {
        let axis = sorted_unique(&[3.0, -1.0, 3.0, 0.5, -1.0]);
        assert_eq!(axis, vec![-1.0, 0.5, 3.0]);
    }

    #[test]
    fn square_scenario_places_values_row_major() {
        let xs = [1.0, 2.0, 1.0, 2.0];
        let ys = [1.0, 1.0, 2.0, 2.0];
        let zs = [10.0, 20.0, 30.0, 40.0];

        let (x_unique, y_unique, z) = pivot_to_grid(&xs, &ys, &zs);
        assert_eq!(x_unique, vec![1.0, 2.0]);
        assert_eq!(y_unique, vec![1.0, 2.0]);
        assert_eq!(z, ndarray::array![[10.0, 20.0], [30.0, 40.0]]);
    }

    #[test]
    fn uncovered_cells_are_nan() {
        // Three samples over a 2x2 axis cross leave one hole.
        let xs = [1.0, 2.0, 1.0];
        let ys = [1.0, 1.0, 2.0];
        let zs = [10.0, 20.0, 30.0];

        let (_, _, z) = pivot_to_grid(&xs, &ys, &zs);
        assert_eq!(z.dim(), (2, 2));
        assert!(z[(1, 1)].is_nan());
        assert_eq!(z[(0, 0)], 10.0);
    }

    #[test]
    fn duplicate_pair_keeps_last_value() {
        let xs = [5.0, 5.0];
        let ys = [7.0, 7.0];
        let zs = [1.0, 2.0];

        let (_, _, z) = pivot_to_grid(&xs, &ys, &zs);
        assert_eq!(z.dim(), (1, 1));
        assert_eq!(z[(0, 0)], 2.0);
    }

    #[test]
    fn empty_input_yields_empty_grid() {
        let (x_unique, y_unique, z) = pivot_to_grid(&[], &[], &[]);
        assert!(x_unique.is_empty());
        assert!(y_unique.is_empty());
        assert_eq!(z.dim(), (0, 0));
    }

    #[test]
    fn axes_are_strictly_ascending() {
        let xs = [0.0, -10.0, 0.0, 30.5, -10.0];
        let axis = sorted_unique(&xs);
        assert!(axis.windows(2).all(|w| w[0] < w[1]));
    }
}

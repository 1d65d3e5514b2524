//! Grid module - long-to-wide pivot and meshgrid construction

mod mesh;
mod pivot;

pub use mesh::meshgrid;
pub use pivot::{pivot_to_grid, sorted_unique};

//! Data module - path layout and CSV sample loading

mod layout;
mod loader;

pub use layout::PlanetLayout;
pub use loader::{load_samples, LoaderError, SampleColumns};

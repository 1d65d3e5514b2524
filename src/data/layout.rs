//! Path Layout Module
//! Resolves the location of the per-year planet CSV.

use std::path::{Path, PathBuf};

/// Where the per-year planet files live.
///
/// The default mirrors the original storage convention,
/// `cutoff/Planet/<year>/Planet.csv` relative to the working directory.
/// Point `root` elsewhere to read from another tree, or a temp dir in tests.
#[derive(Debug, Clone)]
pub struct PlanetLayout {
    root: PathBuf,
}

impl Default for PlanetLayout {
    fn default() -> Self {
        Self::new("cutoff/Planet")
    }
}

impl PlanetLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the CSV for `year`. Pure construction, no existence check.
    pub fn csv_path(&self, year: i32) -> PathBuf {
        self.root.join(year.to_string()).join("Planet.csv")
    }
}

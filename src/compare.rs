use std::fmt;
use std::path::{Path, PathBuf};

use crate::data::loader::{companion_path, load_measurement, NARROWBAND_SUFFIX};
use crate::data::model::SmoothedCurve;
use crate::data::smooth::smooth;
use crate::error::Result;

/// A selected panel whose data file is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFile {
    pub identifier: String,
    pub path: PathBuf,
}

impl fmt::Display for MissingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File `{}{NARROWBAND_SUFFIX}` not found.", self.identifier)
    }
}

/// Result of running the pipeline over a panel selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    /// Smoothed curves, in selection order.
    pub curves: Vec<SmoothedCurve>,
    /// One entry per selected panel without a data file.
    pub missing: Vec<MissingFile>,
}

/// Load and smooth the companion file of every selected panel.
///
/// Missing files are collected into [`Comparison::missing`] and the rest of
/// the selection is still processed. Any other failure aborts the run.
/// Curves are labelled with the panel identifier.
pub fn compare_panels<S: AsRef<str>>(
    dir: &Path,
    selection: &[S],
    window: usize,
) -> Result<Comparison> {
    let mut comparison = Comparison::default();

    for identifier in selection {
        let identifier = identifier.as_ref();
        let path = companion_path(dir, identifier);
        match load_measurement(&path) {
            Ok(mut measurement) => {
                measurement.label = identifier.to_string();
                comparison.curves.push(smooth(&measurement, window));
            }
            Err(e) if e.is_not_found() => {
                log::warn!("{identifier}: no data file at {}", path.display());
                comparison.missing.push(MissingFile {
                    identifier: identifier.to_string(),
                    path,
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(comparison)
}

/// Load and smooth every file in `paths`, failing on the first error.
pub fn compare_files(paths: &[PathBuf], window: usize) -> Result<Vec<SmoothedCurve>> {
    paths
        .iter()
        .map(|path| load_measurement(path).map(|m| smooth(&m, window)))
        .collect()
}

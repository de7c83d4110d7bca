use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::smooth::DEFAULT_WINDOW;
use crate::error::{Result, TlError};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "tl-compare.json";

/// Runtime settings shared by both front-ends. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the NarrowBand files, panel photos and `panels.json`.
    pub data_dir: PathBuf,
    /// Moving-average window in samples.
    pub window: usize,
    /// Batch chart path; relative paths resolve against `data_dir`.
    pub output: PathBuf,
    /// Panels ticked when the dashboard opens.
    pub default_selection: Vec<String>,
    /// Batch chart size in pixels.
    pub image_size: (u32, u32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            window: DEFAULT_WINDOW,
            output: PathBuf::from("Comparaison_TL_Moyenne_50Hz.png"),
            default_selection: vec!["Panneau 2".to_string(), "Panneau 5".to_string()],
            // 14 x 8 inches at 300 DPI
            image_size: (4200, 2400),
        }
    }
}

impl Settings {
    /// Read settings from `path`; an absent file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(TlError::from_io(path, e)),
        };

        let settings: Settings =
            serde_json::from_str(&text).map_err(|source| TlError::Settings {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Where the batch chart is written.
    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output)
    }
}

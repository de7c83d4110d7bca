use std::path::PathBuf;

use tl_compare::catalog::PanelCatalog;
use tl_compare::color::ColorMap;
use tl_compare::compare::{compare_panels, Comparison};
use tl_compare::config::Settings;
use tl_compare::render::{assemble_traces, Trace};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: Settings,

    /// Directory holding the NarrowBand files and panel photos.
    pub data_dir: PathBuf,

    /// Panels offered in the selector.
    pub catalog: PanelCatalog,

    /// One colour per catalog panel, stable across selections.
    pub colors: ColorMap,

    /// Selected panel names, in catalog order.
    pub selection: Vec<String>,

    /// Draw the faint narrow-band traces under the averages.
    pub show_raw: bool,

    /// Output of the last pipeline run.
    pub comparison: Comparison,

    /// Traces built from `comparison`.
    pub traces: Vec<Trace>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let data_dir = settings.data_dir.clone();
        let selection = settings.default_selection.clone();
        let mut state = Self {
            settings,
            data_dir: PathBuf::new(),
            catalog: PanelCatalog::default(),
            colors: ColorMap::new(Vec::<String>::new()),
            selection,
            show_raw: true,
            comparison: Comparison::default(),
            traces: Vec::new(),
            status_message: None,
        };
        state.set_data_dir(data_dir);
        state
    }

    /// Switch to another data directory: reload its catalog and rerun.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        log::info!("Using data directory {}", dir.display());
        let (catalog, catalog_error) = match PanelCatalog::load(&dir) {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                log::error!("Failed to load panel catalog: {e}");
                (PanelCatalog::builtin().unwrap_or_default(), Some(e))
            }
        };
        self.colors = ColorMap::new(catalog.names());
        self.catalog = catalog;
        self.data_dir = dir;

        let catalog = &self.catalog;
        self.selection.retain(|name| catalog.get(name).is_some());
        self.sort_selection();
        self.selection.dedup();
        self.refresh();

        if let Some(e) = catalog_error {
            self.status_message = Some(format!("Error: {e}"));
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.iter().any(|s| s == name)
    }

    /// Add or remove a panel from the selection and rerun the pipeline.
    pub fn toggle_panel(&mut self, name: &str) {
        if self.is_selected(name) {
            self.selection.retain(|s| s != name);
        } else if self.catalog.get(name).is_some() {
            self.selection.push(name.to_string());
            self.sort_selection();
        }
        self.refresh();
    }

    /// Reload and smooth every selected panel from disk.
    pub fn refresh(&mut self) {
        match compare_panels(&self.data_dir, &self.selection, self.settings.window) {
            Ok(comparison) => {
                let colors: Vec<_> = comparison
                    .curves
                    .iter()
                    .map(|c| self.colors.color_for(&c.label))
                    .collect();
                self.traces = assemble_traces(&comparison.curves, &colors, self.settings.window);
                self.comparison = comparison;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to build comparison: {e}");
                self.comparison = Comparison::default();
                self.traces.clear();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn sort_selection(&mut self) {
        let order: Vec<&str> = self.catalog.names().collect();
        self.selection
            .sort_by_key(|name| order.iter().position(|n| *n == name.as_str()).unwrap_or(usize::MAX));
    }
}

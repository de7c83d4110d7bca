use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TlError};

/// File name of a catalog that replaces the built-in one when present in
/// the data directory.
pub const CATALOG_FILE: &str = "panels.json";

const BUILTIN_CATALOG: &str = include_str!("../assets/panels.json");

// ---------------------------------------------------------------------------
// PanelDescriptor – technical sheet of one measured panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelDescriptor {
    /// Identifier shown in the selector; also the stem of its data file.
    pub name: String,
    pub model: String,
    pub thickness: String,
    pub composition: String,
    /// Photo file, relative to the data directory.
    pub image: PathBuf,
}

// ---------------------------------------------------------------------------
// PanelCatalog – the enumerated set of selectable panels
// ---------------------------------------------------------------------------

/// Ordered, read-only list of panel descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelCatalog {
    panels: Vec<PanelDescriptor>,
}

impl PanelCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG, "built-in")
    }

    /// `dir/panels.json` when it exists, the built-in catalog otherwise.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CATALOG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let catalog = Self::from_json(&text, &path.display().to_string())?;
                log::info!("Loaded {} panels from {}", catalog.len(), path.display());
                Ok(catalog)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::builtin(),
            Err(e) => Err(TlError::from_io(path, e)),
        }
    }

    pub fn from_json(text: &str, origin: &str) -> Result<Self> {
        let panels: Vec<PanelDescriptor> =
            serde_json::from_str(text).map_err(|source| TlError::Catalog {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self { panels })
    }

    pub fn get(&self, name: &str) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor> {
        self.panels.iter()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_six_panels() {
        let catalog = PanelCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names.first(), Some(&"Panneau 1"));
        assert_eq!(names.last(), Some(&"Panneau 6"));

        let p5 = catalog.get("Panneau 5").unwrap();
        assert_eq!(p5.model, "PRESTIGE OPTIMA");
        assert_eq!(p5.thickness, "70mm");
        assert_eq!(p5.image, PathBuf::from("P5.png"));
    }

    #[test]
    fn directory_catalog_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CATALOG_FILE),
            r#"[{"name": "Sample", "model": "M", "thickness": "10mm",
                 "composition": "Alu", "image": "s.png"}]"#,
        )
        .unwrap();

        let catalog = PanelCatalog::load(dir.path()).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Sample"]);
    }

    #[test]
    fn empty_directory_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            PanelCatalog::load(dir.path()).unwrap(),
            PanelCatalog::builtin().unwrap()
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PanelCatalog::from_json(
            r#"[{"name": "X", "model": "M", "thickness": "1", "composition": "c",
                 "image": "x.png", "colour": "red"}]"#,
            "test",
        )
        .unwrap_err();
        assert!(matches!(err, TlError::Catalog { .. }));
    }
}

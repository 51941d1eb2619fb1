//! Scanner catalog loading
//!
//! A catalog is a table of scanner models keyed by an opaque identifier:
//!
//! ```toml
//! [scanners.galvo-30k]
//! name = "Galvo 30K"
//! max_angle = 60
//! specs = [{ angle = 8, kpps = 30, note = "ILDA" }]
//! ```
//!
//! The same shape is accepted as JSON (`{"scanners": {"galvo-30k": {...}}}`).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::model::ScannerModel;
use crate::error::{Result, ScanError};

const BUNDLED_CATALOG: &str = include_str!("../../data/scanners.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    scanners: BTreeMap<String, ScannerModel>,
}

/// Read-only collection of scanner models keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct ScannerCatalog {
    scanners: BTreeMap<String, ScannerModel>,
}

impl ScannerCatalog {
    /// The catalog compiled into the crate
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::from_file(file))
    }

    /// Load a catalog from disk, choosing the parser by file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let catalog = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(ScanError::UnsupportedFormat(path.display().to_string())),
        };

        log::info!(
            "Loaded {} scanner(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn from_file(file: CatalogFile) -> Self {
        for (id, model) in &file.scanners {
            if model.specs.is_empty() {
                log::warn!("Scanner '{}' has no specification points", id);
            } else {
                log::debug!("Scanner '{}': {} spec point(s)", id, model.specs.len());
            }
        }
        Self {
            scanners: file.scanners,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ScannerModel> {
        self.scanners.get(id)
    }

    /// Like [`get`](Self::get), but an unknown identifier is an error
    pub fn require(&self, id: &str) -> Result<&ScannerModel> {
        self.get(id)
            .ok_or_else(|| ScanError::UnknownScanner(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scanners.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScannerModel)> {
        self.scanners.iter().map(|(id, model)| (id.as_str(), model))
    }

    pub fn len(&self) -> usize {
        self.scanners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scanners.is_empty()
    }
}

impl FromIterator<(String, ScannerModel)> for ScannerCatalog {
    fn from_iter<I: IntoIterator<Item = (String, ScannerModel)>>(iter: I) -> Self {
        Self {
            scanners: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = ScannerCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        for (id, model) in catalog.iter() {
            assert!(!model.specs.is_empty(), "{} has no specs", id);
            assert!(!model.name.is_empty());
        }
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = ScannerCatalog::from_toml_str(
            r#"
            [scanners.b]
            name = "B"
            maxKpps = 45
            specs = [{ angle = 8, kpps = 30 }]

            [scanners.a]
            name = "A"
            specs = []
            "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(catalog.get("b").unwrap().max_kpps, Some(45.0));
        assert!(catalog.get("c").is_none());
    }

    #[test]
    fn test_from_json_str() {
        let catalog = ScannerCatalog::from_json_str(
            r#"{"scanners": {"x": {"name": "X", "specs": [{"angle": 20, "kpps": 12, "note": "ILDA"}], "max_angle": 30}}}"#,
        )
        .unwrap();
        let model = catalog.require("x").unwrap();
        assert_eq!(model.max_angle, Some(30.0));
        assert_eq!(model.specs.len(), 1);
    }

    #[test]
    fn test_require_unknown() {
        let catalog = ScannerCatalog::default();
        assert!(matches!(
            catalog.require("missing"),
            Err(ScanError::UnknownScanner(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ScannerCatalog::from_toml_str("[scanners.x]\nname = 5"),
            Err(ScanError::Toml(_))
        ));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let path = std::env::temp_dir().join("laserscan_catalog_test.yaml");
        fs::write(&path, "scanners: {}").unwrap();
        let result = ScannerCatalog::load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ScanError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ScannerCatalog::load("/nonexistent/laserscan/catalog.toml");
        assert!(matches!(result, Err(ScanError::Io(_))));
    }
}

use super::Catalog;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogStoreError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write catalog file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("catalog could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// JSON persistence for the catalog document. Fields this version does
/// not model (administrators edit the file by hand) survive a
/// load/save round-trip via the `extra` maps on every level.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the catalog, or an empty one with the standard defaults when
    /// no file exists yet.
    pub fn load(&self) -> Result<Catalog, CatalogStoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no catalog file; starting empty");
            return Ok(Catalog::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| {
            CatalogStoreError::Read {
                path: self.path.clone(),
                source,
            }
        })?;
        let catalog: Catalog =
            serde_json::from_str(&contents).map_err(|source| CatalogStoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            occupations = catalog.occupations.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Persists the full document verbatim, including extra fields.
    pub fn save(&self, catalog: &Catalog) -> Result<(), CatalogStoreError> {
        let contents =
            serde_json::to_string_pretty(catalog).map_err(CatalogStoreError::Serialize)?;
        std::fs::write(&self.path, contents).map_err(|source| CatalogStoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            occupations = catalog.occupations.len(),
            "catalog saved"
        );
        Ok(())
    }
}

/// Copy-on-write holder for the active catalog. Batch runs take an
/// `Arc` snapshot and never observe a half-applied mutation;
/// administrative edits build a new value and swap the reference.
#[derive(Debug)]
pub struct CatalogHandle {
    active: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            active: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.active
            .read()
            .expect("catalog handle lock poisoned")
            .clone()
    }

    pub fn replace(&self, catalog: Catalog) {
        *self
            .active
            .write()
            .expect("catalog handle lock poisoned") = Arc::new(catalog);
    }

    /// Applies an edit to a copy of the active catalog and swaps it in.
    /// In-flight snapshots keep the previous value.
    pub fn mutate<T>(&self, edit: impl FnOnce(&mut Catalog) -> T) -> T {
        let mut next = Catalog::clone(&self.snapshot());
        let outcome = edit(&mut next);
        self.replace(next);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CatalogStore::new(dir.path().join("config.json"));

        let catalog = store.load().expect("load succeeds");
        assert!(catalog.occupations.is_empty());
        assert_eq!(catalog.default_occupation, "MOZO");
        assert_eq!(catalog.default_local_group, "OTHER");
    }

    #[test]
    fn round_trip_preserves_unknown_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let document = json!({
            "app_settings": { "destination_path": "output/" },
            "default_occupation": "MOZO",
            "default_local_group": "OTHER",
            "occupations": [{
                "name": "PACKER",
                "display_name": "Packer",
                "synonyms": ["PACKER"],
                "garments": [{
                    "garment_type": "POLO",
                    "display_name": "Polo",
                    "garment_class": "UPPER",
                    "is_primary": true,
                    "price_sml_other": 13.5,
                    "supplier_code": "P-113"
                }],
                "notes": "added by hand"
            }]
        });
        std::fs::write(&path, document.to_string()).expect("seed file");

        let store = CatalogStore::new(&path);
        let catalog = store.load().expect("load succeeds");
        assert_eq!(catalog.occupations.len(), 1);
        assert_eq!(
            catalog.occupations[0].garments[0].prices.price_sml_other,
            13.5
        );
        store.save(&catalog).expect("save succeeds");

        let reloaded: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read back"))
                .expect("valid json");
        assert_eq!(reloaded["app_settings"]["destination_path"], "output/");
        assert_eq!(reloaded["occupations"][0]["notes"], "added by hand");
        assert_eq!(
            reloaded["occupations"][0]["garments"][0]["supplier_code"],
            "P-113"
        );
    }

    #[test]
    fn handle_snapshots_survive_mutation() {
        let handle = CatalogHandle::new(Catalog::standard());
        let before = handle.snapshot();
        let occupations_before = before.occupations.len();

        handle.mutate(|catalog| {
            catalog
                .delete_occupation("PACKER")
                .expect("packer exists in the standard catalog")
        });

        assert_eq!(before.occupations.len(), occupations_before);
        assert!(handle.snapshot().find("PACKER").is_none());
    }
}

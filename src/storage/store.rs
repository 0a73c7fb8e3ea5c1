use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::metadata::Catalog;
use super::error::StoreError;

/// File name used when no explicit data file is configured.
pub const DATA_FILE_NAME: &str = "produtos.json";

/// Whole-document JSON persistence for the catalog.
///
/// Every save overwrites the file with the full snapshot. There is no
/// temp-file rename, so a crash mid-write can leave a truncated document;
/// the next load reports it as unparseable.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    /// Store placed next to the running executable, or in the working
    /// directory when that location is unknown.
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Store::new(dir.join(DATA_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the catalog. A missing file is an empty catalog, not an error.
    pub fn load(&self) -> Result<Catalog, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file absent, starting empty");
            return Ok(Catalog::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let catalog: Catalog = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Overwrites the data file with the full catalog.
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(catalog).map_err(StoreError::Serialize)?;

        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), products = catalog.len(), "saved catalog");
        Ok(())
    }
}

//! Record retrieval behind the [`SiteStore`] trait.
//!
//! Retrieval is plain key lookup: fetch everything, or fetch one record by
//! id. A miss is `Ok(None)`, never an error. [`BuiltinStore`] serves the
//! records shipped in source; [`JsonStore`] reads a JSON array of records
//! from disk, standing in for a remote document database.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::sites;
use crate::error::AtlasError;
use crate::types::HeritageSite;

/// Read access to heritage-site records.
pub trait SiteStore {
    /// Fetch all records in listing order.
    fn fetch_all(&self) -> Result<Vec<HeritageSite>, AtlasError>;

    /// Fetch one record by id. Unknown ids are a miss, not a fault.
    fn fetch_by_id(&self, id: u32) -> Result<Option<HeritageSite>, AtlasError> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .find(|site| site.id == id))
    }

    /// Fetch the records that carry an AR experience link.
    fn fetch_ar_sites(&self) -> Result<Vec<HeritageSite>, AtlasError> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .filter(|site| site.is_ar_ready())
            .collect())
    }
}

/// Store serving the builtin records.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl BuiltinStore {
    pub fn new() -> Self {
        Self
    }
}

impl SiteStore for BuiltinStore {
    fn fetch_all(&self) -> Result<Vec<HeritageSite>, AtlasError> {
        Ok(sites::builtin_sites())
    }
}

/// Store reading a JSON array of records from a file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store over the given catalog file. The file is read on each
    /// fetch, not held open.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The catalog file this store reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SiteStore for JsonStore {
    fn fetch_all(&self) -> Result<Vec<HeritageSite>, AtlasError> {
        debug!(path = %self.path.display(), "loading catalog file");

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AtlasError::CatalogRead(format!("{}: {}", self.path.display(), e)))?;

        let records: Vec<HeritageSite> = serde_json::from_str(&raw)
            .map_err(|e| AtlasError::CatalogParse(e.to_string()))?;

        info!(
            path = %self.path.display(),
            records = records.len(),
            "catalog loaded"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_store_fetch_all() {
        let store = BuiltinStore::new();
        let sites = store.fetch_all().unwrap();
        assert_eq!(sites.len(), 6);
    }

    #[test]
    fn test_builtin_store_fetch_by_id() {
        let store = BuiltinStore::new();

        let golden = store.fetch_by_id(4).unwrap().unwrap();
        assert_eq!(golden.title, "Golden Temple");

        // Miss, not error.
        assert_eq!(store.fetch_by_id(404).unwrap(), None);
    }

    #[test]
    fn test_json_store_roundtrip() {
        let sites = sites::builtin_sites();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&sites).unwrap().as_bytes())
            .unwrap();

        let store = JsonStore::new(file.path());
        assert_eq!(store.fetch_all().unwrap(), sites);
        assert_eq!(
            store.fetch_by_id(2).unwrap().unwrap().title,
            "Konark Sun Temple"
        );
    }

    #[test]
    fn test_json_store_missing_file() {
        let store = JsonStore::new("/nonexistent/catalog.json");
        match store.fetch_all() {
            Err(AtlasError::CatalogRead(_)) => (),
            other => panic!("Expected CatalogRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_store_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not a record array ]").unwrap();

        let store = JsonStore::new(file.path());
        match store.fetch_all() {
            Err(AtlasError::CatalogParse(_)) => (),
            other => panic!("Expected CatalogParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_ar_sites_filters() {
        let mut sites = sites::builtin_sites();
        sites[1].ar_url = None;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&sites).unwrap().as_bytes())
            .unwrap();

        let store = JsonStore::new(file.path());
        let ar = store.fetch_ar_sites().unwrap();
        assert_eq!(ar.len(), sites.len() - 1);
        assert!(ar.iter().all(|site| site.id != 1));
    }
}

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use zoo_types::Animal;

use crate::error::{StoreError, StoreResult};
use crate::traits::CatalogStorage;

/// On-disk shape of the catalog: `{ "animals": [ ... ] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub animals: Vec<Animal>,
}

#[derive(Serialize)]
struct CatalogDocumentRef<'a> {
    animals: &'a [Animal],
}

/// Catalog persisted as a single pretty-printed JSON file.
///
/// Saves write the full document to a temporary file in the same directory,
/// fsync it, then rename it over the target, so readers see either the old
/// document or the new one. A missing file loads as an empty catalog and is
/// created on the first save.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl CatalogStorage for JsonFileStorage {
    fn load(&self) -> StoreResult<Vec<Animal>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "catalog file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let document: CatalogDocument = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            count = document.animals.len(),
            "loaded catalog"
        );
        Ok(document.animals)
    }

    fn save(&self, animals: &[Animal]) -> StoreResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &CatalogDocumentRef { animals })?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            reason: e.error.to_string(),
        })?;

        debug!(path = %self.path.display(), count = animals.len(), "saved catalog");
        Ok(())
    }
}

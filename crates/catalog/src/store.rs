//! Catalog store: load-once, read-many holder of item records.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::item::Item;

/// Startup failure while loading the catalog file.
///
/// Neither variant is recoverable at request time; the process cannot serve
/// without a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk shape of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    total_items: Option<usize>,
    items: Vec<Item>,
}

/// Immutable, ordered item collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Load the catalog from a JSON file (`{ total_items, items: [...] }`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CatalogFile = serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(declared) = file.total_items {
            if declared != file.items.len() {
                tracing::warn!(
                    declared,
                    actual = file.items.len(),
                    "catalog total_items does not match record count"
                );
            }
        }

        tracing::info!(path = %path.display(), items = file.items.len(), "catalog loaded");
        Ok(Self::from_items(file.items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

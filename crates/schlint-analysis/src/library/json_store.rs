//! JSON-file library store.
//!
//! A library file holds `{"components": [{name, reference, fields, pins}]}`.
//! The library identifier is the file path.

use std::path::Path;

use schlint_core::errors::{DecodeError, PersistenceError};

use super::{Library, LibraryStore};
use crate::atomic::write_atomic;

/// Decodes and saves libraries stored as JSON documents on disk.
#[derive(Debug, Clone, Default)]
pub struct JsonLibraryStore;

impl JsonLibraryStore {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryStore for JsonLibraryStore {
    fn decode(&self, library_id: &str) -> Result<Library, DecodeError> {
        let path = Path::new(library_id);
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DecodeError::NotFound {
                    library: library_id.to_string(),
                }
            } else {
                DecodeError::Io {
                    library: library_id.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let mut library: Library =
            serde_json::from_str(&content).map_err(|e| DecodeError::Malformed {
                library: library_id.to_string(),
                message: e.to_string(),
            })?;
        library.id = library_id.to_string();
        library.ensure_unique_names()?;

        tracing::debug!(library = library_id, components = library.components.len(), "decoded");
        Ok(library)
    }

    fn save(&self, library: &Library) -> Result<(), PersistenceError> {
        let mut bytes =
            serde_json::to_vec_pretty(library).map_err(|e| PersistenceError::Encode {
                library: library.id.clone(),
                message: e.to_string(),
            })?;
        bytes.push(b'\n');

        write_atomic(Path::new(&library.id), &bytes).map_err(|e| PersistenceError::Write {
            library: library.id.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(library = %library.id, "saved");
        Ok(())
    }
}

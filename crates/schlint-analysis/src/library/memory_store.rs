//! In-memory library store, for embedding the engine without a filesystem.

use std::cell::RefCell;
use std::collections::BTreeMap;

use schlint_core::errors::{DecodeError, PersistenceError};

use super::{Library, LibraryStore};

/// Holds libraries keyed by identifier; `save` replaces the stored copy.
#[derive(Debug, Default)]
pub struct MemoryLibraryStore {
    libraries: RefCell<BTreeMap<String, Library>>,
    saves: RefCell<Vec<String>>,
}

impl MemoryLibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(self, library: Library) -> Self {
        self.libraries
            .borrow_mut()
            .insert(library.id.clone(), library);
        self
    }

    /// Current stored copy of a library.
    pub fn get(&self, library_id: &str) -> Option<Library> {
        self.libraries.borrow().get(library_id).cloned()
    }

    /// Identifiers passed to `save`, in call order.
    pub fn saves(&self) -> Vec<String> {
        self.saves.borrow().clone()
    }
}

impl LibraryStore for MemoryLibraryStore {
    fn decode(&self, library_id: &str) -> Result<Library, DecodeError> {
        self.libraries
            .borrow()
            .get(library_id)
            .cloned()
            .ok_or_else(|| DecodeError::NotFound {
                library: library_id.to_string(),
            })
    }

    fn save(&self, library: &Library) -> Result<(), PersistenceError> {
        self.saves.borrow_mut().push(library.id.clone());
        self.libraries
            .borrow_mut()
            .insert(library.id.clone(), library.clone());
        Ok(())
    }
}

//! Library model and the stores that decode and persist it.

pub mod json_store;
pub mod memory_store;
pub mod types;

pub use json_store::JsonLibraryStore;
pub use memory_store::MemoryLibraryStore;
pub use types::*;

use schlint_core::errors::{DecodeError, PersistenceError};

/// Source of truth for libraries.
///
/// `decode` turns a library identifier into components; `save` writes the
/// in-memory state (including fixes) back. The runner calls `save` at most
/// once per library, after every component has been processed.
pub trait LibraryStore {
    fn decode(&self, library_id: &str) -> Result<Library, DecodeError>;
    fn save(&self, library: &Library) -> Result<(), PersistenceError>;
}

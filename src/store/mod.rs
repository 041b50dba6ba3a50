//! # Storage Layer
//!
//! This module defines the storage abstraction for bookz. The [`Backend`]
//! trait lets the catalog work with different persistence backends.
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryBackend` (no filesystem needed)
//! - Allow **future backends** without changing catalog logic
//! - Keep the catalog **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production file-based storage
//!   - The whole collection lives in a single JSON array (pretty-printed)
//!   - Path is configurable; default is `library.json`
//!
//! - [`memory::MemoryBackend`]: In-memory snapshot for testing
//!   - Holds the serialized JSON, so tests exercise the same serde path
//!
//! ## Snapshot Model
//!
//! Backends do not understand individual records. They load and save the
//! collection as one snapshot; the catalog rewrites the whole snapshot after
//! every mutation. There is no append mode and no in-place patching.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait Backend {
    /// Load the persisted collection. `Ok(None)` means no snapshot exists
    /// yet (first run); that is not an error.
    fn load(&self) -> Result<Option<Vec<Book>>>;

    /// Overwrite the snapshot with the given collection.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}

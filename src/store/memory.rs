use super::Backend;
use crate::error::{CatalogError, Result};
use crate::model::Book;

/// In-memory backend for testing and development.
/// Keeps the serialized snapshot, so loads go through the same serde path
/// as the file backend.
#[derive(Default)]
pub struct MemoryBackend {
    snapshot: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the backend with raw JSON, as if a file already existed.
    pub fn with_snapshot(json: impl Into<String>) -> Self {
        Self {
            snapshot: Some(json.into()),
        }
    }

    /// The raw persisted snapshot, if any. Test hook.
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<Book>>> {
        match &self.snapshot {
            None => Ok(None),
            Some(json) => {
                let books = serde_json::from_str(json).map_err(CatalogError::MalformedData)?;
                Ok(Some(books))
            }
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let json = serde_json::to_string_pretty(books).map_err(CatalogError::MalformedData)?;
        self.snapshot = Some(json);
        Ok(())
    }
}

use super::Backend;
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based backend: one JSON array per catalog, rewritten whole on save.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn load(&self) -> Result<Option<Vec<Book>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
        let books = serde_json::from_str(&content).map_err(CatalogError::MalformedData)?;
        Ok(Some(books))
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        // Pretty-printed UTF-8; serde_json leaves non-ASCII text unescaped.
        let content = serde_json::to_string_pretty(books).map_err(CatalogError::MalformedData)?;
        fs::write(&self.path, content).map_err(CatalogError::Io)?;
        Ok(())
    }
}

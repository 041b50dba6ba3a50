//! The catalog: an ordered in-memory collection of books plus its backend.
//!
//! The collection is the source of truth for the session; the backend is its
//! durable mirror. Every mutating operation persists the whole collection
//! before returning, so a successful call implies the snapshot is current.

use crate::error::Result;
use crate::model::Book;
use crate::store::Backend;

/// Optional, conjunctive search criteria for [`Catalog::find`].
///
/// Title and author are case-insensitive substring tests; year is an exact
/// match. Absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl BookFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none()
    }

    fn matches(&self, book: &Book) -> bool {
        if let Some(title) = &self.title {
            if !book.title.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }
        if let Some(author) = &self.author {
            if !book.author.to_lowercase().contains(&author.to_lowercase()) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if book.year != year {
                return false;
            }
        }
        true
    }
}

/// The book catalog, generic over its persistence backend.
///
/// Production uses `Catalog<FileBackend>`; tests use `Catalog<MemoryBackend>`.
pub struct Catalog<B: Backend> {
    books: Vec<Book>,
    backend: B,
}

impl<B: Backend> Catalog<B> {
    /// Open a catalog on the given backend.
    ///
    /// A missing snapshot means a fresh, empty catalog. A snapshot that
    /// exists but does not parse aborts construction; no partial state is
    /// adopted.
    pub fn open(backend: B) -> Result<Self> {
        let books = backend.load()?.unwrap_or_default();
        Ok(Self { books, backend })
    }

    /// Add a book and return it. The id is assigned here: 1 for an empty
    /// catalog, otherwise max(existing ids) + 1. Ids are unique among the
    /// books currently held; removing the highest-numbered book frees its id
    /// for the next add, which is accepted.
    pub fn add(&mut self, title: String, author: String, year: i32) -> Result<Book> {
        let book = Book::new(self.next_id(), title, author, year);
        self.books.push(book.clone());
        self.backend.save(&self.books)?;
        Ok(book)
    }

    /// Remove the book with the given id. Returns false, with no side
    /// effect, when no such book exists.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let Some(pos) = self.books.iter().position(|b| b.id == id) else {
            return Ok(false);
        };
        self.books.remove(pos);
        self.backend.save(&self.books)?;
        Ok(true)
    }

    /// All books matching the filter, in insertion order. An empty filter
    /// matches everything.
    pub fn find(&self, filter: &BookFilter) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect()
    }

    /// All books, in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Overwrite the status of the book with the given id, verbatim. The
    /// status is free text; no allowed-values check is applied. Returns
    /// false, with no side effect, when no such book exists.
    pub fn update_status(&mut self, id: u64, status: &str) -> Result<bool> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        book.status = status.to_string();
        self.backend.save(&self.books)?;
        Ok(true)
    }

    fn next_id(&self) -> u64 {
        self.books.iter().map(|b| b.id).max().map_or(1, |id| id + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::{STATUS_AVAILABLE, STATUS_CHECKED_OUT};
    use crate::store::memory::MemoryBackend;

    fn empty_catalog() -> Catalog<MemoryBackend> {
        Catalog::open(MemoryBackend::new()).unwrap()
    }

    #[test]
    fn open_on_missing_snapshot_is_empty() {
        let catalog = empty_catalog();
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn open_on_malformed_snapshot_fails() {
        let backend = MemoryBackend::with_snapshot(r#"[{"id": "not a number"}]"#);
        assert!(matches!(
            Catalog::open(backend),
            Err(CatalogError::MalformedData(_))
        ));
    }

    #[test]
    fn add_assigns_sequential_unique_ids() {
        let mut catalog = empty_catalog();
        let a = catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        let b = catalog.add("Hobbit".into(), "Tolkien".into(), 1937).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let ids: Vec<_> = catalog.list().iter().map(|b| b.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn add_defaults_status_and_persists() {
        let mut catalog = empty_catalog();
        let book = catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        assert_eq!(book.status, STATUS_AVAILABLE);

        // Snapshot mirrors memory immediately after the mutation.
        let reopened = Catalog::open(MemoryBackend::with_snapshot(
            catalog.backend.snapshot().unwrap(),
        ))
        .unwrap();
        assert_eq!(reopened.list(), catalog.list());
    }

    #[test]
    fn id_generation_never_reuses_freed_middle_ids() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        catalog.add("Hobbit".into(), "Tolkien".into(), 1937).unwrap();
        assert!(catalog.remove(1).unwrap());

        // Max existing id is 2, so the next id is 3 even though 1 is free.
        let c = catalog
            .add("Silmarillion".into(), "Tolkien".into(), 1977)
            .unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn remove_is_true_exactly_once_per_id() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();

        assert!(catalog.remove(1).unwrap());
        assert!(!catalog.remove(1).unwrap());
        assert!(!catalog.remove(99).unwrap());
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn add_then_find_by_exact_fields_returns_the_book() {
        let mut catalog = empty_catalog();
        let added = catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();

        let found = catalog.find(&BookFilter {
            title: Some("Dune".into()),
            author: Some("Herbert".into()),
            year: None,
        });
        assert_eq!(found, vec![added]);
    }

    #[test]
    fn find_title_is_case_insensitive_substring() {
        let mut catalog = empty_catalog();
        catalog
            .add("The Fellowship of the Ring".into(), "Tolkien".into(), 1954)
            .unwrap();
        catalog
            .add("the two towers".into(), "Tolkien".into(), 1954)
            .unwrap();

        let found = catalog.find(&BookFilter {
            title: Some("THE".into()),
            ..Default::default()
        });
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn find_year_is_exact_match() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        catalog
            .add("Dune Messiah".into(), "Herbert".into(), 1969)
            .unwrap();

        let found = catalog.find(&BookFilter {
            year: Some(1965),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Dune");
    }

    #[test]
    fn find_filters_are_conjunctive() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        catalog.add("Hobbit".into(), "Tolkien".into(), 1937).unwrap();

        let found = catalog.find(&BookFilter {
            author: Some("tolkien".into()),
            year: Some(1965),
            ..Default::default()
        });
        assert!(found.is_empty());
    }

    #[test]
    fn empty_filter_returns_everything_in_insertion_order() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        catalog.add("Hobbit".into(), "Tolkien".into(), 1937).unwrap();

        let found = catalog.find(&BookFilter::default());
        assert_eq!(found, catalog.list());
    }

    #[test]
    fn update_status_overwrites_verbatim_and_keeps_other_fields() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();

        assert!(catalog.update_status(1, STATUS_CHECKED_OUT).unwrap());
        let book = &catalog.list()[0];
        assert_eq!(book.status, STATUS_CHECKED_OUT);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.year, 1965);

        // Free text is accepted as-is.
        assert!(catalog.update_status(1, "on loan to Sasha").unwrap());
        assert_eq!(catalog.list()[0].status, "on loan to Sasha");
    }

    #[test]
    fn update_status_on_unknown_id_is_false_without_persist() {
        let mut catalog = empty_catalog();
        assert!(!catalog.update_status(1, STATUS_CHECKED_OUT).unwrap());
        assert!(catalog.backend.snapshot().is_none());
    }

    #[test]
    fn reopening_from_snapshot_preserves_ids_fields_and_order() {
        let mut catalog = empty_catalog();
        catalog.add("Dune".into(), "Herbert".into(), 1965).unwrap();
        catalog.add("Hobbit".into(), "Tolkien".into(), 1937).unwrap();
        catalog.update_status(2, STATUS_CHECKED_OUT).unwrap();

        let reopened = Catalog::open(MemoryBackend::with_snapshot(
            catalog.backend.snapshot().unwrap(),
        ))
        .unwrap();
        assert_eq!(reopened.list(), catalog.list());
    }
}

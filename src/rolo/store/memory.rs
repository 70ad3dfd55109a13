use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ContactStore;
use crate::error::{Result, RoloError};
use crate::model::Phonebook;

/// In-memory storage keyed by path, for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: HashMap<PathBuf, Phonebook>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the store off with one existing book.
    pub fn with_book(path: impl Into<PathBuf>, book: Phonebook) -> Self {
        let mut store = Self::new();
        store.books.insert(path.into(), book);
        store
    }

    /// Direct read access for assertions.
    pub fn book_at(&self, path: &Path) -> Option<&Phonebook> {
        self.books.get(path)
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<Phonebook> {
        self.books
            .get(path)
            .cloned()
            .ok_or_else(|| RoloError::BookNotFound(path.to_path_buf()))
    }

    fn save(&mut self, path: &Path, book: &Phonebook) -> Result<()> {
        self.books.insert(path.to_path_buf(), book.clone());
        Ok(())
    }

    fn create(&mut self, path: &Path) -> Result<()> {
        if self.books.contains_key(path) {
            return Err(RoloError::BookExists(path.to_path_buf()));
        }
        self.books.insert(path.to_path_buf(), Phonebook::new());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a book from name/number pairs.
    pub fn book(entries: &[(&str, &str)]) -> Phonebook {
        entries
            .iter()
            .map(|(name, number)| (name.to_string(), number.to_string()))
            .collect()
    }

    /// An in-memory store holding one book at `path`.
    pub fn store_with(path: &str, entries: &[(&str, &str)]) -> InMemoryStore {
        InMemoryStore::with_book(path, book(entries))
    }
}

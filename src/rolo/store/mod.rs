//! # Storage Layer
//!
//! The [`ContactStore`] trait decouples phonebook persistence from the
//! command layer, so business logic runs against [`memory::InMemoryStore`]
//! in tests and against [`fs::FileStore`] in production.
//!
//! Phonebooks are addressed by the path of their book file. One invocation
//! performs at most one load and at most one save, both fully buffered; a
//! save is a complete rewrite of the file, never an incremental update.
//! Concurrent invocations against the same file race arbitrarily (last
//! writer wins); the format has no locking and does not pretend to.

use std::path::Path;

use crate::error::Result;
use crate::model::Phonebook;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and persisting phonebooks.
pub trait ContactStore {
    /// Load the phonebook at `path`.
    /// Fails with `BookNotFound` when no book exists there.
    fn load(&self, path: &Path) -> Result<Phonebook>;

    /// Replace the book at `path` with the given phonebook, one row per
    /// entry.
    fn save(&mut self, path: &Path, book: &Phonebook) -> Result<()>;

    /// Create an empty book at `path`.
    /// Fails with `BookExists` when a book is already there.
    fn create(&mut self, path: &Path) -> Result<()>;
}

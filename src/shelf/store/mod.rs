//! # Storage Layer
//!
//! The storage layer is split in two:
//!
//! - [`backend::StorageBackend`]: raw I/O of the whole collection. It knows
//!   *how* books are stored, nothing about the rules that govern them.
//!   - [`fs_backend::FsBackend`]: production JSON file, written atomically
//!   - [`mem_backend::MemBackend`]: in-memory double for tests
//! - [`BookStore`]: the authoritative in-memory collection for one run. It
//!   is seeded once from the backend and writes the full collection back on
//!   every mutation.
//!
//! ## Storage Format
//!
//! ```text
//! books.json      # JSON array, 2-space indent
//! [
//!   {
//!     "title": "Dune",
//!     "author": "Frank Herbert",
//!     "isbn": "111",
//!     "available": true
//!   }
//! ]
//! ```
//!
//! ## Consistency
//!
//! Mutations go through [`BookStore::commit`], which saves the candidate
//! collection first and only then swaps it in. A failed save leaves memory
//! exactly as it was before the call, so memory and disk never diverge.

use crate::commands::CmdMessage;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::StorageBackend;

pub struct BookStore<B: StorageBackend> {
    backend: B,
    books: Vec<Book>,
}

impl<B: StorageBackend> BookStore<B> {
    /// Load the collection from `backend`.
    ///
    /// Corrupt storage is recovered as an empty collection; the returned
    /// messages carry the warning for the UI to show.
    pub fn open(backend: B) -> (Self, Vec<CmdMessage>) {
        let mut messages = Vec::new();
        let books = match backend.load_books() {
            Ok(books) => books,
            Err(e) => {
                warn!(location = %backend.location(), error = %e, "starting with empty library");
                messages.push(CmdMessage::warning(e.to_string()));
                Vec::new()
            }
        };
        debug!(count = books.len(), "book store opened");
        (Self { backend, books }, messages)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Position of the first book with this isbn. The key is trimmed the
    /// same way [`Book::new`] trims stored isbns; the match is otherwise exact.
    pub fn position(&self, isbn: &str) -> Option<usize> {
        let isbn = isbn.trim();
        self.books.iter().position(|b| b.isbn() == isbn)
    }

    /// Like [`position`](Self::position) but reports a missing isbn.
    pub fn require(&self, isbn: &str) -> Result<usize> {
        self.position(isbn)
            .ok_or_else(|| ShelfError::NotFound(isbn.trim().to_string()))
    }

    /// Persist `next` and make it the current collection.
    ///
    /// On a failed save the current collection is left untouched.
    pub fn commit(&mut self, next: Vec<Book>) -> Result<()> {
        self.backend.save_books(&next)?;
        self.books = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "111").unwrap()
    }

    #[test]
    fn opens_with_backend_contents() {
        let (store, messages) = BookStore::open(MemBackend::with_books(vec![dune()]));
        assert!(messages.is_empty());
        assert_eq!(store.books().len(), 1);
        assert_eq!(store.position("111"), Some(0));
        assert_eq!(store.position("222"), None);
    }

    #[test]
    fn corrupt_backend_yields_empty_store_and_warning() {
        let backend = MemBackend::with_books(vec![dune()]);
        backend.set_simulate_corrupt(true);

        let (store, messages) = BookStore::open(backend);
        assert!(store.books().is_empty());
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("Corrupted data file"));
    }

    #[test]
    fn commit_saves_then_swaps() {
        let (mut store, _) = BookStore::open(MemBackend::new());
        store.commit(vec![dune()]).unwrap();

        assert_eq!(store.books().len(), 1);
        assert_eq!(store.backend().stored_books(), vec![dune()]);
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn failed_commit_keeps_previous_collection() {
        let (mut store, _) = BookStore::open(MemBackend::new());
        store.backend().set_simulate_write_error(true);

        let err = store.commit(vec![dune()]).unwrap_err();
        assert!(matches!(err, ShelfError::StorageWrite(_)));
        assert!(store.books().is_empty());
    }

    #[test]
    fn lookup_ignores_surrounding_whitespace() {
        let (store, _) = BookStore::open(MemBackend::with_books(vec![dune()]));
        assert_eq!(store.position(" 111 "), Some(0));
        assert_eq!(store.position("111\t"), Some(0));
        assert_eq!(store.position("1 11"), None);
        assert!(matches!(store.require(" 999 "), Err(ShelfError::NotFound(isbn)) if isbn == "999"));
    }

    #[test]
    fn require_reports_missing_isbn() {
        let (store, _) = BookStore::open(MemBackend::new());
        assert!(matches!(store.require("999"), Err(ShelfError::NotFound(isbn)) if isbn == "999"));
    }
}

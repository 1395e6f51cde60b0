use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded,
/// which lets `StorageBackend` take `&self` everywhere.
#[derive(Default)]
pub struct MemBackend {
    books: RefCell<Vec<Book>>,
    simulate_write_error: Cell<bool>,
    simulate_corrupt: Cell<bool>,
    saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with `books`, as if read from disk.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RefCell::new(books),
            ..Self::default()
        }
    }

    /// Make every following save fail.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Make every following load report malformed content.
    pub fn set_simulate_corrupt(&self, simulate: bool) {
        self.simulate_corrupt.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Snapshot of what is currently "on disk".
    pub fn stored_books(&self) -> Vec<Book> {
        self.books.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load_books(&self) -> Result<Vec<Book>> {
        if self.simulate_corrupt.get() {
            return Err(ShelfError::StorageRead("simulated corrupt data".to_string()));
        }
        Ok(self.books.borrow().clone())
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::StorageWrite("simulated write error".to_string()));
        }
        *self.books.borrow_mut() = books.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

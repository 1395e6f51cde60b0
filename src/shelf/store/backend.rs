use crate::error::Result;
use crate::model::Book;

/// Abstract interface for raw collection I/O.
///
/// A backend only moves the whole collection in and out of storage;
/// `BookStore` owns the in-memory copy and decides when to save.
pub trait StorageBackend {
    /// Load the full collection.
    ///
    /// Missing storage is not an error and yields an empty collection.
    /// Unreadable or malformed content yields `ShelfError::StorageRead`.
    fn load_books(&self) -> Result<Vec<Book>>;

    /// Replace the stored collection with `books`.
    /// Failures yield `ShelfError::StorageWrite`.
    fn save_books(&self, books: &[Book]) -> Result<()>;

    /// Human readable description of where the collection lives.
    fn location(&self) -> String;
}

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};

/// One inventoried book.
///
/// `title`, `author` and `isbn` are fixed at construction; only the
/// availability flag changes afterwards, through borrow and return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
    #[serde(default = "default_available")]
    available: bool,
}

fn default_available() -> bool {
    true
}

impl Book {
    /// Builds an available book, rejecting empty fields.
    ///
    /// Fields are trimmed first, so whitespace-only input counts as empty.
    /// The first empty field is reported, checked in title, author, isbn order.
    pub fn new(
        title: impl AsRef<str>,
        author: impl AsRef<str>,
        isbn: impl AsRef<str>,
    ) -> Result<Self> {
        let title = required("title", title.as_ref())?;
        let author = required("author", author.as_ref())?;
        let isbn = required("ISBN", isbn.as_ref())?;
        Ok(Self {
            title,
            author,
            isbn,
            available: true,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Case-insensitive substring match over title, author and isbn.
    /// `term_lower` must already be lowercased.
    pub fn matches(&self, term_lower: &str) -> bool {
        self.title.to_lowercase().contains(term_lower)
            || self.author.to_lowercase().contains(term_lower)
            || self.isbn.to_lowercase().contains(term_lower)
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ShelfError::Validation(field));
    }
    Ok(value.to_string())
}

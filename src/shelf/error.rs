use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("All fields (title, author, ISBN) are required; {0} is empty.")]
    Validation(&'static str),

    #[error("Book with ISBN {0} already exists.")]
    DuplicateIsbn(String),

    #[error("No book found with ISBN {0}.")]
    NotFound(String),

    #[error("'{0}' is already borrowed.")]
    AlreadyBorrowed(String),

    #[error("'{0}' was not borrowed.")]
    NotBorrowed(String),

    #[error("Corrupted data file ({0}). Starting with empty library.")]
    StorageRead(String),

    #[error("Error saving data: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Domain errors are expected outcomes of user requests; the rest are
    /// environment failures.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            ShelfError::Validation(_)
                | ShelfError::DuplicateIsbn(_)
                | ShelfError::NotFound(_)
                | ShelfError::AlreadyBorrowed(_)
                | ShelfError::NotBorrowed(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;

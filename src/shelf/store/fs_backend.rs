use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// JSON file backend. The whole collection lives in one pretty-printed array.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(|e| write_error(parent, e))
            }
            _ => Ok(()),
        }
    }

    fn tmp_file(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("books.json");
        self.data_file
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load_books(&self) -> Result<Vec<Book>> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.data_file.display(), "no data file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ShelfError::StorageRead(e.to_string())),
        };

        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|e| ShelfError::StorageRead(e.to_string()))?;
        debug!(path = %self.data_file.display(), count = books.len(), "loaded books");
        Ok(books)
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(books)
            .map_err(|e| ShelfError::StorageWrite(e.to_string()))?;

        // Atomic write: a crash mid-write leaves the previous file intact
        let tmp_file = self.tmp_file();
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(write_error(&tmp_file, e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(write_error(&self.data_file, e));
        }

        debug!(path = %self.data_file.display(), count = books.len(), "saved books");
        Ok(())
    }

    fn location(&self) -> String {
        self.data_file.display().to_string()
    }
}

fn write_error(path: &Path, err: std::io::Error) -> ShelfError {
    ShelfError::StorageWrite(format!("{}: {}", path.display(), err))
}

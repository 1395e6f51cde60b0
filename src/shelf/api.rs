//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every shelf operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does
//! no printing and holds no business rules of its own.
//!
//! ## Generic Over StorageBackend
//!
//! `ShelfApi<B: StorageBackend>`:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;
use std::path::PathBuf;

pub struct ShelfApi<B: StorageBackend> {
    store: BookStore<B>,
    config_dir: PathBuf,
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(store: BookStore<B>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    /// Load the collection from `backend` and build the API over it.
    /// The returned messages are warnings raised while loading.
    pub fn open(backend: B, config_dir: PathBuf) -> (Self, Vec<commands::CmdMessage>) {
        let (store, messages) = BookStore::open(backend);
        (Self::new(store, config_dir), messages)
    }

    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, title, author, isbn)
    }

    pub fn remove_book(&mut self, isbn: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, isbn)
    }

    pub fn borrow_book(&mut self, isbn: &str) -> Result<CmdResult> {
        commands::lending::borrow(&mut self.store, isbn)
    }

    pub fn return_book(&mut self, isbn: &str) -> Result<CmdResult> {
        commands::lending::give_back(&mut self.store, isbn)
    }

    pub fn search_books(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn location(&self) -> String {
        self.store.backend().location()
    }

    pub fn backend(&self) -> &B {
        self.store.backend()
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

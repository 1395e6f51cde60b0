//! # Shelf Architecture
//!
//! Shelf keeps a small inventory of books in a flat JSON file. It is a
//! library with a CLI client: everything that knows about terminals lives in
//! the binary, the library only moves typed values around.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot subcommands and the interactive menu            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, duplicate checks, availability rules         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore: in-memory collection, saved on every change   │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every rule violation (empty field, duplicate ISBN, unknown ISBN, double
//! borrow, double return) is a [`error::ShelfError`] variant. The CLI turns
//! them into warning lines; nothing below it prints or exits.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: In-memory store and storage backends
//! - [`model`]: The [`model::Book`] record
//! - [`config`]: Configuration file and data file resolution
//! - [`init`]: Production wiring of config, backend and API
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

//! # CLI Layer
//!
//! One possible UI client for shelf. This is the only place that:
//! - Parses arguments (`setup.rs`, clap)
//! - Reads stdin and writes stdout/stderr
//! - Decides exit codes
//!
//! `commands.rs` wires the context and dispatches one-shot subcommands,
//! `shell.rs` runs the interactive menu and `render.rs` formats results.

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::{report_error, run};

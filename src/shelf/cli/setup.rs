use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "A small, file-backed book inventory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        isbn: String,
    },

    /// Remove a book by ISBN
    #[command(alias = "rm")]
    Remove { isbn: String },

    /// Mark a book as borrowed
    Borrow { isbn: String },

    /// Mark a borrowed book as returned
    Return { isbn: String },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Search title, author and ISBN (case-insensitive)
    Search {
        /// Search term (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

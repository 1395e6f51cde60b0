//! # Rendering
//!
//! Turns `CmdResult` contents into terminal text. Every function returns a
//! `String` so the shell can write to any sink and tests can inspect output.

use colored::{ColoredString, Colorize};
use shelf::api::{CmdMessage, MessageLevel};
use shelf::config::ShelfConfig;
use shelf::error::ShelfError;
use shelf::model::Book;
use std::path::Path;

pub const SUCCESS_GLYPH: &str = "✅";
pub const WARNING_GLYPH: &str = "⚠️";
const SEPARATOR_WIDTH: usize = 30;

pub const MENU_OPTIONS: [&str; 7] = [
    "Add Book",
    "Remove Book",
    "Borrow Book",
    "Return Book",
    "List All Books",
    "Search Books",
    "Exit",
];

pub fn render_menu() -> String {
    let mut out = format!("\n{}\n", "📚 Library Management System".bold());
    for (i, option) in MENU_OPTIONS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, option));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => format!("{} {}", SUCCESS_GLYPH, message.content).green(),
            MessageLevel::Warning => format!("{} {}", WARNING_GLYPH, message.content).yellow(),
            MessageLevel::Error => format!("{} {}", WARNING_GLYPH, message.content).red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// Rule violations read as "Error: ..."; storage failures carry their own wording.
pub fn render_error(err: &ShelfError) -> String {
    let line = if err.is_domain() {
        format!("{} Error: {}", WARNING_GLYPH, err).yellow()
    } else {
        format!("{} {}", WARNING_GLYPH, err).red()
    };
    format!("{}\n", line)
}

pub fn availability_label(book: &Book) -> ColoredString {
    if book.is_available() {
        "✅ Available".green()
    } else {
        "❌ Borrowed".red()
    }
}

pub fn render_book(book: &Book) -> String {
    format!(
        "Title: {}\nAuthor: {}\nISBN: {}\nStatus: {}\n{}\n",
        book.title().bold(),
        book.author(),
        book.isbn(),
        availability_label(book),
        "-".repeat(SEPARATOR_WIDTH)
    )
}

pub fn render_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books in the library.\n".to_string();
    }
    books.iter().map(render_book).collect()
}

pub fn render_search_results(books: &[Book]) -> String {
    if books.is_empty() {
        return "No matching books found.\n".to_string();
    }
    let mut out = format!("\nFound {} matching book(s):\n", books.len());
    for book in books {
        out.push_str(&render_book(book));
    }
    out
}

pub fn render_config(config: &ShelfConfig, config_path: &Path, data_file: &Path) -> String {
    let configured = config
        .data_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(default)".to_string());
    format!(
        "{} {}\n{} {}\n{} {}\n",
        "config file:".dimmed(),
        config_path.display(),
        "data-file =".dimmed(),
        configured,
        "in use:".dimmed(),
        data_file.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn menu_lists_seven_numbered_options() {
        plain();
        let menu = render_menu();
        assert!(menu.contains("📚 Library Management System"));
        assert!(menu.contains("1. Add Book\n"));
        assert!(menu.contains("5. List All Books\n"));
        assert!(menu.contains("7. Exit\n"));
    }

    #[test]
    fn messages_get_status_glyphs() {
        plain();
        let out = render_messages(&[
            CmdMessage::success("Added 'Dune' by Herbert to the library."),
            CmdMessage::warning("Corrupted data file"),
        ]);
        assert_eq!(
            out,
            "✅ Added 'Dune' by Herbert to the library.\n⚠️ Corrupted data file\n"
        );
    }

    #[test]
    fn domain_errors_read_as_errors() {
        plain();
        assert_eq!(
            render_error(&ShelfError::NotFound("999".into())),
            "⚠️ Error: No book found with ISBN 999.\n"
        );
        assert_eq!(
            render_error(&ShelfError::StorageWrite("disk full".into())),
            "⚠️ Error saving data: disk full\n"
        );
    }

    #[test]
    fn book_block_shows_all_fields() {
        plain();
        let book = Book::new("Dune", "Herbert", "111").unwrap();
        assert_eq!(
            render_book(&book),
            "Title: Dune\nAuthor: Herbert\nISBN: 111\nStatus: ✅ Available\n------------------------------\n"
        );
    }

    #[test]
    fn borrowed_book_shows_cross() {
        plain();
        let available = Book::new("Dune", "Herbert", "111").unwrap();
        assert_eq!(availability_label(&available).to_string(), "✅ Available");

        let book: Book = serde_json::from_str(
            r#"{"title": "Dune", "author": "Herbert", "isbn": "111", "available": false}"#,
        )
        .unwrap();
        assert_eq!(availability_label(&book).to_string(), "❌ Borrowed");
        assert!(render_book(&book).contains("Status: ❌ Borrowed\n"));
    }

    #[test]
    fn empty_views_have_placeholders() {
        plain();
        assert_eq!(render_book_list(&[]), "No books in the library.\n");
        assert_eq!(render_search_results(&[]), "No matching books found.\n");
    }

    #[test]
    fn search_results_are_counted() {
        plain();
        let books = vec![
            Book::new("Dune", "Herbert", "111").unwrap(),
            Book::new("Emma", "Austen", "222").unwrap(),
        ];
        let out = render_search_results(&books);
        assert!(out.starts_with("\nFound 2 matching book(s):\n"));
        assert!(out.contains("Title: Emma"));
    }

    #[test]
    fn config_shows_default_marker() {
        plain();
        let out = render_config(
            &ShelfConfig::default(),
            &PathBuf::from("/cfg/config.json"),
            &PathBuf::from("/work/books.json"),
        );
        assert!(out.contains("data-file = (default)"));
        assert!(out.contains("in use: /work/books.json"));
    }
}

//! Interactive menu loop.
//!
//! Reads one line per prompt, dispatches on the exact menu number and writes
//! whatever the API returns. Rule violations are printed and the loop goes on;
//! only I/O failures on the console itself end it early.

use super::render::{
    render_book_list, render_error, render_menu, render_messages, render_search_results,
};
use shelf::api::{CmdMessage, CmdResult, ShelfApi};
use shelf::error::Result;
use shelf::store::backend::StorageBackend;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Borrow,
    Return,
    List,
    Search,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Borrow),
            "4" => Some(MenuChoice::Return),
            "5" => Some(MenuChoice::List),
            "6" => Some(MenuChoice::Search),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Shell<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a mut ShelfApi<B>,
    input: R,
    output: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Shell<'a, B, R, W> {
    pub fn new(api: &'a mut ShelfApi<B>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", render_menu())?;
            let Some(line) = self.prompt("\nEnter your choice (1-7): ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                let invalid =
                    CmdMessage::warning("Invalid choice. Please enter a number between 1-7.");
                write!(self.output, "{}", render_messages(&[invalid]))?;
                continue;
            };
            debug!(?choice, "menu choice");

            if choice == MenuChoice::Exit {
                writeln!(
                    self.output,
                    "\n👋 Exiting Library Management System. Goodbye!"
                )?;
                break;
            }
            if !self.dispatch(choice)? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Handle one menu choice. Returns false when input ran out mid-way.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Add => {
                writeln!(self.output, "\n➕ Add New Book")?;
                let Some(title) = self.prompt("Title: ")? else {
                    return Ok(false);
                };
                let Some(author) = self.prompt("Author: ")? else {
                    return Ok(false);
                };
                let Some(isbn) = self.prompt("ISBN: ")? else {
                    return Ok(false);
                };
                let result = self.api.add_book(&title, &author, &isbn);
                self.show_outcome(result)?;
            }
            MenuChoice::Remove => {
                writeln!(self.output, "\n➖ Remove Book")?;
                let Some(isbn) = self.prompt("Enter ISBN of book to remove: ")? else {
                    return Ok(false);
                };
                let result = self.api.remove_book(&isbn);
                self.show_outcome(result)?;
            }
            MenuChoice::Borrow => {
                writeln!(self.output, "\n📥 Borrow Book")?;
                let Some(isbn) = self.prompt("Enter ISBN of book to borrow: ")? else {
                    return Ok(false);
                };
                let result = self.api.borrow_book(&isbn);
                self.show_outcome(result)?;
            }
            MenuChoice::Return => {
                writeln!(self.output, "\n📤 Return Book")?;
                let Some(isbn) = self.prompt("Enter ISBN of book to return: ")? else {
                    return Ok(false);
                };
                let result = self.api.return_book(&isbn);
                self.show_outcome(result)?;
            }
            MenuChoice::List => {
                writeln!(self.output, "\n📖 All Books in Library")?;
                match self.api.list_books() {
                    Ok(result) => {
                        write!(self.output, "{}", render_book_list(&result.listed_books))?
                    }
                    Err(e) => write!(self.output, "{}", render_error(&e))?,
                }
            }
            MenuChoice::Search => {
                writeln!(self.output, "\n🔍 Search Books")?;
                let Some(term) = self.prompt("Enter title, author, or ISBN to search: ")? else {
                    return Ok(false);
                };
                match self.api.search_books(&term) {
                    Ok(result) => {
                        write!(self.output, "{}", render_search_results(&result.listed_books))?
                    }
                    Err(e) => write!(self.output, "{}", render_error(&e))?,
                }
            }
            MenuChoice::Exit => {}
        }
        Ok(true)
    }

    fn show_outcome(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => write!(self.output, "\n{}", render_messages(&result.messages))?,
            Err(e) => write!(self.output, "\n{}", render_error(&e))?,
        }
        Ok(())
    }

    /// Print `label` and read one line without its terminator.
    /// `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn borrow<B: StorageBackend>(store: &mut BookStore<B>, isbn: &str) -> Result<CmdResult> {
    set_available(store, isbn, false)
}

pub fn give_back<B: StorageBackend>(store: &mut BookStore<B>, isbn: &str) -> Result<CmdResult> {
    set_available(store, isbn, true)
}

fn set_available<B: StorageBackend>(
    store: &mut BookStore<B>,
    isbn: &str,
    available: bool,
) -> Result<CmdResult> {
    let idx = store.require(isbn)?;
    let current = &store.books()[idx];

    if current.is_available() == available {
        let title = current.title().to_string();
        return Err(if available {
            ShelfError::NotBorrowed(title)
        } else {
            ShelfError::AlreadyBorrowed(title)
        });
    }

    let mut next = store.books().to_vec();
    next[idx].set_available(available);
    let book = next[idx].clone();
    store.commit(next)?;

    let verb = if available { "Returned" } else { "Borrowed" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} '{}'.",
        verb,
        book.title()
    )));
    Ok(result.with_affected_books(vec![book]))
}

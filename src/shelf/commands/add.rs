use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    title: &str,
    author: &str,
    isbn: &str,
) -> Result<CmdResult> {
    let book = Book::new(title, author, isbn)?;

    if store.position(book.isbn()).is_some() {
        return Err(ShelfError::DuplicateIsbn(book.isbn().to_string()));
    }

    let mut next = store.books().to_vec();
    next.push(book.clone());
    store.commit(next)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added '{}' by {} to the library.",
        book.title(),
        book.author()
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn empty_store() -> BookStore<MemBackend> {
        BookStore::open(MemBackend::new()).0
    }

    #[test]
    fn appends_available_book_and_saves() {
        let mut store = empty_store();
        let result = run(&mut store, "Dune", "Herbert", "111").unwrap();

        assert_eq!(store.books().len(), 1);
        assert!(store.books()[0].is_available());
        assert_eq!(store.backend().save_count(), 1);
        assert_eq!(store.backend().stored_books(), store.books());
        assert_eq!(
            result.messages[0].content,
            "Added 'Dune' by Herbert to the library."
        );
        assert_eq!(result.affected_books, store.books());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut store = empty_store();
        run(&mut store, "Dune", "Herbert", "111").unwrap();
        run(&mut store, "Emma", "Austen", "222").unwrap();
        run(&mut store, "Ulysses", "Joyce", "333").unwrap();

        let isbns: Vec<_> = store.books().iter().map(|b| b.isbn()).collect();
        assert_eq!(isbns, vec!["111", "222", "333"]);
    }

    #[test]
    fn rejects_duplicate_isbn_without_saving() {
        let mut store = empty_store();
        run(&mut store, "Dune", "Herbert", "111").unwrap();
        let before = store.books().to_vec();

        let err = run(&mut store, "Other", "Someone", "111").unwrap_err();
        assert!(matches!(err, ShelfError::DuplicateIsbn(isbn) if isbn == "111"));
        assert_eq!(store.books(), before.as_slice());
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn validation_precedes_duplicate_check() {
        let mut store = empty_store();
        run(&mut store, "Dune", "Herbert", "111").unwrap();

        let err = run(&mut store, "", "Herbert", "111").unwrap_err();
        assert!(matches!(err, ShelfError::Validation("title")));
        assert_eq!(store.books().len(), 1);
    }

    #[test]
    fn rejects_empty_fields() {
        let mut store = empty_store();
        for (title, author, isbn) in [("", "a", "1"), ("t", "", "1"), ("t", "a", "")] {
            let err = run(&mut store, title, author, isbn).unwrap_err();
            assert!(matches!(err, ShelfError::Validation(_)));
        }
        assert!(store.books().is_empty());
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn failed_save_rolls_back() {
        let mut store = empty_store();
        store.backend().set_simulate_write_error(true);

        let err = run(&mut store, "Dune", "Herbert", "111").unwrap_err();
        assert!(matches!(err, ShelfError::StorageWrite(_)));
        assert!(store.books().is_empty());
    }
}

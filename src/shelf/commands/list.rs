use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn run<B: StorageBackend>(store: &BookStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_books(store.books().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, lending};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn lists_everything_in_order() {
        let (mut store, _) = BookStore::open(MemBackend::new());
        add::run(&mut store, "Dune", "Herbert", "111").unwrap();
        add::run(&mut store, "Emma", "Austen", "222").unwrap();
        lending::borrow(&mut store, "222").unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_books.len(), 2);
        assert_eq!(result.listed_books[0].title(), "Dune");
        assert!(result.listed_books[0].is_available());
        assert_eq!(result.listed_books[1].title(), "Emma");
        assert!(!result.listed_books[1].is_available());
    }

    #[test]
    fn empty_store_lists_nothing() {
        let (store, _) = BookStore::open(MemBackend::new());
        assert!(run(&store).unwrap().listed_books.is_empty());
    }
}

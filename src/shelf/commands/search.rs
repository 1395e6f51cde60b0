use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

/// Books whose title, author or isbn contain `term`, ignoring case.
/// An empty term matches nothing.
pub fn run<B: StorageBackend>(store: &BookStore<B>, term: &str) -> Result<CmdResult> {
    if term.is_empty() {
        return Ok(CmdResult::default());
    }

    let term_lower = term.to_lowercase();
    let matches = store
        .books()
        .iter()
        .filter(|book| book.matches(&term_lower))
        .cloned()
        .collect();

    Ok(CmdResult::default().with_listed_books(matches))
}

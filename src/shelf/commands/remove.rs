use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn run<B: StorageBackend>(store: &mut BookStore<B>, isbn: &str) -> Result<CmdResult> {
    let idx = store.require(isbn)?;

    let mut next = store.books().to_vec();
    let removed = next.remove(idx);
    store.commit(next)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed '{}' by {}.",
        removed.title(),
        removed.author()
    )));
    Ok(result.with_affected_books(vec![removed]))
}

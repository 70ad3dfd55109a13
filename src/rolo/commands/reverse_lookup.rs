use std::path::Path;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S, path: &Path, number: &str) -> Result<CmdResult> {
    let book = store.load(path)?;
    Ok(CmdResult::default().with_listed_contacts(book.reverse_lookup(number)))
}

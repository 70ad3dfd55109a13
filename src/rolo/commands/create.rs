use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.create(path) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "Created phonebook: {}",
                path.display()
            )));
        }
        Err(RoloError::BookExists(_)) => {
            result.add_message(CmdMessage::warning(format!(
                "Phonebook already exists: {}",
                path.display()
            )));
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_an_empty_book() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Path::new("book.txt")).unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert!(store.load(Path::new("book.txt")).unwrap().is_empty());
    }

    #[test]
    fn warns_instead_of_failing_when_the_book_exists() {
        let mut store = InMemoryStore::new();
        run(&mut store, Path::new("book.txt")).unwrap();
        let result = run(&mut store, Path::new("book.txt")).unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }
}

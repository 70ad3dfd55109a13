use std::path::Path;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let book = store.load(path)?;
    Ok(CmdResult::default().with_listed_contacts(book.contacts()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoloError;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn lists_contacts_sorted_by_name() {
        let store = fixtures::store_with("book.txt", &[("Zoe", "3"), ("Abe", "1"), ("Mia", "2")]);
        let result = run(&store, Path::new("book.txt")).unwrap();

        let names: Vec<&str> = result
            .listed_contacts
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Abe", "Mia", "Zoe"]);
    }

    #[test]
    fn an_empty_book_lists_nothing() {
        let store = fixtures::store_with("book.txt", &[]);
        let result = run(&store, Path::new("book.txt")).unwrap();

        assert!(result.listed_contacts.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn a_missing_book_is_an_error() {
        let store = InMemoryStore::new();
        let err = run(&store, Path::new("book.txt")).unwrap_err();
        assert!(matches!(err, RoloError::BookNotFound(_)));
    }
}

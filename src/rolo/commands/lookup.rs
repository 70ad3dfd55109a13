use std::path::Path;

use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S, path: &Path, name: &str) -> Result<CmdResult> {
    let book = store.load(path)?;
    Ok(CmdResult::default().with_listed_contacts(book.lookup(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryStore};

    fn store() -> InMemoryStore {
        fixtures::store_with(
            "book.txt",
            &[
                ("Ann Smith", "5551234"),
                ("Annabel", "5559999"),
                ("Bob", "123"),
            ],
        )
    }

    #[test]
    fn matches_substrings_case_insensitively() {
        let result = run(&store(), Path::new("book.txt"), "ann").unwrap();
        let names: Vec<&str> = result
            .listed_contacts
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ann Smith", "Annabel"]);
    }

    #[test]
    fn returns_nothing_when_no_name_matches() {
        let result = run(&store(), Path::new("book.txt"), "zzz").unwrap();
        assert!(result.listed_contacts.is_empty());
    }

    #[test]
    fn an_empty_query_matches_everyone() {
        let result = run(&store(), Path::new("book.txt"), "").unwrap();
        assert_eq!(result.listed_contacts.len(), 3);
    }
}

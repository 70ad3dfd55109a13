use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(
    store: &mut S,
    path: &Path,
    name: &str,
    number: &str,
) -> Result<CmdResult> {
    let name = name.trim();
    let mut book = store.load(path)?;
    let mut result = CmdResult::default();

    if book.change(name, number) {
        store.save(path, &book)?;
        let stored = book.get(name).unwrap_or_default().to_string();
        result.add_message(CmdMessage::success(format!(
            "Changed number for {} to {} in {}",
            name,
            stored,
            path.display()
        )));
        result.affected_contacts.push(Contact::new(name, stored));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "No person called {} in {}. Changes ignored.",
            name,
            path.display()
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures;

    #[test]
    fn replaces_the_number_of_an_existing_contact() {
        let mut store = fixtures::store_with("book.txt", &[("Ann", "111")]);
        let result = run(&mut store, Path::new("book.txt"), "Ann", "(555) 999").unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        let book = store.book_at(Path::new("book.txt")).unwrap();
        assert_eq!(book.get("Ann"), Some("555999"));
    }

    #[test]
    fn warns_when_the_name_is_unknown_and_saves_nothing() {
        let mut store = fixtures::store_with("book.txt", &[("Ann", "111")]);
        let result = run(&mut store, Path::new("book.txt"), "Bob", "222").unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.affected_contacts.is_empty());

        let book = store.book_at(Path::new("book.txt")).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Ann"), Some("111"));
    }
}

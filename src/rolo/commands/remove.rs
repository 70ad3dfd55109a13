use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &mut S, path: &Path, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    let mut book = store.load(path)?;
    let mut result = CmdResult::default();

    let previous = book.get(name).map(|number| Contact::new(name, number));
    match previous {
        Some(contact) => {
            book.remove(name);
            store.save(path, &book)?;
            result.add_message(CmdMessage::success(format!(
                "Removed {} from {}",
                contact.name,
                path.display()
            )));
            result.affected_contacts.push(contact);
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No person called {} in {}. Changes ignored.",
                name,
                path.display()
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures;

    #[test]
    fn removes_an_existing_contact() {
        let mut store = fixtures::store_with("book.txt", &[("Ann", "111"), ("Bob", "222")]);
        let result = run(&mut store, Path::new("book.txt"), "Ann").unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert_eq!(result.affected_contacts[0], Contact::new("Ann", "111"));

        let book = store.book_at(Path::new("book.txt")).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Ann"), None);
    }

    #[test]
    fn warns_when_the_name_is_unknown() {
        let mut store = fixtures::store_with("book.txt", &[("Ann", "111")]);
        let result = run(&mut store, Path::new("book.txt"), "Bob").unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        let book = store.book_at(Path::new("book.txt")).unwrap();
        assert_eq!(book.len(), 1);
    }
}

use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::model::Contact;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(
    store: &mut S,
    path: &Path,
    name: &str,
    number: &str,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::Api("Name cannot be empty".into()));
    }

    let mut book = store.load(path)?;
    let mut result = CmdResult::default();

    if book.add(name, number) {
        store.save(path, &book)?;
        let stored = book.get(name).unwrap_or_default().to_string();
        result.add_message(CmdMessage::success(format!(
            "Added {} ({}) to {}",
            name,
            stored,
            path.display()
        )));
        result.affected_contacts.push(Contact::new(name, stored));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} is already in {}. Changes ignored.",
            name,
            path.display()
        )));
    }

    Ok(result)
}

use std::collections::BTreeMap;

use crate::codec;

/// A single phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// An in-memory phonebook: a name -> number mapping with unique names.
///
/// Entries are kept sorted by name so listings and saved files are
/// deterministic; the order of rows in a loaded file is not preserved
/// across a save. Every entry path goes through [`Phonebook::insert`],
/// which trims the name and reduces the number to its digits, so stored
/// numbers are always canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phonebook {
    entries: BTreeMap<String, String>,
}

impl Phonebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored number for an exact name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Insert an entry unconditionally, overwriting any existing number.
    /// Loading relies on the overwrite: later duplicate rows win.
    pub fn insert(&mut self, name: &str, number: &str) {
        self.entries
            .insert(name.trim().to_string(), codec::canonical_number(number));
    }

    /// Add a contact only if the name is absent. Returns false (and leaves
    /// the book untouched) when the name is already taken.
    pub fn add(&mut self, name: &str, number: &str) -> bool {
        let name = name.trim();
        if self.entries.contains_key(name) {
            return false;
        }
        self.insert(name, number);
        true
    }

    /// Replace the number of an existing contact. Returns false when no
    /// contact has that name.
    pub fn change(&mut self, name: &str, number: &str) -> bool {
        let name = name.trim();
        if !self.entries.contains_key(name) {
            return false;
        }
        self.insert(name, number);
        true
    }

    /// Remove a contact. Returns false when no contact has that name.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name.trim()).is_some()
    }

    /// Case-insensitive substring match against every contact name.
    /// An empty query matches everything.
    pub fn lookup(&self, query: &str) -> Vec<Contact> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&query))
            .map(|(name, number)| Contact::new(name.clone(), number.clone()))
            .collect()
    }

    /// Exact match against stored numbers after reducing the query to its
    /// digits ("555-1234" finds "5551234"). Not a substring match.
    pub fn reverse_lookup(&self, query: &str) -> Vec<Contact> {
        let wanted = codec::canonical_number(query);
        self.entries
            .iter()
            .filter(|(_, number)| number.as_str() == wanted)
            .map(|(name, number)| Contact::new(name.clone(), number.clone()))
            .collect()
    }

    /// Every contact, sorted by name.
    pub fn contacts(&self) -> Vec<Contact> {
        self.entries
            .iter()
            .map(|(name, number)| Contact::new(name.clone(), number.clone()))
            .collect()
    }
}

impl FromIterator<(String, String)> for Phonebook {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut book = Phonebook::new();
        for (name, number) in iter {
            book.insert(&name, &number);
        }
        book
    }
}

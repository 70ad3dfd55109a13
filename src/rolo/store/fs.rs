use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::ContactStore;
use crate::codec;
use crate::error::{Result, RoloError};
use crate::model::Phonebook;

/// File-backed storage for the flat text book format.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl ContactStore for FileStore {
    fn load(&self, path: &Path) -> Result<Phonebook> {
        if !path.exists() {
            return Err(RoloError::BookNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut book = Phonebook::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let contact = codec::parse_row(line);
            book.insert(&contact.name, &contact.number);
        }
        Ok(book)
    }

    fn save(&mut self, path: &Path, book: &Phonebook) -> Result<()> {
        let mut out = String::new();
        for contact in book.contacts() {
            out.push_str(&codec::format_row(&contact.name, &contact.number));
        }
        fs::write(path, out)?;
        Ok(())
    }

    fn create(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(RoloError::BookExists(path.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

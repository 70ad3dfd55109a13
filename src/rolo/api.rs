//! # API Facade
//!
//! One thin method per operation, dispatching straight into the command
//! layer and handing back its structured `Result<CmdResult>`. Business
//! logic stays in `commands/*.rs`; presentation stays with the caller.
//!
//! `RoloApi<S: ContactStore>` is generic over the storage backend
//! (`FileStore` in production, `InMemoryStore` in tests), so anything built
//! on the facade can run without touching the filesystem.

use std::path::{Path, PathBuf};

use crate::commands;
use crate::error::Result;
use crate::store::ContactStore;

/// The main entry point for rolo operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct RoloApi<S: ContactStore> {
    store: S,
    home: PathBuf,
}

impl<S: ContactStore> RoloApi<S> {
    pub fn new(store: S, home: PathBuf) -> Self {
        Self { store, home }
    }

    pub fn create_book(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, path)
    }

    pub fn list_contacts(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, path)
    }

    pub fn lookup(&self, path: &Path, name: &str) -> Result<commands::CmdResult> {
        commands::lookup::run(&self.store, path, name)
    }

    pub fn reverse_lookup(&self, path: &Path, number: &str) -> Result<commands::CmdResult> {
        commands::reverse_lookup::run(&self.store, path, number)
    }

    pub fn add_contact(
        &mut self,
        path: &Path,
        name: &str,
        number: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, path, name, number)
    }

    pub fn change_number(
        &mut self,
        path: &Path,
        name: &str,
        number: &str,
    ) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.store, path, name, number)
    }

    pub fn remove_contact(&mut self, path: &Path, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, path, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.home, action)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

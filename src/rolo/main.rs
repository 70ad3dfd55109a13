use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::{CmdMessage, ConfigAction, MessageLevel, RoloApi};
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::model::Contact;
use rolo::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

const DEFAULT_BOOK_FILENAME: &str = "phonebook.txt";

struct AppContext {
    api: RoloApi<FileStore>,
    config: RoloConfig,
    home: PathBuf,
}

impl AppContext {
    /// Where a command should read or write its book: an explicit file wins,
    /// then the configured default-book, then `<home>/phonebook.txt`.
    fn resolve_book(&self, file: Option<PathBuf>) -> PathBuf {
        file.or_else(|| self.config.default_book.clone())
            .unwrap_or_else(|| self.home.join(DEFAULT_BOOK_FILENAME))
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Create { file }) => handle_create(&mut ctx, file),
        Some(Commands::List { file }) => handle_list(&ctx, file),
        Some(Commands::Lookup { name, file }) => handle_lookup(&ctx, name, file),
        Some(Commands::ReverseLookup { number, file }) => {
            handle_reverse_lookup(&ctx, number, file)
        }
        Some(Commands::Add { name, number, file }) => handle_add(&mut ctx, name, number, file),
        Some(Commands::Change { name, number, file }) => {
            handle_change(&mut ctx, name, number, file)
        }
        Some(Commands::Remove { name, file }) => handle_remove(&mut ctx, name, file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_default_list(&ctx),
    }
}

fn init_context() -> Result<AppContext> {
    let home = match std::env::var_os("ROLO_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs = ProjectDirs::from("com", "rolo", "rolo")
                .ok_or_else(|| RoloError::Api("Could not determine a home directory".into()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = RoloConfig::load(&home).unwrap_or_default();
    let api = RoloApi::new(FileStore::new(), home.clone());

    Ok(AppContext { api, config, home })
}

fn handle_create(ctx: &mut AppContext, file: Option<PathBuf>) -> Result<()> {
    let book = ctx.resolve_book(file);
    let result = ctx.api.create_book(&book)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let book = ctx.resolve_book(file);
    let result = ctx.api.list_contacts(&book)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

/// Bare `rolo` lists the default book, with a pointer for first-time users
/// instead of a hard error when nothing exists yet.
fn handle_default_list(ctx: &AppContext) -> Result<()> {
    let book = ctx.resolve_book(None);
    match ctx.api.list_contacts(&book) {
        Ok(result) => {
            print_contacts(&result.listed_contacts);
            print_messages(&result.messages);
            Ok(())
        }
        Err(RoloError::BookNotFound(_)) => {
            println!("No phonebook yet. Run `rolo create` to start one.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_lookup(ctx: &AppContext, name: String, file: Option<PathBuf>) -> Result<()> {
    let book = ctx.resolve_book(file);
    let result = ctx.api.lookup(&book, &name)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reverse_lookup(ctx: &AppContext, number: String, file: Option<PathBuf>) -> Result<()> {
    let book = ctx.resolve_book(file);
    let result = ctx.api.reverse_lookup(&book, &number)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    number: String,
    file: Option<PathBuf>,
) -> Result<()> {
    let book = ctx.resolve_book(file);
    let result = ctx.api.add_contact(&book, &name, &number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_change(
    ctx: &mut AppContext,
    name: String,
    number: String,
    file: Option<PathBuf>,
) -> Result<()> {
    let book = ctx.resolve_book(file);
    let result = ctx.api.change_number(&book, &name, &number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, name: String, file: Option<PathBuf>) -> Result<()> {
    let book = ctx.resolve_book(file);
    let result = ctx.api.remove_contact(&book, &name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("default-book"), None) => ConfigAction::ShowKey("default-book".to_string()),
        (Some("default-book"), Some(v)) => ConfigAction::Set("default-book".to_string(), v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-book = {}", config.default_book_display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    let name_width = contacts.iter().map(|c| c.name.width()).max().unwrap_or(0);

    for contact in contacts {
        let padding = name_width.saturating_sub(contact.name.width());
        println!(
            "{}{}  {}",
            contact.name,
            " ".repeat(padding),
            contact.number.dimmed()
        );
    }
}

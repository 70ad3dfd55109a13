use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("phonebook not found: {}", .0.display())]
    BookNotFound(PathBuf),

    #[error("phonebook already exists: {}", .0.display())]
    BookExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;

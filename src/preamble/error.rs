use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreambleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("front matter opened but never closed")]
    MalformedFrontMatter,

    #[error("Entry already exists: {0}")]
    EntryExists(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PreambleError>;

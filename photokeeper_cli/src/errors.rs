use std::io;
use thiserror::Error;
use photokeeper::document::{DocumentError, ImageError};
use photokeeper::library::{ConfigError, LibraryError, RenameError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("The specified entry was not found in the library: {0}")]
    EntryNotFound(String),

    #[error("Rows can only be deleted in editing mode. Type 'edit' first.")]
    NotEditing,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("REPL Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Failed to rename document: {0}")]
    Rename(#[from] RenameError),
}

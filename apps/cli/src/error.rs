//! Error handling for the command line front end

use std::path::PathBuf;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Study set directory not found: {}", .0.display())]
    SetsDirMissing(PathBuf),

    #[error("No study sets found in {}", .0.display())]
    NoSets(PathBuf),

    #[error("{} is not valid UTF-8", .0.display())]
    Encoding(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid study set: {0}")]
    Load(#[from] drill_core::LoadError),

    #[error("Session error: {0}")]
    Session(#[from] drill_core::SessionError),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

//! Error types for the tabview binary

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur outside the input translation core
#[derive(Error, Debug)]
pub enum TabviewError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, TabviewError>;

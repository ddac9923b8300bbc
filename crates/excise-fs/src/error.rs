//! Error types for excise-fs

use std::path::PathBuf;

/// Result type for excise-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in excise-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} recipe at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported recipe format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid recipe: {message}")]
    InvalidRecipe { message: String },

    #[error("Refusing to overwrite the input file {path}")]
    OutputIsInput { path: PathBuf },

    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error(transparent)]
    Excise(#[from] excise_core::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_recipe(message: impl Into<String>) -> Self {
        Self::InvalidRecipe {
            message: message.into(),
        }
    }
}

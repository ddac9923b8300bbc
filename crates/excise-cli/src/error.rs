//! Error types for excise-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A marker could not be resolved, or a pattern was invalid
    #[error(transparent)]
    Excise(#[from] excise_core::Error),

    /// Error from excise-fs
    #[error(transparent)]
    Fs(#[from] excise_fs::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

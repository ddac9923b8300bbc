//! Error types for excise-core

use std::fmt;

/// Result type for excise-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// The search step an error refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorRole {
    /// The primary marker that must occur inside the block.
    Start { literal: String },
    /// A backward boundary, searched in order from the start marker.
    /// `index` is 1-based.
    Boundary { index: usize, literal: String },
    /// The marker that closes the block.
    End { literal: String },
    /// A spanning regular expression.
    Pattern { source: String },
}

impl AnchorRole {
    /// Short name of the role, without the literal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start anchor",
            Self::Boundary { .. } => "boundary anchor",
            Self::End { .. } => "end anchor",
            Self::Pattern { .. } => "pattern",
        }
    }
}

impl fmt::Display for AnchorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start { literal } | Self::End { literal } => {
                write!(f, "{} {:?}", self.name(), literal)
            }
            Self::Boundary { index, literal } => {
                write!(f, "{} #{} {:?}", self.name(), index, literal)
            }
            Self::Pattern { source } => write!(f, "{} {:?}", self.name(), source),
        }
    }
}

/// Errors that can occur while excising a block
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(AnchorRole),

    #[error("{} must not be empty", .0.name())]
    EmptyAnchor(AnchorRole),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl Error {
    /// The anchor that could not be resolved, if this is a `NotFound`.
    pub fn missing_anchor(&self) -> Option<&AnchorRole> {
        match self {
            Self::NotFound(role) => Some(role),
            _ => None,
        }
    }
}

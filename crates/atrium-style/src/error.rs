//! Error types for the theming system.

use std::path::PathBuf;

/// Result type alias for theming operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or resolving a theme.
///
/// Token errors are detected either at table construction time
/// (`DuplicateToken`, `UnknownReference`) or at resolution time
/// (`UnknownToken`, `Cycle`). All of them are fatal: a theme with a
/// missing or cyclic token has no sensible partial interpretation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token name was defined twice.
    #[error("duplicate token '--{name}'")]
    DuplicateToken { name: String },

    /// A token definition references a name that has not been defined yet.
    #[error("token '--{name}' references undefined token '--{target}'")]
    UnknownReference { name: String, target: String },

    /// A resolution was requested for a name absent from the table.
    #[error("unknown token '--{name}'")]
    UnknownToken { name: String },

    /// Alias chain following revisited a token.
    #[error("alias cycle detected while resolving '--{name}'")]
    Cycle { name: String },

    /// Theme file parsing error.
    #[error("theme parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("failed to read theme file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Hot-reload error.
    #[cfg(feature = "hot-reload")]
    #[error("hot-reload error: {0}")]
    HotReload(String),
}

impl Error {
    /// Create a duplicate-token error.
    pub fn duplicate_token(name: impl Into<String>) -> Self {
        Self::DuplicateToken { name: name.into() }
    }

    /// Create an unknown-reference error.
    pub fn unknown_reference(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownReference {
            name: name.into(),
            target: target.into(),
        }
    }

    /// Create an unknown-token error.
    pub fn unknown_token(name: impl Into<String>) -> Self {
        Self::UnknownToken { name: name.into() }
    }

    /// Create an alias-cycle error.
    pub fn cycle(name: impl Into<String>) -> Self {
        Self::Cycle { name: name.into() }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

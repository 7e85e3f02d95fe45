//! Error types for notesplit.
//!
//! Library crates use [`NotesplitError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all notesplit operations.
#[derive(Debug, thiserror::Error)]
pub enum NotesplitError {
    /// The source notes file does not exist.
    #[error("source notes not found at {path:?}; run from the repository root or pass --root")]
    SourceMissing { path: PathBuf },

    /// The source exists but has no `## <title>` sections.
    #[error("no '## <title>' sections found in {path:?}; check the heading levels")]
    NoSegmentsFound { path: PathBuf },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (unserializable report, bad mapping, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NotesplitError>;

impl NotesplitError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

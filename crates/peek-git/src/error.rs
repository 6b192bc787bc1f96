//! Error types for peek-git.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to git.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Repository has no working directory.
    #[error("bare repositories have no working tree")]
    BareRepository,

    /// The git binary could not be found on PATH.
    #[error("git executable '{0}' not found")]
    GitNotFound(String),

    /// The git process could not be started.
    #[error("failed to run {command}: {source}")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// git exited with a non-zero status.
    ///
    /// Displays git's own diagnostic so it can be shown to the user verbatim.
    #[error("{message}")]
    CommandFailed {
        /// The command line that failed.
        command: String,
        /// Captured stderr, or a generic exit-status message.
        message: String,
    },

    /// A ref that would be parsed as an option.
    #[error("invalid ref '{0}': refs may not start with '-'")]
    InvalidRef(String),

    /// Repository discovery failed.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

//! Error types for peek-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in peek-core operations.
///
/// The precondition variants display the exact message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No active document to act on.
    #[error("No file is currently open.")]
    NoActiveDocument,

    /// No repository root available.
    #[error("No Git repository found.")]
    NoRepository,

    /// The active document lives outside the repository root.
    #[error("The file '{}' is not inside the repository.", .0.display())]
    OutsideRepository(PathBuf),

    /// The path is not tracked at the chosen ref.
    #[error("The file '{path}' does not exist in branch '{reference}'.")]
    NotInRef {
        /// Normalized path that was looked up.
        path: String,
        /// Branch name or commit hash.
        reference: String,
    },

    /// A picker was handed nothing to choose from.
    #[error("{0}")]
    NothingToPick(String),

    /// Host UI failure (prompt could not be shown, output failed).
    #[error("{0}")]
    Host(String),

    /// Config file parsing error.
    #[error("failed to parse {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error("{0}")]
    Git(#[from] peek_git::Error),
}

impl Error {
    /// Whether this error is a user-facing precondition or lookup failure
    /// whose message is shown without an `Error:` prefix.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoActiveDocument
                | Self::NoRepository
                | Self::OutsideRepository(_)
                | Self::NotInRef { .. }
                | Self::NothingToPick(_)
        )
    }

    /// The message presented to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_precondition() {
            self.to_string()
        } else {
            format!("Error: {self}")
        }
    }
}

//! Trait abstractions for read-only history queries.
//!
//! This module defines the `HistoryOps` trait which abstracts the queries
//! peek makes against a repository, enabling dependency injection and
//! testability.

use crate::{CommitRecord, Result};

/// Trait for querying branches, tracked files, history and file contents.
///
/// This trait abstracts git queries, allowing for:
/// - Dependency injection in commands/services
/// - Mock implementations for testing
///
/// Every operation is read-only; nothing here mutates the repository.
#[allow(clippy::missing_errors_doc)]
pub trait HistoryOps {
    // === Enumeration ===

    /// List local and remote branches in git's native order.
    fn list_branches(&self) -> Result<Vec<String>>;

    /// List every file tracked at `reference`, relative to the root with
    /// forward slashes.
    fn list_files(&self, reference: &str) -> Result<Vec<String>>;

    /// List the commits touching `path`, newest first.
    fn commit_history(&self, path: &str) -> Result<Vec<CommitRecord>>;

    // === Content ===

    /// Fetch the content of `path` as of `reference`, trimmed.
    fn file_content_at(&self, reference: &str, path: &str) -> Result<String>;

    /// Check whether `path` is tracked at `reference`.
    ///
    /// Any failure to list the ref counts as "does not exist"; this never
    /// returns an error.
    fn file_exists(&self, reference: &str, path: &str) -> bool {
        self.list_files(reference)
            .map(|files| files.iter().any(|f| f == path))
            .unwrap_or(false)
    }
}

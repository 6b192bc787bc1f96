//! Read-only virtual documents holding file contents from another ref.

use std::fmt;

/// Scheme used for every virtual document.
pub const SCHEME: &str = "readonly";

/// Identifier of a virtual document: `readonly:` plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentUri {
    name: String,
}

impl DocumentUri {
    /// Build a `readonly:` identifier for `name`.
    #[must_use]
    pub fn readonly(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The display name part.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}:{}", self.name)
    }
}

/// Where a document's content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A branch (or any ref picked from the branch list).
    Branch(String),
    /// A commit picked from file history.
    Commit(String),
}

impl Origin {
    /// The ref passed to git.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::Branch(r) | Self::Commit(r) => r,
        }
    }
}

/// Immutable snapshot of a file at a ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDocument {
    uri: DocumentUri,
    origin: Origin,
    path: String,
    content: String,
}

impl VirtualDocument {
    /// Snapshot of `path` on a branch, named `[<branch>] <basename>`.
    #[must_use]
    pub fn from_branch(branch: &str, path: &str, content: String) -> Self {
        let name = branch_document_name(branch, path);
        Self {
            uri: DocumentUri::readonly(name),
            origin: Origin::Branch(branch.to_string()),
            path: path.to_string(),
            content,
        }
    }

    /// Snapshot of `path` at a commit, named `[<hash>] <path>`.
    #[must_use]
    pub fn from_commit(hash: &str, path: &str, content: String) -> Self {
        let name = commit_document_name(hash, path);
        Self {
            uri: DocumentUri::readonly(name),
            origin: Origin::Commit(hash.to_string()),
            path: path.to_string(),
            content,
        }
    }

    #[must_use]
    pub const fn uri(&self) -> &DocumentUri {
        &self.uri
    }

    /// Title shown by the host.
    #[must_use]
    pub fn title(&self) -> &str {
        self.uri.name()
    }

    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Repository-relative path the content was read from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Last component of a forward-slash path.
#[must_use]
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// `[<branch>] <basename>`.
#[must_use]
pub fn branch_document_name(branch: &str, path: &str) -> String {
    format!("[{branch}] {}", base_name(path))
}

/// `[<hash>] <path>`.
#[must_use]
pub fn commit_document_name(hash: &str, path: &str) -> String {
    format!("[{hash}] {path}")
}

//! Listing service for the non-interactive enumeration commands.
//!
//! Wraps the enumerator's results in serializable records so commands can
//! print them either human-readable or as JSON.

use anyhow::Result;
use peek_git::{CommitRecord, HistoryOps};
use serde::Serialize;

/// Branches as git lists them.
#[derive(Debug, Clone, Serialize)]
pub struct BranchList {
    pub branches: Vec<String>,
}

/// Files tracked at a ref.
#[derive(Debug, Clone, Serialize)]
pub struct FileList {
    pub reference: String,
    pub files: Vec<String>,
}

/// One commit touching a file.
#[derive(Debug, Clone, Serialize)]
pub struct CommitInfo {
    pub hash: String,
    pub subject: String,
}

impl From<CommitRecord> for CommitInfo {
    fn from(record: CommitRecord) -> Self {
        Self {
            hash: record.hash,
            subject: record.subject,
        }
    }
}

/// History of a file, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct History {
    pub path: String,
    pub commits: Vec<CommitInfo>,
}

/// Service for enumerating branches, files and history.
pub struct ListingService<'a, G: HistoryOps> {
    repo: &'a G,
}

impl<'a, G: HistoryOps> ListingService<'a, G> {
    /// Create a new listing service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    pub fn branches(&self) -> Result<BranchList> {
        Ok(BranchList {
            branches: self.repo.list_branches()?,
        })
    }

    pub fn files(&self, reference: &str) -> Result<FileList> {
        Ok(FileList {
            reference: reference.to_string(),
            files: self.repo.list_files(reference)?,
        })
    }

    /// History of a repository-relative, forward-slash path.
    pub fn history(&self, path: &str) -> Result<History> {
        let commits = self
            .repo
            .commit_history(path)?
            .into_iter()
            .map(CommitInfo::from)
            .collect();
        Ok(History {
            path: path.to_string(),
            commits,
        })
    }
}

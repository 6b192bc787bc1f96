//! Records parsed from git output.

use std::fmt;

/// One line of file history: abbreviated hash and subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Abbreviated commit hash (`%h`).
    pub hash: String,
    /// Commit subject line (`%s`).
    pub subject: String,
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subject.is_empty() {
            write!(f, "{}", self.hash)
        } else {
            write!(f, "{} {}", self.hash, self.subject)
        }
    }
}

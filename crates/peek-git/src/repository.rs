//! Repository wrapper providing read-only history queries through git.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::parse::{parse_branches, parse_file_list, parse_history};
use crate::runner::{CommandHook, GitRunner};
use crate::traits::HistoryOps;
use crate::types::CommitRecord;

/// High-level handle on a repository's working tree.
pub struct Repository {
    root: PathBuf,
    git_dir: PathBuf,
    runner: GitRunner,
}

impl Repository {
    /// Open the repository containing `path` (searching parents).
    ///
    /// # Errors
    /// Returns error if no repository found at path or any parent, or if the
    /// repository is bare.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = git2::Repository::discover(path)
            .map_err(|_| Error::NotARepository(path.to_path_buf()))?;
        let root = inner.workdir().ok_or(Error::BareRepository)?;
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

        let mut repo = Self::at(root);
        repo.git_dir = inner.path().to_path_buf();
        Ok(repo)
    }

    /// Wrap a known working tree root without discovery. The git directory
    /// is assumed to be `<root>/.git`.
    fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let runner = GitRunner::new(root.clone());
        Self {
            git_dir: root.join(".git"),
            root,
            runner,
        }
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.runner = self.runner.with_binary(binary);
        self
    }

    /// Report every git invocation to `hook`.
    #[must_use]
    pub fn with_command_hook(mut self, hook: CommandHook) -> Self {
        self.runner = self.runner.with_hook(hook);
        self
    }

    /// Get the path to the repository root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }
}

impl HistoryOps for Repository {
    fn list_branches(&self) -> Result<Vec<String>> {
        let output = self.runner.run(&["branch", "--all", "--no-color"])?;
        Ok(parse_branches(&output))
    }

    fn list_files(&self, reference: &str) -> Result<Vec<String>> {
        check_ref(reference)?;
        // Unquoted paths so non-ASCII names compare equal to the worktree's
        let output = self.runner.run(&[
            "-c",
            "core.quotePath=false",
            "ls-tree",
            "-r",
            "--name-only",
            reference,
        ])?;
        Ok(parse_file_list(&output))
    }

    fn commit_history(&self, path: &str) -> Result<Vec<CommitRecord>> {
        let output = self
            .runner
            .run(&["log", "--pretty=format:%h %s", "--", path])?;
        Ok(parse_history(&output))
    }

    fn file_content_at(&self, reference: &str, path: &str) -> Result<String> {
        check_ref(reference)?;
        let object = format!("{reference}:{path}");
        self.runner.run(&["show", &object])
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("root", &self.root)
            .field("git_dir", &self.git_dir)
            .finish_non_exhaustive()
    }
}

fn check_ref(reference: &str) -> Result<()> {
    if reference.starts_with('-') {
        return Err(Error::InvalidRef(reference.to_string()));
    }
    Ok(())
}

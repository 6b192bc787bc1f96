//! Preconditions every action checks: repository root and active file.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// What the host knows about the user's workspace when an action starts.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Root of the open repository.
    pub repo_root: Option<PathBuf>,
    /// Absolute path of the file currently open.
    pub active_document: Option<PathBuf>,
}

impl ActionContext {
    /// The repository root, or [`Error::NoRepository`].
    ///
    /// # Errors
    /// Returns error when no repository is open.
    pub fn require_root(&self) -> Result<&Path> {
        self.repo_root.as_deref().ok_or(Error::NoRepository)
    }

    /// The active file, or [`Error::NoActiveDocument`].
    ///
    /// # Errors
    /// Returns error when no file is open.
    pub fn require_active(&self) -> Result<&Path> {
        self.active_document
            .as_deref()
            .ok_or(Error::NoActiveDocument)
    }

    /// Both preconditions, with the active file normalized against the root.
    ///
    /// The active file is checked first so that "no file open" wins when
    /// both are missing.
    ///
    /// # Errors
    /// Returns the first failed precondition.
    pub fn require_active_in_repo(&self) -> Result<(&Path, String)> {
        let active = self.require_active()?;
        let root = self.require_root()?;
        let relative = normalize_path(root, active)?;
        Ok((active, relative))
    }
}

/// Path of `file` relative to `root` with forward slashes.
///
/// Both paths are canonicalized when they exist so symlinked temp dirs and
/// `..` segments compare correctly.
///
/// # Errors
/// Returns [`Error::OutsideRepository`] when `file` is not under `root`.
pub fn normalize_path(root: &Path, file: &Path) -> Result<String> {
    let root = canonical(root);
    let file = canonical(file);

    let relative = file
        .strip_prefix(&root)
        .map_err(|_| Error::OutsideRepository(file.clone()))?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return Err(Error::OutsideRepository(file));
    }

    Ok(parts.join("/").replace('\\', "/"))
}

/// Canonical form of `path`. A file that no longer exists on disk is
/// resolved through its parent directory.
fn canonical(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            canonical(parent).join(name)
        }
        _ => path.to_path_buf(),
    }
}

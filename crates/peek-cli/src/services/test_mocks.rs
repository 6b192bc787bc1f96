//! Mock implementations for testing services.
//!
//! These mocks implement the traits from peek-git and peek-core
//! to enable unit testing of service logic without real repos or a terminal.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;

use peek_core::{ActionContext, Comparison, DocumentView, Host, Result as CoreResult};
use peek_git::{CommitRecord, HistoryOps, Result as GitResult};
use tempfile::TempDir;

/// Mock implementation of `HistoryOps` for testing.
///
/// Every call is recorded in `calls` as a short git-like command line.
pub struct MockHistoryOps {
    pub branches: RefCell<Vec<String>>,
    pub files: RefCell<HashMap<String, Vec<String>>>,
    pub contents: RefCell<HashMap<(String, String), String>>,
    pub history: RefCell<HashMap<String, Vec<CommitRecord>>>,
    pub branches_error: RefCell<Option<String>>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for MockHistoryOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHistoryOps {
    pub fn new() -> Self {
        Self {
            branches: RefCell::new(Vec::new()),
            files: RefCell::new(HashMap::new()),
            contents: RefCell::new(HashMap::new()),
            history: RefCell::new(HashMap::new()),
            branches_error: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_branches(self, names: &[&str]) -> Self {
        *self.branches.borrow_mut() = names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    /// Track `path` at `reference` with `content`.
    pub fn with_file(self, reference: &str, path: &str, content: &str) -> Self {
        self.files
            .borrow_mut()
            .entry(reference.to_string())
            .or_default()
            .push(path.to_string());
        self.contents
            .borrow_mut()
            .insert((reference.to_string(), path.to_string()), content.to_string());
        self
    }

    pub fn with_commit(self, path: &str, hash: &str, subject: &str) -> Self {
        self.history
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push(CommitRecord {
                hash: hash.to_string(),
                subject: subject.to_string(),
            });
        self
    }

    pub fn with_branches_error(self, message: &str) -> Self {
        *self.branches_error.borrow_mut() = Some(message.to_string());
        self
    }

    /// Recorded calls.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn failed(command: String, message: String) -> peek_git::Error {
        peek_git::Error::CommandFailed { command, message }
    }
}

impl HistoryOps for MockHistoryOps {
    fn list_branches(&self) -> GitResult<Vec<String>> {
        self.record("branch --all".to_string());
        if let Some(message) = self.branches_error.borrow().clone() {
            return Err(Self::failed("git branch --all".into(), message));
        }
        Ok(self.branches.borrow().clone())
    }

    fn list_files(&self, reference: &str) -> GitResult<Vec<String>> {
        self.record(format!("ls-tree {reference}"));
        self.files.borrow().get(reference).cloned().ok_or_else(|| {
            Self::failed(
                format!("git ls-tree -r --name-only {reference}"),
                format!("fatal: Not a valid object name {reference}"),
            )
        })
    }

    fn commit_history(&self, path: &str) -> GitResult<Vec<CommitRecord>> {
        self.record(format!("log {path}"));
        Ok(self.history.borrow().get(path).cloned().unwrap_or_default())
    }

    fn file_content_at(&self, reference: &str, path: &str) -> GitResult<String> {
        self.record(format!("show {reference}:{path}"));
        self.contents
            .borrow()
            .get(&(reference.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| {
                Self::failed(
                    format!("git show {reference}:{path}"),
                    format!("fatal: path '{path}' does not exist in '{reference}'"),
                )
            })
    }
}

/// Mock implementation of `Host` with scripted picks.
///
/// Each prompt consumes the next scripted answer: `Some(item)` picks that
/// item by its label, `None` dismisses the prompt.
pub struct MockHost {
    pub picks: RefCell<VecDeque<Option<String>>>,
    pub prompts: RefCell<Vec<(String, Vec<String>)>>,
    pub errors: RefCell<Vec<String>>,
    /// Rendered documents as (title, content).
    pub documents: RefCell<Vec<(String, String)>>,
    pub comparisons: RefCell<Vec<(String, String, String)>>,
    pub status: RefCell<Vec<Option<String>>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            picks: RefCell::new(VecDeque::new()),
            prompts: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
            documents: RefCell::new(Vec::new()),
            comparisons: RefCell::new(Vec::new()),
            status: RefCell::new(Vec::new()),
        }
    }

    /// Answer the next prompt with `item`.
    pub fn with_pick(self, item: &str) -> Self {
        self.picks.borrow_mut().push_back(Some(item.to_string()));
        self
    }

    /// Dismiss the next prompt.
    pub fn with_dismiss(self) -> Self {
        self.picks.borrow_mut().push_back(None);
        self
    }

    /// Titles of displayed documents.
    pub fn document_titles(&self) -> Vec<String> {
        self.documents.borrow().iter().map(|d| d.0.clone()).collect()
    }

    /// Labels of the prompts shown.
    pub fn prompt_labels(&self) -> Vec<String> {
        self.prompts.borrow().iter().map(|p| p.0.clone()).collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Host for MockHost {
    fn pick_index(&self, label: &str, items: &[String]) -> CoreResult<Option<usize>> {
        self.prompts
            .borrow_mut()
            .push((label.to_string(), items.to_vec()));
        let answer = self.picks.borrow_mut().pop_front().flatten();
        Ok(answer.and_then(|wanted| items.iter().position(|i| *i == wanted)))
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn show_document(&self, document: DocumentView<'_>) -> CoreResult<()> {
        self.documents
            .borrow_mut()
            .push((document.title.to_string(), document.content.to_string()));
        Ok(())
    }

    fn show_comparison(&self, comparison: &Comparison<'_>) -> CoreResult<()> {
        self.comparisons.borrow_mut().push((
            comparison.title.clone(),
            comparison.historical.content.to_string(),
            comparison.live.content.clone(),
        ));
        Ok(())
    }

    fn set_status(&self, text: Option<&str>) {
        self.status.borrow_mut().push(text.map(String::from));
    }
}

/// A temp repository root with `relative` written to disk, and a context
/// pointing at it as the active document.
pub fn workspace_with_file(relative: &str, content: &str) -> (TempDir, ActionContext) {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join(relative);
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file, content).unwrap();

    let ctx = ActionContext {
        repo_root: Some(temp.path().to_path_buf()),
        active_document: Some(file),
    };
    (temp, ctx)
}

/// A temp repository root with no active document.
pub fn workspace_without_file() -> (TempDir, ActionContext) {
    let temp = TempDir::new().unwrap();
    let ctx = ActionContext {
        repo_root: Some(temp.path().to_path_buf()),
        active_document: None,
    };
    (temp, ctx)
}

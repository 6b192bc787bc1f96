//! Trait abstraction over the front end that prompts and displays.
//!
//! Services never talk to a terminal directly. Everything user-visible goes
//! through `Host`, which the CLI implements with interactive prompts and
//! colored output and tests implement with scripted mocks.

use std::fmt::Display;
use std::path::PathBuf;

use crate::Result;
use crate::document::DocumentUri;

/// A registered document as the host renders it. `content` is what the
/// registry returned for `uri` at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentView<'a> {
    pub uri: &'a DocumentUri,
    pub title: &'a str,
    pub content: &'a str,
}

/// The document the user currently has open, read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveDocument {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Repository-relative, forward-slash path.
    pub relative: String,
    pub content: String,
}

/// A two-pane comparison between historical and live content.
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    pub title: String,
    /// Left pane.
    pub historical: DocumentView<'a>,
    /// Right pane.
    pub live: &'a LiveDocument,
}

/// Prompt and display primitives supplied by the front end.
#[allow(clippy::missing_errors_doc)]
pub trait Host {
    /// Present `items` in order under `label` and return the index picked,
    /// or `None` if the prompt was dismissed.
    fn pick_index(&self, label: &str, items: &[String]) -> Result<Option<usize>>;

    /// Show an error notification.
    fn show_error(&self, message: &str);

    /// Display a read-only document, pinned (not a preview) in a view
    /// beside the current one.
    fn show_document(&self, document: DocumentView<'_>) -> Result<()>;

    /// Display a two-pane comparison.
    fn show_comparison(&self, comparison: &Comparison<'_>) -> Result<()>;

    /// Update the status indicator; `None` hides it.
    fn set_status(&self, text: Option<&str>);

    /// Pick one of `items`, returning the item itself.
    fn pick_one<T: Display>(&self, label: &str, items: Vec<T>) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let labels: Vec<String> = items.iter().map(ToString::to_string).collect();
        let Some(index) = self.pick_index(label, &labels)? else {
            return Ok(None);
        };
        Ok(items.into_iter().nth(index))
    }
}

//! Status indicator tracking which historical file is in view.

use crate::document::{Origin, VirtualDocument};

/// Text for the status indicator while `document` is the active view.
#[must_use]
pub fn status_text(document: &VirtualDocument) -> String {
    match document.origin() {
        Origin::Branch(branch) => format!("⎇ {branch}: {}", document.path()),
        Origin::Commit(hash) => format!("⎇ {hash}: {}", document.path()),
    }
}

/// Tracks the active view and the indicator text derived from it.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    text: Option<String>,
}

impl StatusIndicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the active view changed. Returns `true` if the indicator
    /// text changed and the host should be updated.
    pub fn active_view_changed(&mut self, document: Option<&VirtualDocument>) -> bool {
        let text = document.map(status_text);
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    /// Current indicator text, `None` when hidden.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

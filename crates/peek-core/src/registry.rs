//! Session-wide registry of virtual documents.
//!
//! Registration is append-only. Content is looked up when the host renders a
//! document; the most recent registration of a URI wins.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::document::{DocumentUri, VirtualDocument};

/// Append-only store of the documents presented during a session.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: VecDeque<Arc<VirtualDocument>>,
    cap: Option<usize>,
}

impl DocumentRegistry {
    /// Create an unbounded registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding at most `cap` documents, evicting the
    /// oldest first. `None` keeps everything.
    #[must_use]
    pub fn with_cap(cap: Option<usize>) -> Self {
        Self {
            documents: VecDeque::new(),
            cap: cap.filter(|&n| n > 0),
        }
    }

    /// Register a document and return a shared handle to it.
    pub fn register(&mut self, document: VirtualDocument) -> Arc<VirtualDocument> {
        let document = Arc::new(document);
        self.documents.push_back(Arc::clone(&document));
        if let Some(cap) = self.cap {
            while self.documents.len() > cap {
                self.documents.pop_front();
            }
        }
        document
    }

    /// Look up the document registered under `uri`.
    #[must_use]
    pub fn get(&self, uri: &DocumentUri) -> Option<Arc<VirtualDocument>> {
        self.documents
            .iter()
            .rev()
            .find(|doc| doc.uri() == uri)
            .map(Arc::clone)
    }

    /// Content provider: text for `uri`, if registered.
    #[must_use]
    pub fn provide(&self, uri: &DocumentUri) -> Option<String> {
        self.get(uri).map(|doc| doc.content().to_string())
    }

    /// Number of registrations held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(branch: &str, content: &str) -> VirtualDocument {
        VirtualDocument::from_branch(branch, "src/a.ts", content.to_string())
    }

    #[test]
    fn test_register_and_provide() {
        let mut registry = DocumentRegistry::new();
        let handle = registry.register(doc("main", "hello"));

        assert_eq!(registry.provide(handle.uri()), Some("hello".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_uri() {
        let registry = DocumentRegistry::new();
        assert!(registry.provide(&DocumentUri::readonly("[x] y")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_latest_registration_wins() {
        let mut registry = DocumentRegistry::new();
        registry.register(doc("main", "old"));
        let newer = registry.register(doc("main", "new"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.provide(newer.uri()), Some("new".to_string()));
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut registry = DocumentRegistry::with_cap(Some(2));
        let first = registry.register(doc("a", "1"));
        registry.register(doc("b", "2"));
        let third = registry.register(doc("c", "3"));

        assert_eq!(registry.len(), 2);
        assert!(registry.get(first.uri()).is_none());
        assert_eq!(registry.provide(third.uri()), Some("3".to_string()));
    }

    #[test]
    fn test_zero_cap_is_unbounded() {
        let mut registry = DocumentRegistry::with_cap(Some(0));
        for i in 0..10 {
            registry.register(doc(&format!("b{i}"), "x"));
        }
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_documents_are_immutable_snapshots() {
        let mut registry = DocumentRegistry::new();
        let handle = registry.register(doc("main", "v1"));
        registry.register(doc("other", "v2"));

        assert_eq!(handle.content(), "v1");
        assert_eq!(registry.provide(handle.uri()), Some("v1".to_string()));
    }
}

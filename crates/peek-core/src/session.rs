//! Host session: the document registry and status indicator that outlive a
//! single action, plus the presentation steps shared by every action.

use std::sync::Arc;

use crate::document::{DocumentUri, VirtualDocument, base_name};
use crate::error::{Error, Result};
use crate::host::{Comparison, DocumentView, Host, LiveDocument};
use crate::registry::DocumentRegistry;
use crate::status::StatusIndicator;

/// State the host keeps across actions.
#[derive(Debug)]
pub struct Session<H: Host> {
    host: H,
    registry: DocumentRegistry,
    status: StatusIndicator,
}

impl<H: Host> Session<H> {
    /// Start a session with an unbounded registry.
    pub fn new(host: H) -> Self {
        Self::with_registry(host, DocumentRegistry::new())
    }

    /// Start a session with a preconfigured registry.
    pub fn with_registry(host: H, registry: DocumentRegistry) -> Self {
        Self {
            host,
            registry,
            status: StatusIndicator::new(),
        }
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub const fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    /// Current status indicator text.
    pub fn status(&self) -> Option<&str> {
        self.status.text()
    }

    /// Register `document` and open it pinned beside the current view. The
    /// host renders whatever the registry provides for the document's URI.
    ///
    /// # Errors
    /// Returns error if the host cannot display it.
    pub fn open_beside(&mut self, document: VirtualDocument) -> Result<Arc<VirtualDocument>> {
        let document = self.registry.register(document);
        let content = self.provide(document.uri())?;
        self.host.show_document(DocumentView {
            uri: document.uri(),
            title: document.title(),
            content: &content,
        })?;
        self.view_changed(Some(document.uri()));
        Ok(document)
    }

    /// Register `historical` and compare it against `live`.
    ///
    /// # Errors
    /// Returns error if the host cannot display the comparison.
    pub fn compare(
        &mut self,
        historical: VirtualDocument,
        live: &LiveDocument,
    ) -> Result<Arc<VirtualDocument>> {
        let historical = self.registry.register(historical);
        let content = self.provide(historical.uri())?;
        let title = format!(
            "{} (working tree) ↔ {}",
            base_name(&live.relative),
            historical.title()
        );
        self.host.show_comparison(&Comparison {
            title,
            historical: DocumentView {
                uri: historical.uri(),
                title: historical.title(),
                content: &content,
            },
            live,
        })?;
        self.view_changed(Some(historical.uri()));
        Ok(historical)
    }

    /// The active view changed to `uri` (or to something that is not a
    /// virtual document). Refreshes the status indicator.
    pub fn view_changed(&mut self, uri: Option<&DocumentUri>) {
        let document = uri.and_then(|u| self.registry.get(u));
        if self.status.active_view_changed(document.as_deref()) {
            self.host.set_status(self.status.text());
        }
    }

    /// Registry lookup at render time.
    fn provide(&self, uri: &DocumentUri) -> Result<String> {
        self.registry
            .provide(uri)
            .ok_or_else(|| Error::Host(format!("No content registered for '{uri}'.")))
    }

    /// Show `error` to the user.
    pub fn report(&self, error: &Error) {
        self.host.show_error(&error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingHost {
        shown: RefCell<Vec<(String, String)>>,
        compared: RefCell<Vec<(String, String)>>,
        errors: RefCell<Vec<String>>,
        status: RefCell<Vec<Option<String>>>,
    }

    impl Host for RecordingHost {
        fn pick_index(&self, _label: &str, _items: &[String]) -> Result<Option<usize>> {
            Ok(None)
        }

        fn show_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn show_document(&self, document: DocumentView<'_>) -> Result<()> {
            self.shown
                .borrow_mut()
                .push((document.title.to_string(), document.content.to_string()));
            Ok(())
        }

        fn show_comparison(&self, comparison: &Comparison<'_>) -> Result<()> {
            self.compared.borrow_mut().push((
                comparison.title.clone(),
                comparison.historical.content.to_string(),
            ));
            Ok(())
        }

        fn set_status(&self, text: Option<&str>) {
            self.status.borrow_mut().push(text.map(String::from));
        }
    }

    fn live() -> LiveDocument {
        LiveDocument {
            path: PathBuf::from("/repo/src/a.ts"),
            relative: "src/a.ts".into(),
            content: "live".into(),
        }
    }

    #[test]
    fn test_open_beside_registers_and_updates_status() {
        let mut session = Session::new(RecordingHost::default());
        let doc = session
            .open_beside(VirtualDocument::from_branch("release", "src/a.ts", "old".into()))
            .unwrap();

        let shown = session.host().shown.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "[release] a.ts");
        assert_eq!(Some(shown[0].1.clone()), session.registry().provide(doc.uri()));
        assert_eq!(shown[0].1, "old");
        assert_eq!(session.status(), Some("⎇ release: src/a.ts"));
    }

    #[test]
    fn test_render_reads_latest_registration() {
        let mut session = Session::new(RecordingHost::default());
        session
            .open_beside(VirtualDocument::from_branch("main", "src/a.ts", "first".into()))
            .unwrap();
        let doc = session
            .open_beside(VirtualDocument::from_branch("main", "src/a.ts", "second".into()))
            .unwrap();

        let contents: Vec<String> = session
            .host()
            .shown
            .borrow()
            .iter()
            .map(|(_, content)| content.clone())
            .collect();
        assert_eq!(contents, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(session.registry().len(), 2);
        assert_eq!(session.registry().provide(doc.uri()), Some("second".into()));
    }

    #[test]
    fn test_compare_title() {
        let mut session = Session::new(RecordingHost::default());
        session
            .compare(
                VirtualDocument::from_branch("main", "src/a.ts", "old".into()),
                &live(),
            )
            .unwrap();

        assert_eq!(
            *session.host().compared.borrow(),
            vec![("a.ts (working tree) ↔ [main] a.ts".to_string(), "old".to_string())]
        );
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_view_changed_to_plain_file_clears_status() {
        let mut session = Session::new(RecordingHost::default());
        session
            .open_beside(VirtualDocument::from_commit("abc123", "a.ts", String::new()))
            .unwrap();
        session.view_changed(None);

        assert_eq!(
            *session.host().status.borrow(),
            vec![Some("⎇ abc123: a.ts".to_string()), None]
        );
    }

    #[test]
    fn test_report_uses_user_message() {
        let session = Session::new(RecordingHost::default());
        session.report(&Error::NoRepository);
        assert_eq!(
            *session.host().errors.borrow(),
            vec!["No Git repository found.".to_string()]
        );
    }
}

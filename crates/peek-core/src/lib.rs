//! # peek-core
//!
//! Core library for peek: read-only virtual documents, the session-wide
//! document registry, the status indicator, the host abstraction and
//! configuration.

pub mod config;
pub mod document;
pub mod error;
pub mod host;
pub mod registry;
pub mod session;
pub mod status;
pub mod workspace;

pub use config::{Config, DiffStyle};
pub use document::{DocumentUri, Origin, VirtualDocument};
pub use error::{Error, Result};
pub use host::{Comparison, DocumentView, Host, LiveDocument};
pub use registry::DocumentRegistry;
pub use session::Session;
pub use status::StatusIndicator;
pub use workspace::{ActionContext, normalize_path};

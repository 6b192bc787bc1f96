//! # peek-git
//!
//! Read-only git plumbing for peek. Runs the git binary with argument
//! arrays and parses its line-oriented output into branches, tracked
//! files, commit records and file contents at any ref.

mod error;
mod parse;
mod repository;
mod runner;
mod traits;
mod types;

pub use error::{Error, Result};
pub use repository::Repository;
pub use runner::{CommandHook, GitRunner};
pub use traits::HistoryOps;
pub use types::CommitRecord;

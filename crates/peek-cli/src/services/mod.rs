//! Service layer for the user-facing actions with dependency injection.
//!
//! Each action gathers its inputs through the host's pickers, fetches
//! content through `HistoryOps` and presents it through the session. Services
//! accept trait-based dependencies, enabling testing with mock
//! implementations.

pub mod commit;
pub mod compare;
pub mod listing;
pub mod search;
pub mod view;

#[cfg(test)]
pub mod test_mocks;

use std::sync::Arc;

use peek_core::{Error, Host, Result, Session, VirtualDocument};
use peek_git::HistoryOps;

pub use commit::{CommitRequest, CommitService};
pub use compare::{CompareRequest, CompareService};
pub use listing::{BranchList, FileList, History, ListingService};
pub use search::{SearchRequest, SearchService};
pub use view::{ViewRequest, ViewService};

/// Prompt shown when picking a branch to view a file in.
pub const PICK_BRANCH_TO_VIEW: &str = "Select a branch to view the file";
/// Prompt shown when picking a branch to compare against.
pub const PICK_BRANCH_TO_COMPARE: &str = "Select a branch to compare with";
/// Prompt shown when picking a branch to search.
pub const PICK_BRANCH_TO_SEARCH: &str = "Select a branch to search";
/// Prompt shown when picking a file from a branch.
pub const PICK_FILE: &str = "Select a file to open";
/// Prompt shown when picking a commit from file history.
pub const PICK_COMMIT: &str = "Select a commit";

/// How an action ended.
#[derive(Debug)]
pub enum Outcome {
    /// A document was opened beside the current view.
    Opened(Arc<VirtualDocument>),
    /// A comparison was shown; holds the historical side.
    Compared(Arc<VirtualDocument>),
    /// The user dismissed a picker. Nothing was shown.
    Dismissed,
}

/// Use `preset` if given, otherwise ask the user to pick a branch.
fn choose_branch<G: HistoryOps, H: Host>(
    repo: &G,
    host: &H,
    label: &str,
    preset: Option<&str>,
) -> Result<Option<String>> {
    if let Some(branch) = preset {
        return Ok(Some(branch.to_string()));
    }

    let branches = repo.list_branches()?;
    if branches.is_empty() {
        return Err(Error::NothingToPick("No branches found.".into()));
    }
    host.pick_one(label, branches)
}

/// Fetch `path` at `reference` after confirming it is tracked there.
fn fetch_content<G: HistoryOps>(repo: &G, reference: &str, path: &str) -> Result<String> {
    if !repo.file_exists(reference, path) {
        return Err(Error::NotInRef {
            path: path.to_string(),
            reference: reference.to_string(),
        });
    }
    Ok(repo.file_content_at(reference, path)?)
}

/// Report a failed action through the host. Returns `true` if the action
/// succeeded or was dismissed.
pub fn finish<H: Host>(session: &Session<H>, result: &Result<Outcome>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            session.report(e);
            false
        }
    }
}

//! Compare service: diff the active file against its version on a branch.

use std::fs;

use peek_core::{ActionContext, Host, LiveDocument, Result, Session, VirtualDocument};
use peek_git::HistoryOps;

use super::{Outcome, PICK_BRANCH_TO_COMPARE, choose_branch, fetch_content};

/// Answers supplied up front instead of prompting.
#[derive(Debug, Default, Clone)]
pub struct CompareRequest {
    pub branch: Option<String>,
}

/// Service for the "Compare File Across Branches" action.
pub struct CompareService<'a, G: HistoryOps> {
    repo: &'a G,
}

impl<'a, G: HistoryOps> CompareService<'a, G> {
    /// Create a new compare service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Pick a branch, then show a two-pane comparison of the branch's
    /// version (left) against the file on disk (right).
    pub fn run<H: Host>(
        &self,
        session: &mut Session<H>,
        ctx: &ActionContext,
        request: &CompareRequest,
    ) -> Result<Outcome> {
        let (active, path) = ctx.require_active_in_repo()?;

        let Some(branch) = choose_branch(
            self.repo,
            session.host(),
            PICK_BRANCH_TO_COMPARE,
            request.branch.as_deref(),
        )?
        else {
            return Ok(Outcome::Dismissed);
        };

        let content = fetch_content(self.repo, &branch, &path)?;
        let live = LiveDocument {
            path: active.to_path_buf(),
            content: fs::read_to_string(active)?,
            relative: path.clone(),
        };

        let historical =
            session.compare(VirtualDocument::from_branch(&branch, &path, content), &live)?;
        Ok(Outcome::Compared(historical))
    }
}

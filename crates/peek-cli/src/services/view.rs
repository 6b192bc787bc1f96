//! View service: open the active file as it exists on another branch.

use peek_core::{ActionContext, Host, Result, Session, VirtualDocument};
use peek_git::HistoryOps;

use super::{Outcome, PICK_BRANCH_TO_VIEW, choose_branch, fetch_content};

/// Answers supplied up front instead of prompting.
#[derive(Debug, Default, Clone)]
pub struct ViewRequest {
    pub branch: Option<String>,
}

/// Service for the "View File in Branch" action.
pub struct ViewService<'a, G: HistoryOps> {
    repo: &'a G,
}

impl<'a, G: HistoryOps> ViewService<'a, G> {
    /// Create a new view service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Pick a branch, then open the active file from it beside the current
    /// view, titled `[<branch>] <basename>`.
    pub fn run<H: Host>(
        &self,
        session: &mut Session<H>,
        ctx: &ActionContext,
        request: &ViewRequest,
    ) -> Result<Outcome> {
        let (_, path) = ctx.require_active_in_repo()?;

        let Some(branch) = choose_branch(
            self.repo,
            session.host(),
            PICK_BRANCH_TO_VIEW,
            request.branch.as_deref(),
        )?
        else {
            return Ok(Outcome::Dismissed);
        };

        let content = fetch_content(self.repo, &branch, &path)?;
        let document = session.open_beside(VirtualDocument::from_branch(&branch, &path, content))?;
        Ok(Outcome::Opened(document))
    }
}

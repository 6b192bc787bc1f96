//! Commit service: open the active file as of a commit from its history.

use peek_core::{ActionContext, Error, Host, Result, Session, VirtualDocument};
use peek_git::HistoryOps;

use super::{Outcome, PICK_COMMIT, fetch_content};

/// Answers supplied up front instead of prompting.
#[derive(Debug, Default, Clone)]
pub struct CommitRequest {
    /// Commit hash (any ref git accepts).
    pub commit: Option<String>,
}

/// Service for the "Open File from Commit" action.
pub struct CommitService<'a, G: HistoryOps> {
    repo: &'a G,
}

impl<'a, G: HistoryOps> CommitService<'a, G> {
    /// Create a new commit service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Pick a commit from the active file's history and open the file as of
    /// that commit, titled `[<hash>] <path>`.
    pub fn run<H: Host>(
        &self,
        session: &mut Session<H>,
        ctx: &ActionContext,
        request: &CommitRequest,
    ) -> Result<Outcome> {
        let (_, path) = ctx.require_active_in_repo()?;

        let hash = if let Some(commit) = &request.commit {
            commit.clone()
        } else {
            let history = self.repo.commit_history(&path)?;
            if history.is_empty() {
                return Err(Error::NothingToPick(format!(
                    "No commits found for '{path}'."
                )));
            }
            let Some(record) = session.host().pick_one(PICK_COMMIT, history)? else {
                return Ok(Outcome::Dismissed);
            };
            record.hash
        };

        let content = fetch_content(self.repo, &hash, &path)?;
        let document = session.open_beside(VirtualDocument::from_commit(&hash, &path, content))?;
        Ok(Outcome::Opened(document))
    }
}

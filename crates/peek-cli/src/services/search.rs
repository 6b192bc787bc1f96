//! Search service: browse any branch's tracked files and open one.

use peek_core::{ActionContext, Error, Host, Result, Session, VirtualDocument};
use peek_git::HistoryOps;

use super::{Outcome, PICK_BRANCH_TO_SEARCH, PICK_FILE, choose_branch};

/// Answers supplied up front instead of prompting.
#[derive(Debug, Default, Clone)]
pub struct SearchRequest {
    pub branch: Option<String>,
    pub file: Option<String>,
}

/// Service for the "Search Files Across Branches" action.
pub struct SearchService<'a, G: HistoryOps> {
    repo: &'a G,
}

impl<'a, G: HistoryOps> SearchService<'a, G> {
    /// Create a new search service.
    #[must_use]
    pub const fn new(repo: &'a G) -> Self {
        Self { repo }
    }

    /// Pick a branch, pick one of its tracked files, open it beside the
    /// current view. Needs no active file.
    pub fn run<H: Host>(
        &self,
        session: &mut Session<H>,
        ctx: &ActionContext,
        request: &SearchRequest,
    ) -> Result<Outcome> {
        ctx.require_root()?;

        let Some(branch) = choose_branch(
            self.repo,
            session.host(),
            PICK_BRANCH_TO_SEARCH,
            request.branch.as_deref(),
        )?
        else {
            return Ok(Outcome::Dismissed);
        };

        let files = self.repo.list_files(&branch)?;

        let path = match request.file.as_deref() {
            Some(file) => file.replace('\\', "/"),
            None => {
                if files.is_empty() {
                    return Err(Error::NothingToPick(format!(
                        "No files found in branch '{branch}'."
                    )));
                }
                let Some(file) = session.host().pick_one(PICK_FILE, files.clone())? else {
                    return Ok(Outcome::Dismissed);
                };
                file
            }
        };

        // The listing above already answers the existence check
        if !files.contains(&path) {
            return Err(Error::NotInRef {
                path,
                reference: branch,
            });
        }

        let content = self.repo.file_content_at(&branch, &path)?;
        let document = session.open_beside(VirtualDocument::from_branch(&branch, &path, content))?;
        Ok(Outcome::Opened(document))
    }
}

//! `peek search` command - browse another branch's files and open one.

use anyhow::Result;

use super::utils::run_action;
use crate::services::{SearchRequest, SearchService};

/// Run the search command.
pub fn run(branch: Option<String>, file: Option<String>) -> Result<()> {
    let request = SearchRequest { branch, file };
    run_action(None, false, |repo, session, ctx| {
        SearchService::new(repo).run(session, ctx, &request)
    })
}

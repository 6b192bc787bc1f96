//! `peek commit` command - open a file as of a commit from its history.

use std::path::Path;

use anyhow::Result;

use super::utils::run_action;
use crate::services::{CommitRequest, CommitService};

/// Run the commit command.
pub fn run(file: Option<&Path>, commit: Option<String>) -> Result<()> {
    let request = CommitRequest { commit };
    run_action(file, true, |repo, session, ctx| {
        CommitService::new(repo).run(session, ctx, &request)
    })
}

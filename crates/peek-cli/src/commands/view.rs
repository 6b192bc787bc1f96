//! `peek view` command - open a file as it exists in another branch.

use std::path::Path;

use anyhow::Result;

use super::utils::run_action;
use crate::services::{ViewRequest, ViewService};

/// Run the view command.
pub fn run(file: Option<&Path>, branch: Option<String>) -> Result<()> {
    let request = ViewRequest { branch };
    run_action(file, true, |repo, session, ctx| {
        ViewService::new(repo).run(session, ctx, &request)
    })
}

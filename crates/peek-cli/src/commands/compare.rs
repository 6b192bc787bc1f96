//! `peek compare` command - diff a file against its version in another branch.

use std::path::Path;

use anyhow::Result;

use super::utils::run_action;
use crate::services::{CompareRequest, CompareService};

/// Run the compare command.
pub fn run(file: Option<&Path>, branch: Option<String>) -> Result<()> {
    let request = CompareRequest { branch };
    run_action(file, true, |repo, session, ctx| {
        CompareService::new(repo).run(session, ctx, &request)
    })
}

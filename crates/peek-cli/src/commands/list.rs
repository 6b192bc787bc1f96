//! `peek branches`, `peek files` and `peek history` - plain listings.

use std::path::Path;

use anyhow::{Context, Result};
use peek_core::normalize_path;
use serde::Serialize;

use super::utils::open_repo;
use crate::output;
use crate::services::ListingService;

/// Print every branch git knows about.
pub fn run_branches(json: bool) -> Result<()> {
    let repo = open_repo()?;
    let list = ListingService::new(&repo).branches()?;

    if json {
        return print_json(&list);
    }
    for branch in &list.branches {
        output::essential(branch);
    }
    Ok(())
}

/// Print the files tracked at `reference`.
pub fn run_files(reference: &str, json: bool) -> Result<()> {
    let repo = open_repo()?;
    let list = ListingService::new(&repo).files(reference)?;

    if json {
        return print_json(&list);
    }
    if list.files.is_empty() {
        output::warn(&format!("No files tracked at '{reference}'"));
    }
    for file in &list.files {
        output::essential(file);
    }
    Ok(())
}

/// Print the commits that touched `file`.
pub fn run_history(file: &Path, json: bool) -> Result<()> {
    let repo = open_repo()?;
    let cwd = std::env::current_dir().context("Cannot read current directory")?;
    let path = normalize_path(repo.root(), &cwd.join(file))?;
    let history = ListingService::new(&repo).history(&path)?;

    if json {
        return print_json(&history);
    }
    if history.commits.is_empty() {
        output::warn(&format!("No commits found for '{path}'"));
        return Ok(());
    }
    for commit in &history.commits {
        output::essential(&format!("{:<10} {}", commit.hash, commit.subject));
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)?;
    println!("{json_output}");
    Ok(())
}

//! Parsers for git's line-oriented output.

use crate::types::CommitRecord;

/// Parse `git branch --all` output into branch names.
///
/// Strips the current-branch (`*`) and worktree (`+`) markers and drops empty
/// lines. Symbolic entries such as `remotes/origin/HEAD -> origin/main` are
/// reduced to the name on the left so every entry is a usable ref.
#[must_use]
pub(crate) fn parse_branches(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| {
            let line = line
                .strip_prefix('*')
                .or_else(|| line.strip_prefix("+ "))
                .unwrap_or(line);
            let name = line.trim();
            name.split_once(" -> ").map_or(name, |(alias, _)| alias.trim())
        })
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `git ls-tree -r --name-only` output into paths.
#[must_use]
pub(crate) fn parse_file_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Parse one `%h %s` history line. The hash is everything before the first
/// space; the subject is the rest, verbatim.
#[must_use]
pub(crate) fn parse_commit_line(line: &str) -> Option<CommitRecord> {
    if line.is_empty() {
        return None;
    }
    let (hash, subject) = line.split_once(' ').unwrap_or((line, ""));
    Some(CommitRecord {
        hash: hash.to_string(),
        subject: subject.to_string(),
    })
}

/// Parse `git log --pretty=format:"%h %s"` output.
#[must_use]
pub(crate) fn parse_history(output: &str) -> Vec<CommitRecord> {
    output.lines().filter_map(parse_commit_line).collect()
}

//! Runs the git binary with an argument array.
//!
//! Nothing goes through a shell: refs and paths are passed as discrete
//! arguments, so their contents are never parsed as shell syntax.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// Observer notified before every git invocation.
pub type CommandHook = Box<dyn Fn(&str) + Send + Sync>;

/// Executes git commands in a fixed working directory.
pub struct GitRunner {
    binary: String,
    workdir: PathBuf,
    hook: Option<CommandHook>,
}

impl GitRunner {
    /// Create a runner using the `git` found on PATH.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            binary: "git".to_string(),
            workdir: workdir.into(),
            hook: None,
        }
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Register a hook called with the command line of every invocation.
    #[must_use]
    pub fn with_hook(mut self, hook: CommandHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Run git with `args` and return its stdout, trimmed.
    ///
    /// # Errors
    /// Returns [`Error::GitNotFound`] if the binary is missing, [`Error::Spawn`]
    /// for other launch failures and [`Error::CommandFailed`] carrying stderr
    /// when git exits non-zero.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let command = self.command_line(args);
        if let Some(hook) = &self.hook {
            hook(&command);
        }

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => Error::GitNotFound(self.binary.clone()),
                _ => Error::Spawn {
                    command: command.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{command} exited with {}", output.status)
            } else {
                stderr
            };
            return Err(Error::CommandFailed { command, message });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn command_line(&self, args: &[&str]) -> String {
        let mut line = self.binary.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl std::fmt::Debug for GitRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRunner")
            .field("binary", &self.binary)
            .field("workdir", &self.workdir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_run_trims_stdout() {
        let temp = TempDir::new().unwrap();
        let runner = GitRunner::new(temp.path());

        let version = runner.run(&["--version"]).unwrap();
        assert!(version.starts_with("git version"));
        assert!(!version.ends_with('\n'));
    }

    #[test]
    fn test_missing_binary() {
        let temp = TempDir::new().unwrap();
        let runner = GitRunner::new(temp.path()).with_binary("definitely-not-git-xyz");

        let err = runner.run(&["status"]).unwrap_err();
        assert!(matches!(err, Error::GitNotFound(ref b) if b == "definitely-not-git-xyz"));
    }

    #[test]
    fn test_failure_carries_stderr() {
        let temp = TempDir::new().unwrap();
        let runner = GitRunner::new(temp.path());

        // Not a repository, so git complains on stderr
        let err = runner.run(&["rev-parse", "HEAD"]).unwrap_err();
        match err {
            Error::CommandFailed { command, message } => {
                assert_eq!(command, "git rev-parse HEAD");
                assert!(message.to_lowercase().contains("not a git repository"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_hook_sees_command_line() {
        let temp = TempDir::new().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let runner = GitRunner::new(temp.path())
            .with_hook(Box::new(move |cmd| sink.lock().unwrap().push(cmd.to_string())));

        runner.run(&["--version"]).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["git --version".to_string()]);
    }
}

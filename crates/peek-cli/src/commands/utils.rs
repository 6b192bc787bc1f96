use std::path::Path;

use anyhow::{Context, Result};
use peek_core::{ActionContext, Config, DocumentRegistry, Error as CoreError, Session};
use peek_git::Repository;

use crate::output;
use crate::services::{self, Outcome};
use crate::terminal::TerminalHost;

/// Marker error: the failure was already shown to the user.
#[derive(Debug, thiserror::Error)]
#[error("already reported")]
pub struct Reported;

/// Everything an action needs from the environment.
pub struct Workspace {
    /// `None` outside a repository; actions report that themselves.
    pub repo: Option<Repository>,
    pub config: Config,
    pub context: ActionContext,
}

impl Workspace {
    /// Discover the repository around the current directory and resolve
    /// `file` against it.
    pub fn discover(file: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Cannot read current directory")?;
        let active_document = file.map(|f| cwd.join(f));

        let Ok(repo) = Repository::open(&cwd) else {
            return Ok(Self {
                repo: None,
                config: Config::default(),
                context: ActionContext {
                    repo_root: None,
                    active_document,
                },
            });
        };

        let config = Config::load(Config::path_in(repo.git_dir()))?;
        let repo = repo
            .with_binary(config.general.git_binary.clone())
            .with_command_hook(Box::new(|cmd| output::debug(&format!("$ {cmd}"))));

        Ok(Self {
            context: ActionContext {
                repo_root: Some(repo.root().to_path_buf()),
                active_document,
            },
            repo: Some(repo),
            config,
        })
    }

    /// A host session configured from this workspace.
    pub fn session(&self) -> Session<TerminalHost> {
        Session::with_registry(
            TerminalHost::new(&self.config),
            DocumentRegistry::with_cap(self.config.registry.cap()),
        )
    }
}

/// Helper to open the repository for non-interactive commands.
pub fn open_repo() -> Result<Repository> {
    let workspace = Workspace::discover(None)?;
    workspace.repo.context("Not inside a git repository")
}

/// Run one user action: check for a repository, run `action`, and report
/// any failure through the host.
///
/// When there is no repository, a missing file (for actions that need
/// one) is reported first.
pub fn run_action<F>(file: Option<&Path>, requires_file: bool, action: F) -> Result<()>
where
    F: FnOnce(
        &Repository,
        &mut Session<TerminalHost>,
        &ActionContext,
    ) -> peek_core::Result<Outcome>,
{
    let workspace = Workspace::discover(file)?;
    let mut session = workspace.session();

    let result = match &workspace.repo {
        Some(repo) => action(repo, &mut session, &workspace.context),
        None if requires_file && workspace.context.active_document.is_none() => {
            Err(CoreError::NoActiveDocument)
        }
        None => Err(CoreError::NoRepository),
    };

    if services::finish(&session, &result) {
        Ok(())
    } else {
        Err(Reported.into())
    }
}

//! Configuration management for peek.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// peek configuration loaded from `<git dir>/peek/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// How documents and comparisons are rendered.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Session document registry.
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Config {
    /// Directory and file name within the git directory.
    const DIR: &'static str = "peek";
    const FILE: &'static str = "config.toml";

    /// Location of the config file for a repository's git directory.
    #[must_use]
    pub fn path_in(git_dir: impl AsRef<Path>) -> PathBuf {
        git_dir.as_ref().join(Self::DIR).join(Self::FILE)
    }

    /// Load config from a TOML file. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if file can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// General settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// git executable to invoke.
    #[serde(default = "default_git_binary")]
    pub git_binary: String,

    /// Rows shown at once by pickers.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            git_binary: default_git_binary(),
            page_size: default_page_size(),
        }
    }
}

fn default_git_binary() -> String {
    "git".into()
}

const fn default_page_size() -> usize {
    15
}

/// Layout of two-pane comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffStyle {
    /// Interleaved `-`/`+` lines with hunk headers.
    #[default]
    Unified,
    /// Historical and live text in two columns.
    SideBySide,
}

/// Rendering settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Comparison layout.
    #[serde(default)]
    pub diff_style: DiffStyle,

    /// Unchanged lines kept around each change.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Prefix printed documents with line numbers.
    #[serde(default)]
    pub line_numbers: bool,

    /// Output width in columns; 0 means the terminal's width.
    #[serde(default)]
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            diff_style: DiffStyle::default(),
            context_lines: default_context_lines(),
            line_numbers: false,
            width: 0,
        }
    }
}

const fn default_context_lines() -> usize {
    3
}

/// Registry settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of registered documents; 0 keeps all of them.
    #[serde(default)]
    pub max_documents: usize,
}

impl RegistryConfig {
    /// The cap as an option, `None` when unbounded.
    #[must_use]
    pub const fn cap(&self) -> Option<usize> {
        match self.max_documents {
            0 => None,
            n => Some(n),
        }
    }
}

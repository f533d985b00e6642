//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use super::GitError;
use super::constants::{self, commands, errors, flags, special};
use super::template::Templates;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    ///
    /// Always disables the pager and path quoting so the output is parseable.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::NO_PAGER);
        cmd.arg(flags::CONFIG).arg(flags::UNQUOTED_PATHS);

        cmd.args(args);

        tracing::debug!(?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Get the most recent tag reachable from HEAD
    ///
    /// Returns `Ok(None)` when the repository has no reachable tag (or no
    /// commits at all). Other failures propagate.
    pub fn latest_tag(&self) -> Result<Option<String>, GitError> {
        match self.run(&[commands::DESCRIBE, flags::TAGS, flags::ABBREV_NONE]) {
            Ok(output) => {
                let tag = output.trim();
                Ok((!tag.is_empty()).then(|| tag.to_string()))
            }
            Err(GitError::CommandFailed { stderr, .. }) if is_no_tag_error(&stderr) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Run `git log` with touched paths, optionally starting after `since_tag`
    pub fn log_raw(&self, since_tag: Option<&str>) -> Result<String, GitError> {
        let range = since_tag.map(|tag| format!("{tag}..{}", special::HEAD));

        let mut args = vec![
            commands::LOG,
            flags::DATE_ISO_STRICT,
            flags::NAME_ONLY,
            Templates::log(),
        ];

        if let Some(ref range) = range {
            args.push(range);
        }

        match self.run(&args) {
            // Fresh repository: no HEAD means no history, not a failure
            Err(GitError::CommandFailed { stderr, .. }) if is_unborn_head(&stderr) => {
                Ok(String::new())
            }
            result => result,
        }
    }
}

/// Whether `git describe` failed only because there is nothing to describe
fn is_no_tag_error(stderr: &str) -> bool {
    stderr.contains(errors::NO_NAMES)
        || stderr.contains(errors::NO_TAGS)
        || is_unborn_head(stderr)
}

/// Whether git failed because HEAD does not point at a commit yet
fn is_unborn_head(stderr: &str) -> bool {
    stderr.contains(errors::NO_HEAD)
        || stderr.contains(errors::UNBORN_HEAD)
        || stderr.contains(errors::NO_COMMITS)
}

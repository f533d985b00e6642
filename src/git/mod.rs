//! git command execution layer
//!
//! This module handles running git, reading commit history and parsing it.

pub mod constants;
mod executor;
mod history;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;
pub use history::{History, HistoryRange, extract_history};
pub use template::{FIELD_SEPARATOR, Templates};

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

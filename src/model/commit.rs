//! Commit data model

use chrono::{DateTime, FixedOffset};

/// One commit as read from `git log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Abbreviated commit hash
    pub hash: String,

    /// Author name
    pub author: String,

    /// Author date, in the author's own offset
    pub timestamp: DateTime<FixedOffset>,

    /// Subject line
    pub message: String,

    /// Touched paths relative to the repository root, in git's order
    pub files: Vec<String>,
}

impl CommitRecord {
    /// Did this commit touch any file?
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

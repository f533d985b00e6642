//! Per-category views of a commit

use chrono::{DateTime, FixedOffset};

use super::CommitRecord;
use super::category::basename;

/// One (commit, file) pair filed under a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedEntry {
    pub hash: String,
    pub author: String,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
    /// Basename of the touched file
    pub file: String,
}

impl CategorizedEntry {
    /// Entry for one of `commit`'s touched paths
    pub fn new(commit: &CommitRecord, path: &str) -> Self {
        Self {
            hash: commit.hash.clone(),
            author: commit.author.clone(),
            timestamp: commit.timestamp,
            message: commit.message.clone(),
            file: basename(path).to_string(),
        }
    }
}

/// A commit as it appears in one section of the report
///
/// `files` holds every distinct basename the commit touched in the section,
/// in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitGroup {
    pub hash: String,
    pub author: String,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
    pub files: Vec<String>,
}

impl CommitGroup {
    /// Start a group from the first entry seen for a hash
    pub fn from_entry(entry: &CategorizedEntry) -> Self {
        Self {
            hash: entry.hash.clone(),
            author: entry.author.clone(),
            timestamp: entry.timestamp,
            message: entry.message.clone(),
            files: vec![entry.file.clone()],
        }
    }

    /// Record a file, ignoring basenames already listed
    pub fn add_file(&mut self, file: &str) {
        if !self.files.iter().any(|f| f == file) {
            self.files.push(file.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit() -> CommitRecord {
        CommitRecord {
            hash: "abc123".to_string(),
            author: "Jane Doe".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-01-15T10:30:00+00:00").unwrap(),
            message: "Fix bug".to_string(),
            files: vec!["src/a.js".to_string(), "src/b.js".to_string()],
        }
    }

    #[test]
    fn test_entry_uses_basename() {
        let entry = CategorizedEntry::new(&commit(), "src/app/x.js");
        assert_eq!(entry.file, "x.js");
        assert_eq!(entry.hash, "abc123");
    }

    #[test]
    fn test_group_deduplicates_files() {
        let commit = commit();
        let mut group = CommitGroup::from_entry(&CategorizedEntry::new(&commit, "src/a.js"));
        group.add_file("b.js");
        group.add_file("a.js");
        group.add_file("b.js");
        assert_eq!(group.files, vec!["a.js", "b.js"]);
    }
}

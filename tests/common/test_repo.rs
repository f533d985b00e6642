//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository with deterministic authors and dates.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Author used for every commit
pub const AUTHOR_NAME: &str = "Jane Doe";
pub const AUTHOR_EMAIL: &str = "jane@example.com";

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        repo.git(&["init", "-q"]);
        repo.git(&["config", "user.name", AUTHOR_NAME]);
        repo.git(&["config", "user.email", AUTHOR_EMAIL]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "tag.gpgsign", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        self.git_with_date(args, None)
    }

    fn git_with_date(&self, args: &[&str], date: Option<&str>) -> String {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(self.path());
        if let Some(date) = date {
            cmd.env("GIT_AUTHOR_DATE", date)
                .env("GIT_COMMITTER_DATE", date);
        }

        let output = cmd.output().expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file from the repository.
    ///
    /// Returns an empty string if the file does not exist.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap_or_default()
    }

    /// Write `files` (each with unique content) and commit them at `date`.
    ///
    /// `date` is an ISO 8601 timestamp such as `2024-01-15T10:30:00+00:00`.
    /// Returns the short hash of the new commit.
    pub fn commit_at(&self, message: &str, date: &str, files: &[&str]) -> String {
        for file in files {
            self.write_file(file, &format!("{message} {date}\n"));
        }
        self.git(&["add", "-A"]);
        self.git_with_date(&["commit", "-q", "--allow-empty", "-m", message], Some(date));
        self.short_hash("HEAD")
    }

    /// Create a lightweight tag at HEAD.
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    /// Short hash of a revision, as `%h` prints it.
    pub fn short_hash(&self, rev: &str) -> String {
        self.git(&["log", "-1", "--pretty=format:%h", rev])
            .trim()
            .to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and error patterns.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const DESCRIBE: &str = "describe";
}

/// git command flags
pub mod flags {
    /// Never hand output to a pager (global flag)
    pub const NO_PAGER: &str = "--no-pager";
    /// Set a configuration value for one invocation (global flag)
    pub const CONFIG: &str = "-c";
    /// Print non-ASCII paths verbatim instead of quoting them
    pub const UNQUOTED_PATHS: &str = "core.quotePath=false";
    /// Run as if started in the given directory (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Allow lightweight tags in `git describe`
    pub const TAGS: &str = "--tags";
    /// Print only the tag name in `git describe`
    pub const ABBREV_NONE: &str = "--abbrev=0";
    /// List touched paths after each commit header
    pub const NAME_ONLY: &str = "--name-only";
    /// Strict ISO 8601 dates (RFC 3339 compatible)
    pub const DATE_ISO_STRICT: &str = "--date=iso-strict";
}

/// Special git values
pub mod special {
    /// Revision the history range ends at
    pub const HEAD: &str = "HEAD";
}

/// Error detection patterns in git stderr
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// `git describe` with no reachable tags
    pub const NO_NAMES: &str = "No names found";
    /// `git describe` when tags exist but none are reachable
    pub const NO_TAGS: &str = "No tags can describe";
    /// Repository without any commit yet
    pub const NO_HEAD: &str = "ambiguous argument 'HEAD'";
    /// `git describe` on a repository whose HEAD is unborn
    pub const UNBORN_HEAD: &str = "Not a valid object name HEAD";
    /// `git log` on a branch without commits
    pub const NO_COMMITS: &str = "does not have any commits yet";
}

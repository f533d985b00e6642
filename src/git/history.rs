//! Commit history extraction
//!
//! Wraps the executor so a missing git binary or a directory outside any
//! repository degrades to "no history" instead of aborting the run.

use std::fmt;

use super::GitExecutor;

/// Which slice of history was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryRange {
    /// Commits after the tag (exclusive) up to HEAD
    SinceTag(String),
    /// Every commit reachable from HEAD
    Full,
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SinceTag(tag) => write!(f, "{tag}..HEAD"),
            Self::Full => f.write_str("full history"),
        }
    }
}

/// Raw `git log` output together with the range it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub range: HistoryRange,
    raw: Option<String>,
}

impl History {
    /// History that could be read
    pub fn available(range: HistoryRange, raw: String) -> Self {
        Self {
            range,
            raw: Some(raw),
        }
    }

    /// History that could not be read
    pub fn unavailable(range: HistoryRange) -> Self {
        Self { range, raw: None }
    }

    /// Did git produce a log?
    pub fn is_available(&self) -> bool {
        self.raw.is_some()
    }

    /// Raw log text, empty when unavailable
    pub fn raw(&self) -> &str {
        self.raw.as_deref().unwrap_or_default()
    }
}

/// Read commit history since the latest tag, or all of it when untagged
///
/// Never fails: errors are logged and produce an unavailable [`History`].
pub fn extract_history(executor: &GitExecutor) -> History {
    let range = match executor.latest_tag() {
        Ok(Some(tag)) => HistoryRange::SinceTag(tag),
        Ok(None) => HistoryRange::Full,
        Err(e) => {
            tracing::warn!(error = %e, "could not look up latest tag, using full history");
            HistoryRange::Full
        }
    };

    let since_tag = match &range {
        HistoryRange::SinceTag(tag) => Some(tag.as_str()),
        HistoryRange::Full => None,
    };

    tracing::info!(%range, "reading git history");

    match executor.log_raw(since_tag) {
        Ok(raw) => History::available(range, raw),
        Err(e) => {
            tracing::error!(error = %e, "failed to read git history");
            History::unavailable(range)
        }
    }
}

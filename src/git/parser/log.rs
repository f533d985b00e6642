//! Log output parser (git log --name-only)

use chrono::{DateTime, FixedOffset};

use super::super::template::{FIELD_SEPARATOR, HEADER_FIELDS};
use crate::model::CommitRecord;

use super::Parser;

/// `--date=iso` output, the fallback when strict ISO is not available
const ISO_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Classification of a single log line
#[derive(Debug)]
pub(super) enum LogLine {
    /// A well-formed commit header
    Header(CommitRecord),
    /// Looks like a header but the hash or date is unusable
    MalformedHeader,
    /// A touched path
    Path,
}

/// Entry being accumulated while walking the log
enum Pending {
    Commit(CommitRecord),
    Skipped,
}

impl Parser {
    /// Parse `git log --name-only` output into commits
    ///
    /// Each commit is a header line (`hash|author|date|subject`) followed by
    /// its touched paths, one per line; commits are separated by blank lines.
    /// A header line directly after another header also starts a new commit,
    /// which is how git prints commits that touch no files. Once a commit has
    /// paths, every line up to the next blank line is a path, even one that
    /// contains the field separator.
    ///
    /// Malformed headers skip their whole entry, paths outside any entry are
    /// ignored, and commits without files are dropped.
    pub fn parse_log(output: &str) -> Vec<CommitRecord> {
        let mut commits = Vec::new();
        let mut pending: Option<Pending> = None;

        for line in output.lines() {
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                Self::finish_entry(pending.take(), &mut commits);
                continue;
            }

            if let Some(Pending::Commit(commit)) = pending.as_mut() {
                if commit.has_files() {
                    commit.files.push(line.to_string());
                    continue;
                }
            }

            match Self::parse_log_line(line) {
                LogLine::Header(commit) => {
                    Self::finish_entry(pending.take(), &mut commits);
                    pending = Some(Pending::Commit(commit));
                }
                LogLine::MalformedHeader => match pending {
                    // First path of a commit that happens to contain separators
                    Some(Pending::Commit(ref mut commit)) => commit.files.push(line.to_string()),
                    _ => {
                        Self::finish_entry(pending.take(), &mut commits);
                        tracing::debug!(line, "skipping entry with malformed header");
                        pending = Some(Pending::Skipped);
                    }
                },
                LogLine::Path => match pending {
                    Some(Pending::Commit(ref mut commit)) => commit.files.push(line.to_string()),
                    Some(Pending::Skipped) => {}
                    None => tracing::debug!(line, "ignoring path outside any commit"),
                },
            }
        }

        Self::finish_entry(pending, &mut commits);
        commits
    }

    /// Keep a finished entry if it is a commit with at least one file
    fn finish_entry(entry: Option<Pending>, commits: &mut Vec<CommitRecord>) {
        match entry {
            Some(Pending::Commit(commit)) if commit.has_files() => commits.push(commit),
            Some(Pending::Commit(commit)) => {
                tracing::debug!(hash = %commit.hash, "skipping commit without files");
            }
            Some(Pending::Skipped) | None => {}
        }
    }

    /// Classify one non-blank log line
    ///
    /// Fields: hash, author, date, subject. Only the first three separators
    /// split, so the subject may contain `|`.
    pub(super) fn parse_log_line(line: &str) -> LogLine {
        let fields: Vec<&str> = line.splitn(HEADER_FIELDS, FIELD_SEPARATOR).collect();

        let [hash, author, date, message] = fields[..] else {
            return LogLine::Path;
        };

        let hash = hash.trim();
        if hash.is_empty() {
            return LogLine::MalformedHeader;
        }

        match Self::parse_timestamp(date) {
            Some(timestamp) => LogLine::Header(CommitRecord {
                hash: hash.to_string(),
                author: author.to_string(),
                timestamp,
                message: message.to_string(),
                files: Vec::new(),
            }),
            None => LogLine::MalformedHeader,
        }
    }

    /// Parse a git author date
    ///
    /// Accepts `--date=iso-strict` (`2024-01-15T10:30:00+00:00`) and
    /// `--date=iso` (`2024-01-15 10:30:00 +0000`).
    pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
        let value = value.trim();
        DateTime::parse_from_rfc3339(value)
            .or_else(|_| DateTime::parse_from_str(value, ISO_DATE_FORMAT))
            .ok()
    }
}

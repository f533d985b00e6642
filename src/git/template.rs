//! git pretty-format definitions for stable output parsing
//!
//! These formats ensure consistent, parseable output from git regardless of
//! user configuration.

/// Separator used between header fields in log output
///
/// Hashes and ISO dates never contain it. The subject comes last so a `|`
/// inside it survives (the parser splits on the first three separators only).
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields in a commit header line
pub const HEADER_FIELDS: usize = 4;

/// Formats for git commands
pub struct Templates;

impl Templates {
    /// Pretty format for `git log`
    ///
    /// Fields (separated by `|`):
    /// 1. abbreviated commit hash
    /// 2. author name
    /// 3. author date (format chosen by `--date`)
    /// 4. subject (first line of the message)
    ///
    /// Combined with `--name-only`, git prints the touched paths one per line
    /// under each header and a blank line between commits.
    pub fn log() -> &'static str {
        concat!("--pretty=format:", "%h", "|", "%an", "|", "%ad", "|", "%s")
    }
}

//! git-changelog - Markdown changelog from git history
//!
//! Lists the commits since the latest tag (or the whole history when the
//! repository has no tag), files each touched path under its parent
//! directory, and writes one report section per directory.
//!
//! This library provides:
//! - [`changelog`]: Categorization, rendering, writing and the full pipeline
//! - [`config`]: Run configuration
//! - [`git`]: git command execution and parsing
//! - [`logging`]: Console logger for the binary
//! - [`model`]: Domain models

pub mod changelog;
pub mod config;
pub mod git;
pub mod logging;
pub mod model;

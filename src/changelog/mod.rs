//! Changelog pipeline
//!
//! History extraction, categorization, rendering and writing, run once per
//! invocation by [`generate`].

mod categorize;
mod locale;
mod render;
mod writer;

pub use categorize::{Categorized, categorize, categorize_commits};
pub use locale::Locale;
pub use render::{
    DisplayZone, RenderOptions, Report, Section, build_report, group_commits, render,
    render_report,
};
pub use writer::{WriteError, write_report};

use std::path::PathBuf;

use chrono::Local;

use crate::config::Config;
use crate::git::{GitExecutor, HistoryRange, extract_history};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Where the report was written
    pub path: PathBuf,
    /// History the report covers
    pub range: HistoryRange,
    /// Whether git produced a log (false means the report is the empty one)
    pub history_available: bool,
    /// Number of report sections
    pub categories: usize,
}

/// Run the whole pipeline with `config`
///
/// Extraction problems degrade to an empty report; only a failed write is an
/// error.
pub fn generate(config: &Config) -> Result<Generated, WriteError> {
    tracing::info!("generating changelog");

    let executor = config
        .repo_path
        .clone()
        .map_or_else(GitExecutor::new, GitExecutor::with_repo_path);

    let history = extract_history(&executor);
    let categorized = categorize(history.raw());
    tracing::debug!(categories = categorized.len(), "categorized changes");

    let markdown = render(
        &categorized,
        &config.render_options(),
        Local::now().fixed_offset(),
    );

    let path = match write_report(&config.output_path, &markdown) {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(error = %e, "could not write changelog");
            return Err(e);
        }
    };
    tracing::info!(path = %path.display(), "changelog generated");

    Ok(Generated {
        path,
        history_available: history.is_available(),
        range: history.range,
        categories: categorized.len(),
    })
}

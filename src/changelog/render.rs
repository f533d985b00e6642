//! Markdown rendering of categorized changes

use chrono::{DateTime, FixedOffset, Local, Utc};
use std::collections::HashMap;

use super::categorize::Categorized;
use super::locale::Locale;
use crate::model::{Category, CategorizedEntry, CommitGroup};

/// Time zone dates are shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The machine's local zone
    #[default]
    Local,
    Utc,
    /// Each timestamp's own offset, as recorded by git
    Commit,
}

/// Presentation settings for [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub locale: Locale,
    pub zone: DisplayZone,
}

impl RenderOptions {
    /// Format a timestamp in the configured zone and language
    pub fn format_timestamp(&self, timestamp: &DateTime<FixedOffset>) -> String {
        match self.zone {
            DisplayZone::Local => self
                .locale
                .format_datetime(&timestamp.with_timezone(&Local)),
            DisplayZone::Utc => self.locale.format_datetime(&timestamp.with_timezone(&Utc)),
            DisplayZone::Commit => self.locale.format_datetime(timestamp),
        }
    }
}

/// One section of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    /// Newest first
    pub commits: Vec<CommitGroup>,
}

/// Deduplicated, sorted view of all changes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// In lexicographic category order
    pub sections: Vec<Section>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Collapse a category's entries into one group per commit, newest first
///
/// Groups keep the order their hash was first seen in when timestamps tie.
pub fn group_commits(entries: &[CategorizedEntry]) -> Vec<CommitGroup> {
    let mut groups: Vec<CommitGroup> = Vec::new();
    let mut index_by_hash: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match index_by_hash.get(entry.hash.as_str()) {
            Some(&index) => groups[index].add_file(&entry.file),
            None => {
                index_by_hash.insert(&entry.hash, groups.len());
                groups.push(CommitGroup::from_entry(entry));
            }
        }
    }

    // sort_by is stable
    groups.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    groups
}

/// Build the report sections from categorized entries
pub fn build_report(categorized: &Categorized) -> Report {
    Report {
        sections: categorized
            .iter()
            .map(|(category, entries)| Section {
                category: category.clone(),
                commits: group_commits(entries),
            })
            .collect(),
    }
}

/// Render categorized changes as a Markdown document
///
/// `generated_at` is printed under the title. The output depends only on the
/// arguments, so equal inputs give byte-identical documents.
pub fn render(
    categorized: &Categorized,
    options: &RenderOptions,
    generated_at: DateTime<FixedOffset>,
) -> String {
    render_report(&build_report(categorized), options, generated_at)
}

/// Render an already built report
pub fn render_report(
    report: &Report,
    options: &RenderOptions,
    generated_at: DateTime<FixedOffset>,
) -> String {
    let locale = options.locale;

    if report.is_empty() {
        return format!("# {}\n\n{}\n", locale.title(), locale.no_changes());
    }

    let mut markdown = format!("# {}\n\n", locale.title());
    markdown.push_str(&format!(
        "*{}: {}*\n\n",
        locale.generated(),
        options.format_timestamp(&generated_at)
    ));

    for section in &report.sections {
        markdown.push_str(&format!("## {}\n\n", section.category));

        for commit in &section.commits {
            markdown.push_str(&format!(
                "- **{}** ({})\n",
                commit.message,
                options.format_timestamp(&commit.timestamp)
            ));
            markdown.push_str(&format!(
                "  - {}: {}\n",
                locale.files(),
                commit.files.join(", ")
            ));
            markdown.push_str(&format!("  - {}: {}\n", locale.author(), commit.author));
            markdown.push_str(&format!("  - {}: `{}`\n\n", locale.commit(), commit.hash));
        }
    }

    markdown
}

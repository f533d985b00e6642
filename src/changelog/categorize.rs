//! Grouping of commits by the directory of each touched file

use std::collections::BTreeMap;

use crate::git::parser::Parser;
use crate::model::{Category, CategorizedEntry, CommitRecord};

/// Per-file entries filed by category, in log encounter order
///
/// Iterating yields categories in lexicographic label order.
pub type Categorized = BTreeMap<Category, Vec<CategorizedEntry>>;

/// Parse raw `git log` output and group its files by category
///
/// Empty or whitespace-only input produces an empty mapping.
pub fn categorize(raw: &str) -> Categorized {
    if raw.trim().is_empty() {
        return Categorized::new();
    }
    categorize_commits(&Parser::parse_log(raw))
}

/// Group already parsed commits by category
///
/// Every touched path yields one entry. Commits without files contribute
/// nothing.
pub fn categorize_commits(commits: &[CommitRecord]) -> Categorized {
    let mut categorized = Categorized::new();

    for commit in commits {
        for path in &commit.files {
            categorized
                .entry(Category::of(path))
                .or_default()
                .push(CategorizedEntry::new(commit, path));
        }
    }

    categorized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(categorize("").is_empty());
        assert!(categorize("   \n\t\n").is_empty());
    }

    #[test]
    fn test_groups_by_parent_directory() {
        let raw = "abc123|Jane|2024-01-15T10:30:00+00:00|Mixed\n\
                   README.md\n\
                   src/app/x.js\n\
                   src/main.rs";

        let categorized = categorize(raw);
        let labels: Vec<&str> = categorized.keys().map(Category::label).collect();
        assert_eq!(labels, vec!["Root", "src", "src/app"]);

        let app = &categorized[&Category::of("src/app/x.js")];
        assert_eq!(app.len(), 1);
        assert_eq!(app[0].file, "x.js");
        assert_eq!(categorized[&Category::root()][0].file, "README.md");
    }

    #[test]
    fn test_keeps_encounter_order_without_dedup() {
        let raw = "aaa111|Jane|2024-01-14T10:30:00+00:00|Older\n\
                   src/a.rs\n\
                   \n\
                   bbb222|Jane|2024-01-15T10:30:00+00:00|Newer\n\
                   src/a.rs\n\
                   src/b.rs";

        let categorized = categorize(raw);
        let src = &categorized[&Category::of("src/a.rs")];
        let hashes: Vec<&str> = src.iter().map(|e| e.hash.as_str()).collect();
        assert_eq!(hashes, vec!["aaa111", "bbb222", "bbb222"]);
    }

    #[test]
    fn test_only_malformed_entries() {
        let raw = "aaa111|Jane|garbage|Broken\nsrc/a.rs\n\nnot a header\n";
        assert!(categorize(raw).is_empty());
    }
}

//! Report category (section) model

use std::fmt;

/// Section key of the report: a file's parent directory
///
/// Files at the repository root share the [`Category::ROOT_LABEL`] section.
/// Categories order by label, byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(String);

impl Category {
    /// Label of the section holding files without a directory component
    pub const ROOT_LABEL: &'static str = "Root";

    /// The category for files at the repository root
    pub fn root() -> Self {
        Self(Self::ROOT_LABEL.to_string())
    }

    /// Category of a path as git prints it (`/`-separated, repo-relative)
    ///
    /// `src/app/x.js` belongs to `src/app`, `README.md` to `Root`.
    pub fn of(path: &str) -> Self {
        match path.rsplit_once('/') {
            Some((dir, _)) if !dir.is_empty() => Self(dir.to_string()),
            _ => Self::root(),
        }
    }

    /// Section label
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last component of a `/`-separated path
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

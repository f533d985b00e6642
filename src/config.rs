//! Run configuration
//!
//! Everything that shapes a run lives in one [`Config`] value that is passed
//! down explicitly. [`Config::default`] is what the binary uses.

use std::path::PathBuf;

use crate::changelog::{DisplayZone, Locale, RenderOptions};

/// Default report location, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "CHANGELOG.md";

/// Settings for one changelog run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Report destination, overwritten on every run
    pub output_path: PathBuf,

    /// Language of labels and dates
    pub locale: Locale,

    /// Zone dates are displayed in
    pub display_zone: DisplayZone,

    /// Repository to read (None = current directory)
    pub repo_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            locale: Locale::default(),
            display_zone: DisplayZone::default(),
            repo_path: None,
        }
    }
}

impl Config {
    /// Presentation settings for the renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            locale: self.locale,
            zone: self.display_zone,
        }
    }
}

//! git-changelog
//!
//! Binary entry point: writes `CHANGELOG.md` for the repository in the
//! current directory.

use git_changelog::changelog;
use git_changelog::config::Config;
use git_changelog::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::setup_logger();

    let config = Config::default();
    changelog::generate(&config)?;

    Ok(())
}

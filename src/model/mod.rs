//! Data models for the changelog
//!
//! Plain data structures for commits read from git and the per-directory
//! views the report is built from.

mod category;
mod commit;
mod entry;

pub use category::Category;
pub use commit::CommitRecord;
pub use entry::{CategorizedEntry, CommitGroup};

//! Git operations: change discovery, diffs, staging and commits.

pub mod changes;
pub mod executor;

pub use changes::{ChangeSource, ChangedFile, DiffWarning, FileDiff, FileStatus, new_file_diff};
pub use executor::{GitCli, Vcs};

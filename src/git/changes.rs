//! Change discovery and diff collection from the working tree.

use std::fmt;

use tracing::{debug, warn};

use crate::error::GitError;

use super::executor::Vcs;

/// Separator between file entries in a diff bundle.
const BUNDLE_SEPARATOR: &str = "\n\n";

/// Status of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Untracked,
    Modified,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Untracked => write!(f, "Untracked"),
            FileStatus::Modified => write!(f, "Modified"),
        }
    }
}

/// A file that was changed in the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path relative to the repository root.
    pub path: String,
    pub status: FileStatus,
}

impl ChangedFile {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Why a file was left out of the diff bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffWarning {
    pub path: String,
    pub reason: String,
}

impl fmt::Display for DiffWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not get diff for {}: {}", self.path, self.reason)
    }
}

/// Outcome of diffing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDiff {
    /// Diff text ready for the bundle.
    Patch(String),
    /// Nothing to show (identical content or an empty file).
    Empty,
    /// The file could not be diffed; the bundle continues without it.
    Skipped(DiffWarning),
}

/// Discovers working-tree changes and turns them into diffs and commits.
pub struct ChangeSource<V> {
    vcs: V,
}

impl<V: Vcs> ChangeSource<V> {
    pub fn new(vcs: V) -> Self {
        Self { vcs }
    }

    /// List untracked and modified files in scan order.
    pub fn discover_changed_files(&self) -> Result<Vec<ChangedFile>, GitError> {
        let files = self.vcs.list_changed()?;
        debug!("Discovered {} changed files", files.len());
        Ok(files)
    }

    /// Diff a single file.
    ///
    /// Tracking is checked again here instead of trusting the discovery
    /// status, since the working tree may have changed in between.
    pub fn diff_file(&self, file: &ChangedFile) -> FileDiff {
        let tracked = match self.vcs.is_tracked(&file.path) {
            Ok(tracked) => tracked,
            Err(e) => return skipped(file, e.to_string()),
        };

        if tracked {
            match self.vcs.diff_head(&file.path) {
                Ok(diff) if diff.trim().is_empty() => FileDiff::Empty,
                Ok(diff) => FileDiff::Patch(format!("File: {}\n{}", file.path, diff)),
                Err(e) => skipped(file, e.to_string()),
            }
        } else {
            match self.vcs.read_file(&file.path) {
                Ok(content) if content.trim().is_empty() => FileDiff::Empty,
                Ok(content) => FileDiff::Patch(new_file_diff(&file.path, &content)),
                Err(e) => skipped(file, e.to_string()),
            }
        }
    }

    /// Build the diff bundle for `files`, in order, one file at a time.
    ///
    /// Files that cannot be diffed are logged and left out.
    pub fn compute_diffs(&self, files: &[ChangedFile]) -> String {
        let mut entries = Vec::with_capacity(files.len());

        for file in files {
            match self.diff_file(file) {
                FileDiff::Patch(text) => entries.push(text),
                FileDiff::Empty => debug!("No diff content for {}", file.path),
                FileDiff::Skipped(warning) => warn!("{}", warning),
            }
        }

        entries.join(BUNDLE_SEPARATOR)
    }

    /// Stage exactly `files` and commit them with `message`.
    ///
    /// Nothing is unstaged if the commit fails.
    pub fn stage_and_commit(&self, files: &[ChangedFile], message: &str) -> Result<(), GitError> {
        let paths: Vec<String> = files.iter().map(|f| f.path.clone()).collect();
        self.vcs.stage(&paths)?;
        self.vcs.commit(message)
    }
}

/// Render file content as a diff where every line is an addition.
pub fn new_file_diff(path: &str, content: &str) -> String {
    let added: Vec<String> = content.split('\n').map(|line| format!("+{line}")).collect();
    format!("New file: {path}\n+++ {path}\n{}", added.join("\n"))
}

fn skipped(file: &ChangedFile, reason: String) -> FileDiff {
    FileDiff::Skipped(DiffWarning {
        path: file.path.clone(),
        reason,
    })
}

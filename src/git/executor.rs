//! The git boundary: every call shells out to the system `git` binary,
//! inheriting the user's git config, hooks and credential store.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

use super::changes::{ChangedFile, FileStatus};

/// Version-control and working-tree operations used by the change source.
///
/// This abstraction allows scripting git in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs {
    /// List untracked (ignore rules respected) and modified paths.
    fn list_changed(&self) -> Result<Vec<ChangedFile>, GitError>;

    /// Whether `path` is known to the index.
    fn is_tracked(&self, path: &str) -> Result<bool, GitError>;

    /// Unified diff of `path` against HEAD.
    fn diff_head(&self, path: &str) -> Result<String, GitError>;

    /// Read a working-tree file as text.
    fn read_file(&self, path: &str) -> std::io::Result<String>;

    /// Stage exactly the given paths.
    fn stage(&self, paths: &[String]) -> Result<(), GitError>;

    /// Commit the index with a literal message.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}

/// [`Vcs`] backed by the `git` executable, run from the repository root.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Locate the enclosing repository of `start` and use its working
    /// directory as the root for all commands.
    pub fn discover(start: &Path) -> Result<Self, GitError> {
        let repo = Repository::discover(start)
            .map_err(|e| GitError::Unavailable(format!("Not a git repository: {}", e.message())))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| GitError::Unavailable("Bare repository not supported".into()))?;
        Ok(Self::new(workdir))
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git and return its raw output. Only spawn failures are errors here;
    /// callers decide what a non-zero exit means.
    fn run_git(&self, args: &[&str], operation: &'static str) -> Result<Output, GitError> {
        debug!("git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::SpawnFailed { operation, source })
    }
}

impl Vcs for GitCli {
    fn list_changed(&self) -> Result<Vec<ChangedFile>, GitError> {
        let output = self
            .run_git(
                &["ls-files", "-z", "-t", "--others", "--modified", "--exclude-standard"],
                "status",
            )
            .map_err(|e| GitError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(GitError::Unavailable(stderr_text(&output)));
        }

        Ok(parse_ls_files(&String::from_utf8_lossy(&output.stdout)))
    }

    fn is_tracked(&self, path: &str) -> Result<bool, GitError> {
        let output = self.run_git(&["ls-files", "--error-unmatch", "--", path], "ls-files")?;
        Ok(output.status.success())
    }

    fn diff_head(&self, path: &str) -> Result<String, GitError> {
        let output = self.run_git(&["diff", "HEAD", "--", path], "diff")?;

        if !output.status.success() {
            return Err(GitError::DiffFailed {
                path: path.to_string(),
                stderr: stderr_text(&output),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn read_file(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.workdir.join(path))
    }

    fn stage(&self, paths: &[String]) -> Result<(), GitError> {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));

        let output = self
            .run_git(&args, "add")
            .map_err(|e| GitError::StageFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(GitError::StageFailed(stderr_text(&output)));
        }

        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        let output = self
            .run_git(&["commit", "-m", message], "commit")
            .map_err(|e| GitError::CommitFailed(e.to_string()))?;

        if !output.status.success() {
            // Some failures (nothing to commit, hook output) only write to stdout.
            let stderr = stderr_text(&output);
            let detail = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(GitError::CommitFailed(detail));
        }

        Ok(())
    }
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// Parse NUL-separated `git ls-files -t` output.
///
/// Each entry is a one-character tag, a space, then the path. `?` marks an
/// untracked file; every other tag is a change to a tracked file.
pub(crate) fn parse_ls_files(output: &str) -> Vec<ChangedFile> {
    output
        .split('\0')
        .filter_map(|entry| {
            let mut chars = entry.chars();
            let tag = chars.next()?;
            let path = chars.as_str().strip_prefix(' ')?;
            if path.is_empty() {
                return None;
            }

            let status = if tag == '?' {
                FileStatus::Untracked
            } else {
                FileStatus::Modified
            };

            Some(ChangedFile {
                path: path.to_string(),
                status,
            })
        })
        .collect()
}

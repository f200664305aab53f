//! splitcommit - A CLI tool that commits source and test changes separately.
//!
//! # Overview
//!
//! splitcommit finds uncommitted changes in a git working tree, splits them
//! into source files and test files, asks a language model for a conventional
//! commit message for the source changes, derives a companion message for the
//! tests, and after one confirmation creates the source commit followed by the
//! test commit.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod prompter;
pub mod setup;

// Re-export commonly used types
pub use commit::{CommitPlan, CommitWorkflow, FileCategories, RunOutcome, Stage};
pub use config::Config;
pub use error::{GitError, LlmError, SetupError, WorkflowError};
pub use git::{ChangeSource, ChangedFile, FileStatus, GitCli, Vcs};
pub use prompter::{Prompter, TerminalPrompter};

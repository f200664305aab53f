//! Error types for splitcommit modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to get git status: {0}")]
    Unavailable(String),

    #[error("Failed to stage files: {0}")]
    StageFailed(String),

    #[error("Failed to commit: {0}")]
    CommitFailed(String),

    #[error("Failed to diff {path}: {stderr}")]
    DiffFailed { path: String, stderr: String },

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the commit message generation call.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("OPENAI_API_KEY environment variable is required. Run with --setup to configure it")]
    CredentialsMissing,

    #[error("Request to the language model failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Language model API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Language model returned an empty response")]
    EmptyResponse,
}

/// Errors that abort a commit run.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Generation(#[from] LlmError),

    /// The source commit was created but the test commit failed.
    /// The source commit is left in place.
    #[error("Created commit \"{source_message}\" but the test commit failed: {error}")]
    PartialCommit {
        source_message: String,
        #[source]
        error: GitError,
    },
}

/// Errors from interactive credential setup.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Invalid API key provided")]
    InvalidKey,

    #[error("Could not detect home directory")]
    NoHomeDirectory,

    #[error("Setup cancelled")]
    Cancelled,

    #[error("Failed to read input: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadProfileFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Collapse a multi-line error message onto one line for the terminal.
/// The error values themselves keep HTTP bodies and git stderr verbatim.
pub fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

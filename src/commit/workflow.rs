//! The commit run: discover, categorize, generate, confirm, then commit
//! source files and test files as two sequential commits.

use std::fmt;

use tracing::debug;

use crate::error::{GitError, WorkflowError};
use crate::git::{ChangeSource, Vcs};
use crate::prompter::Prompter;

use super::categorize::{FileCategories, categorize};
use super::confirm::{ask_confirmation, print_summary};
use super::message::{MessageGenerator, derive_test_message};
use super::plan::CommitPlan;

/// Workflow states. `Done`, `Cancelled` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Discovering,
    Categorizing,
    GeneratingMessages,
    Summarizing,
    Confirming,
    CommittingSource,
    CommittingTest,
    Done,
    Cancelled,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No changed files were found.
    Clean,
    /// Files were found but neither group had anything to commit.
    NothingToCommit,
    /// The user declined; nothing was staged.
    Cancelled,
    /// Every planned commit was created.
    Committed { source: bool, test: bool },
}

/// Runs the two-commit workflow against a change source, a message
/// generator and a prompter.
pub struct CommitWorkflow<V, G, P> {
    changes: ChangeSource<V>,
    generator: G,
    prompter: P,
    stages: Vec<Stage>,
}

impl<V, G, P> CommitWorkflow<V, G, P>
where
    V: Vcs,
    G: MessageGenerator,
    P: Prompter,
{
    pub fn new(changes: ChangeSource<V>, generator: G, prompter: P) -> Self {
        Self {
            changes,
            generator,
            prompter,
            stages: vec![Stage::Idle],
        }
    }

    /// Every stage entered so far, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The most recently entered stage.
    pub fn current_stage(&self) -> Stage {
        self.stages.last().copied().unwrap_or(Stage::Idle)
    }

    /// Run the workflow once. Errors leave the workflow in [`Stage::Failed`];
    /// commits created before the error are kept.
    pub async fn run(&mut self) -> Result<RunOutcome, WorkflowError> {
        let result = self.run_stages().await;
        if result.is_err() {
            self.enter(Stage::Failed);
        }
        result
    }

    async fn run_stages(&mut self) -> Result<RunOutcome, WorkflowError> {
        // ── Discover ──
        self.enter(Stage::Discovering);
        println!("Detecting changes...");

        let files = self.changes.discover_changed_files()?;
        if files.is_empty() {
            println!("No changes detected. Working directory is clean.");
            self.enter(Stage::Done);
            return Ok(RunOutcome::Clean);
        }

        // ── Categorize ──
        self.enter(Stage::Categorizing);
        let categories = categorize(&files);
        print_detected_changes(&categories);

        if categories.is_empty() {
            println!("No files to commit.");
            self.enter(Stage::Done);
            return Ok(RunOutcome::NothingToCommit);
        }

        let FileCategories {
            non_test_files,
            test_files,
        } = categories;

        // ── Generate messages ──
        let commit_message = if non_test_files.is_empty() {
            String::new()
        } else {
            self.enter(Stage::GeneratingMessages);
            println!();
            println!("Generating commit message...");

            let diffs = self.changes.compute_diffs(&non_test_files);
            let message = self.generator.generate_source_message(&diffs).await?;
            println!("AI suggested: \"{}\"", message);
            message
        };

        let test_commit_message = if test_files.is_empty() {
            String::new()
        } else {
            derive_test_message(&commit_message)
        };

        let plan = CommitPlan {
            non_test_files,
            test_files,
            commit_message,
            test_commit_message,
        };

        // ── Summarize and confirm ──
        self.enter(Stage::Summarizing);
        print_summary(&plan);

        self.enter(Stage::Confirming);
        if !ask_confirmation(&mut self.prompter) {
            println!("Commit cancelled by user.");
            self.enter(Stage::Cancelled);
            return Ok(RunOutcome::Cancelled);
        }

        // ── Commit ──
        if plan.has_source_commit() {
            self.enter(Stage::CommittingSource);
            self.changes
                .stage_and_commit(&plan.non_test_files, &plan.commit_message)?;
            println!("  [DONE] Committed non-test files: {}", plan.commit_message);
        }

        if plan.has_test_commit() {
            self.enter(Stage::CommittingTest);
            self.changes
                .stage_and_commit(&plan.test_files, &plan.test_commit_message)
                .map_err(|error| partial_commit_error(&plan, error))?;
            println!("  [DONE] Committed test files: {}", plan.test_commit_message);
        }

        self.enter(Stage::Done);
        println!();
        println!("Done! Created {} commit(s) successfully.", plan.commit_count());

        Ok(RunOutcome::Committed {
            source: plan.has_source_commit(),
            test: plan.has_test_commit(),
        })
    }

    fn enter(&mut self, stage: Stage) {
        debug!("Workflow stage: {} -> {}", self.current_stage(), stage);
        self.stages.push(stage);
    }
}

/// A failed test commit is only partial when a source commit was made first.
fn partial_commit_error(plan: &CommitPlan, error: GitError) -> WorkflowError {
    if plan.has_source_commit() {
        WorkflowError::PartialCommit {
            source_message: plan.commit_message.clone(),
            error,
        }
    } else {
        WorkflowError::Git(error)
    }
}

fn print_detected_changes(categories: &FileCategories) {
    println!("Detected changes:");

    if !categories.non_test_files.is_empty() {
        println!("  Non-test files:");
        for file in &categories.non_test_files {
            println!("    - {}", file.path);
        }
    }

    if !categories.test_files.is_empty() {
        println!("  Test files:");
        for file in &categories.test_files {
            println!("    - {}", file.path);
        }
    }
}

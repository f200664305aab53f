//! Commit summary and the single yes/no confirmation.

use std::fmt::Write;

use tracing::warn;

use crate::git::ChangedFile;
use crate::prompter::Prompter;

use super::plan::CommitPlan;

pub const CONFIRM_PROMPT: &str = "Do you want to proceed with these commits? (y/N)";

/// Render the plan as a human-readable summary. Output depends only on the plan.
pub fn render_summary(plan: &CommitPlan) -> String {
    let mut out = String::from("Commit Summary:\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');

    let groups = [
        (&plan.non_test_files, &plan.commit_message),
        (&plan.test_files, &plan.test_commit_message),
    ];

    let mut ordinal = 0;
    for (files, message) in groups {
        if files.is_empty() {
            continue;
        }
        ordinal += 1;
        let label = if ordinal == 1 { "First" } else { "Second" };
        write_group(&mut out, label, files, message);
    }

    out
}

fn write_group(out: &mut String, label: &str, files: &[ChangedFile], message: &str) {
    let noun = if files.len() == 1 { "file" } else { "files" };
    let _ = writeln!(out, "\n{} commit ({} {}):", label, files.len(), noun);
    let _ = writeln!(out, "  Message: \"{}\"", message);
    let _ = writeln!(out, "  Files:");
    for file in files {
        let _ = writeln!(out, "    - {} ({})", file.path, file.status);
    }
}

/// `y` or `yes`, ignoring case and surrounding whitespace. Everything else,
/// including an empty answer, declines.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

/// Print the summary of `plan`.
pub fn print_summary(plan: &CommitPlan) {
    println!();
    print!("{}", render_summary(plan));
    println!();
}

/// Ask once whether to create the commits.
///
/// An input failure counts as declining.
pub fn ask_confirmation<P: Prompter + ?Sized>(prompter: &mut P) -> bool {
    match prompter.read_line(CONFIRM_PROMPT) {
        Ok(answer) => is_affirmative(&answer),
        Err(e) => {
            warn!("Could not read confirmation: {}", e);
            false
        }
    }
}

//! Prompt construction for commit message generation.

/// Fixed instruction sent as the system message.
pub const COMMIT_INSTRUCTIONS: &str = "Analyze these git diffs and generate a conventional commit message. Use format: type: description

Rules:
- Use conventional commit types: feat, fix, refactor, docs, style, test, chore
- Keep description concise and clear
- Focus on what changed and why
- Use present tense
- Reply with a single line";

/// Build the user message carrying the diff bundle.
pub fn build_commit_prompt(diffs: &str) -> String {
    format!("Diffs:\n{diffs}\n\nGenerate only the commit message, nothing else:")
}

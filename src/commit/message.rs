//! Commit message generation via the LLM, and the derived test-commit message.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex_lite::Regex;
use tracing::debug;

use crate::error::LlmError;
use crate::llm::{COMMIT_INSTRUCTIONS, OpenAiClient, build_commit_prompt};

/// Feature name used when the source message has no `type: ` prefix.
pub const FALLBACK_FEATURE_NAME: &str = "recent changes";

static CONVENTIONAL_SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z]+:\s*(.+)$").expect("conventional subject pattern must compile")
});

/// Produces the commit message for the source group.
///
/// This abstraction allows mocking the model call in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Generate a single-line `type: description` message from a diff bundle.
    async fn generate_source_message(&self, diffs: &str) -> Result<String, LlmError>;
}

/// [`MessageGenerator`] backed by the chat-completions API.
pub struct LlmMessageGenerator {
    client: OpenAiClient,
    debug: bool,
}

impl LlmMessageGenerator {
    pub fn new(client: OpenAiClient, debug: bool) -> Self {
        Self { client, debug }
    }
}

#[async_trait]
impl MessageGenerator for LlmMessageGenerator {
    async fn generate_source_message(&self, diffs: &str) -> Result<String, LlmError> {
        let prompt = build_commit_prompt(diffs);

        if self.debug {
            debug!("Commit prompt:\n{}\n{}", COMMIT_INSTRUCTIONS, prompt);
        } else {
            debug!("Commit prompt length: {} chars", prompt.len());
        }

        self.client.complete(COMMIT_INSTRUCTIONS, &prompt).await
    }
}

/// Derive the test-commit message from the source commit message.
///
/// `feat: add login` becomes `chore: test files for add login`. Anything not
/// shaped like `type: description`, including the empty string, falls back
/// to [`FALLBACK_FEATURE_NAME`]. Never fails.
pub fn derive_test_message(source_message: &str) -> String {
    let feature_name = CONVENTIONAL_SUBJECT
        .captures(source_message)
        .and_then(|caps| caps.get(1))
        .map_or(FALLBACK_FEATURE_NAME, |m| m.as_str());

    format!("chore: test files for {feature_name}")
}

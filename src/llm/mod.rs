//! Language model client and prompt construction.

pub mod openai;
pub mod prompt;

pub use openai::OpenAiClient;
pub use prompt::{COMMIT_INSTRUCTIONS, build_commit_prompt};

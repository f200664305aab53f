//! Split commits: source changes first, test changes second.

pub mod categorize;
pub mod confirm;
pub mod message;
pub mod plan;
pub mod workflow;

pub use categorize::{FileCategories, categorize, is_test_file};
pub use confirm::{CONFIRM_PROMPT, ask_confirmation, is_affirmative, print_summary, render_summary};
pub use message::{
    FALLBACK_FEATURE_NAME, LlmMessageGenerator, MessageGenerator, derive_test_message,
};
pub use plan::CommitPlan;
pub use workflow::{CommitWorkflow, RunOutcome, Stage};

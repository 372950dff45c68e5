//! Commit message types and prompt construction.

pub mod message;
pub mod prompt;

pub use message::{CommitMessage, CommitType, ConventionalHeader, RECOGNIZED_PREFIXES};
pub use prompt::{MESSAGE_LANGUAGE, build_commit_prompt, sanitize_diff};

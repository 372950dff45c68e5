//! gcauto - A CLI tool that drafts conventional commit messages from staged changes.
//!
//! # Overview
//!
//! gcauto reads `git diff --staged`, asks an AI command-line tool (Claude Code,
//! Gemini CLI, or Codex) to write a Conventional Commits message for it, shows
//! the result, and runs `git commit` once the user confirms.

pub mod app;
pub mod backend;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod process;

// Re-export commonly used types
pub use app::{Outcome, run};
pub use backend::{BackendFactory, BackendKind, CliBackendFactory, CommitBackend};
pub use commit::{CommitMessage, CommitType};
pub use error::{ConfigError, GcautoError, ToolError};
pub use git::{GitCli, GitClient, StagedDiff};
pub use process::{CapturedOutput, ProcessRunner, SystemRunner};

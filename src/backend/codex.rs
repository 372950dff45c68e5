//! Codex CLI backend.

use std::sync::Arc;

use async_trait::async_trait;

use crate::commit::{CommitMessage, build_commit_prompt};
use crate::error::ToolError;
use crate::git::StagedDiff;
use crate::process::ProcessRunner;

use super::{CommitBackend, invoke};

/// Generates messages with `codex exec <prompt>`.
///
/// Codex writes its progress log to stderr and only the final answer to
/// stdout, so no noise filtering is needed.
pub struct CodexBackend {
    runner: Arc<dyn ProcessRunner>,
    program: String,
}

impl CodexBackend {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            runner,
            program: "codex".to_string(),
        }
    }

    /// Use a different executable (name or path) in place of `codex`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl CommitBackend for CodexBackend {
    fn name(&self) -> &'static str {
        "codex"
    }

    async fn generate_commit_message(
        &self,
        diff: &StagedDiff,
    ) -> Result<CommitMessage, ToolError> {
        let prompt = build_commit_prompt(diff);
        invoke(
            self.runner.as_ref(),
            &self.program,
            vec!["exec".to_string(), prompt],
            &[],
        )
        .await
    }
}

//! Claude Code CLI backend.

use std::sync::Arc;

use async_trait::async_trait;

use crate::commit::{CommitMessage, build_commit_prompt};
use crate::error::ToolError;
use crate::git::StagedDiff;
use crate::process::ProcessRunner;

use super::{CommitBackend, invoke};

/// Generates messages with `claude -p <prompt>`.
pub struct ClaudeBackend {
    runner: Arc<dyn ProcessRunner>,
    program: String,
}

impl ClaudeBackend {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            runner,
            program: "claude".to_string(),
        }
    }

    /// Use a different executable (name or path) in place of `claude`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl CommitBackend for ClaudeBackend {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn generate_commit_message(
        &self,
        diff: &StagedDiff,
    ) -> Result<CommitMessage, ToolError> {
        let prompt = build_commit_prompt(diff);
        invoke(
            self.runner.as_ref(),
            &self.program,
            vec!["-p".to_string(), prompt],
            &[],
        )
        .await
    }
}

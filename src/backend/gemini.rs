//! Gemini CLI backend.

use std::sync::Arc;

use async_trait::async_trait;

use crate::commit::{CommitMessage, build_commit_prompt};
use crate::error::ToolError;
use crate::git::StagedDiff;
use crate::process::ProcessRunner;

use super::{CommitBackend, invoke};

/// Lines the Gemini CLI prints to stdout that are not part of the answer.
pub const GEMINI_NOISE: &[&str] = &["Loaded cached credentials."];

/// Generates messages with `gemini -p <prompt>`.
pub struct GeminiBackend {
    runner: Arc<dyn ProcessRunner>,
    program: String,
}

impl GeminiBackend {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            runner,
            program: "gemini".to_string(),
        }
    }

    /// Use a different executable (name or path) in place of `gemini`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl CommitBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
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
            GEMINI_NOISE,
        )
        .await
    }
}

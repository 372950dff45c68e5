//! AI CLI backends that turn a staged diff into a commit message.

pub mod claude;
pub mod codex;
pub mod gemini;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::commit::CommitMessage;
use crate::error::{ConfigError, ToolError};
use crate::git::StagedDiff;
use crate::process::ProcessRunner;

pub use claude::ClaudeBackend;
pub use codex::CodexBackend;
pub use gemini::GeminiBackend;

/// Backend used when none is configured.
pub const DEFAULT_BACKEND: &str = "claude";

/// Trait for generating a commit message from a diff.
///
/// Implementations return the cleaned output verbatim; they do not check the
/// conventional commit prefix.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitBackend: Send + Sync {
    /// Provider name, used in status output.
    fn name(&self) -> &'static str;

    async fn generate_commit_message(&self, diff: &StagedDiff)
    -> Result<CommitMessage, ToolError>;
}

/// Supported AI CLIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Claude,
    Gemini,
    Codex,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Claude => "claude",
            BackendKind::Gemini => "gemini",
            BackendKind::Codex => "codex",
        }
    }

    /// Construct the backend for this kind.
    pub fn build(self, runner: Arc<dyn ProcessRunner>) -> Box<dyn CommitBackend> {
        match self {
            BackendKind::Claude => Box::new(ClaudeBackend::new(runner)),
            BackendKind::Gemini => Box::new(GeminiBackend::new(runner)),
            BackendKind::Codex => Box::new(CodexBackend::new(runner)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(BackendKind::Claude),
            "gemini" => Ok(BackendKind::Gemini),
            "codex" => Ok(BackendKind::Codex),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Resolves a backend name to a backend instance.
pub trait BackendFactory {
    fn create(&self, name: &str) -> Result<Box<dyn CommitBackend>, ConfigError>;
}

impl<F> BackendFactory for F
where
    F: Fn(&str) -> Result<Box<dyn CommitBackend>, ConfigError>,
{
    fn create(&self, name: &str) -> Result<Box<dyn CommitBackend>, ConfigError> {
        self(name)
    }
}

/// Factory producing subprocess-backed backends that share one runner.
pub struct CliBackendFactory {
    runner: Arc<dyn ProcessRunner>,
}

impl CliBackendFactory {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }
}

impl BackendFactory for CliBackendFactory {
    fn create(&self, name: &str) -> Result<Box<dyn CommitBackend>, ConfigError> {
        let kind: BackendKind = name.parse()?;
        Ok(kind.build(Arc::clone(&self.runner)))
    }
}

/// Run an AI CLI and clean its stdout into a commit message.
pub(crate) async fn invoke(
    runner: &dyn ProcessRunner,
    program: &str,
    args: Vec<String>,
    noise: &[&str],
) -> Result<CommitMessage, ToolError> {
    let output = runner.output(program, &args).await?;
    Ok(CommitMessage::new(clean_output(&output.stdout, noise)))
}

/// Drop lines containing any `noise` marker, then trim surrounding whitespace.
pub fn clean_output(raw: &str, noise: &[&str]) -> String {
    let mut dropped = 0usize;
    let kept: Vec<&str> = raw
        .split('\n')
        .filter(|line| {
            let is_noise = noise.iter().any(|marker| line.contains(marker));
            if is_noise {
                dropped += 1;
            }
            !is_noise
        })
        .collect();

    if dropped > 0 {
        debug!("Filtered {} noise line(s) from backend output", dropped);
    }

    kept.join("\n").trim().to_string()
}

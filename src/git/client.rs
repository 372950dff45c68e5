//! Staged diff retrieval and commit creation.
//!
//! Both operations shell out to the system `git` binary, inheriting the
//! user's git config, hooks, and signing setup.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ToolError;
use crate::process::{ProcessRunner, SystemRunner};

/// Raw unified diff of the index against HEAD.
///
/// An empty diff means nothing is staged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedDiff(String);

impl StagedDiff {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for StagedDiff {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Trait for the version-control side of the workflow.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitClient: Send + Sync {
    /// Staged changes only (`git diff --staged`), never the working tree.
    async fn staged_diff(&self) -> Result<StagedDiff, ToolError>;

    /// Create a commit from the index with the given message.
    async fn commit(&self, message: &str) -> Result<(), ToolError>;
}

/// `GitClient` backed by the `git` executable.
pub struct GitCli {
    runner: Arc<dyn ProcessRunner>,
    repo_dir: Option<PathBuf>,
}

impl GitCli {
    /// Git client for the current directory using real subprocesses.
    pub fn new() -> Self {
        Self::with_runner(Arc::new(SystemRunner))
    }

    pub fn with_runner(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            runner,
            repo_dir: None,
        }
    }

    /// Run every git command against `dir` (`git -C <dir>`).
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repo_dir = Some(dir.into());
        self
    }

    fn args(&self, rest: &[&str]) -> Vec<String> {
        let mut args = Vec::with_capacity(rest.len() + 2);
        if let Some(dir) = &self.repo_dir {
            args.push("-C".to_string());
            args.push(dir.display().to_string());
        }
        args.extend(rest.iter().map(|s| s.to_string()));
        args
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitClient for GitCli {
    async fn staged_diff(&self) -> Result<StagedDiff, ToolError> {
        let output = self
            .runner
            .output("git", &self.args(&["diff", "--staged"]))
            .await?;

        debug!("Staged diff: {} bytes", output.stdout.len());
        Ok(StagedDiff::from(output.stdout))
    }

    async fn commit(&self, message: &str) -> Result<(), ToolError> {
        self.runner
            .run_inherited("git", &self.args(&["commit", "-m", message]))
            .await
    }
}

//! Git operations via the system `git` binary.

pub mod client;

pub use client::{GitCli, GitClient, StagedDiff};

#[cfg(test)]
pub use client::MockGitClient;

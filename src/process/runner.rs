//! Spawning external programs with tokio.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::ToolError;

/// Captured streams of a successful process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for launching external programs.
///
/// This abstraction allows substituting a fake launcher in tests so that no
/// real `git` or AI CLI is spawned.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` and capture stdout and stderr.
    ///
    /// A non-zero exit is returned as `ToolError::NonZeroExit` carrying the
    /// captured stderr.
    async fn output(&self, program: &str, args: &[String]) -> Result<CapturedOutput, ToolError>;

    /// Run `program` with `args`, streaming its stdout/stderr straight to ours.
    async fn run_inherited(&self, program: &str, args: &[String]) -> Result<(), ToolError>;
}

/// Runner that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(program: &str, args: &[String]) -> Result<Command, ToolError> {
        // Missing CLIs surface as NotInstalled on every platform.
        if which::which(program).is_err() {
            return Err(ToolError::NotInstalled {
                program: program.to_string(),
            });
        }

        debug!("Spawning {} with {} argument(s)", program, args.len());
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        Ok(cmd)
    }

    fn spawn_error(program: &str, source: std::io::Error) -> ToolError {
        if source.kind() == std::io::ErrorKind::NotFound {
            ToolError::NotInstalled {
                program: program.to_string(),
            }
        } else {
            ToolError::SpawnFailed {
                program: program.to_string(),
                source,
            }
        }
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn output(&self, program: &str, args: &[String]) -> Result<CapturedOutput, ToolError> {
        let output = Self::command(program, args)?
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Self::spawn_error(program, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        debug!(
            "{} exited with {} ({} bytes stdout, {} bytes stderr)",
            program,
            output.status,
            stdout.len(),
            stderr.len()
        );

        if !output.status.success() {
            return Err(ToolError::NonZeroExit {
                program: program.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(CapturedOutput { stdout, stderr })
    }

    async fn run_inherited(&self, program: &str, args: &[String]) -> Result<(), ToolError> {
        let status = Self::command(program, args)?
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Self::spawn_error(program, e))?;

        debug!("{} exited with {}", program, status);

        if !status.success() {
            // Diagnostics already went to the user's terminal.
            return Err(ToolError::NonZeroExit {
                program: program.to_string(),
                code: status.code().unwrap_or(-1),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}

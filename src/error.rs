//! Error types for gcauto modules using thiserror.

use std::process::ExitCode;

use thiserror::Error;

/// Errors from resolving user configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid model specified: {0} (expected one of: claude, gemini, codex)")]
    UnknownBackend(String),
}

/// Errors from running an external program (git or an AI CLI).
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{program} not found in PATH{}", install_hint(.program))]
    NotInstalled { program: String },

    #[error("failed to run {program} command: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} execution failed: exit status {code}{}", stderr_suffix(.stderr))]
    NonZeroExit {
        program: String,
        code: i32,
        stderr: String,
    },
}

impl ToolError {
    /// Name of the program that failed.
    pub fn program(&self) -> &str {
        match self {
            ToolError::NotInstalled { program }
            | ToolError::SpawnFailed { program, .. }
            | ToolError::NonZeroExit { program, .. } => program,
        }
    }
}

fn install_hint(program: &str) -> &'static str {
    match program {
        "claude" => ". Install with: npm install -g @anthropic-ai/claude-code",
        "gemini" => ". Install with: npm install -g @google/gemini-cli",
        "codex" => ". Install with: npm install -g @openai/codex",
        _ => "",
    }
}

fn stderr_suffix(stderr: &str) -> String {
    match stderr.trim() {
        "" => String::new(),
        trimmed => format!(": {trimmed}"),
    }
}

/// Top-level failure of a gcauto run.
///
/// Every variant is fatal and maps to exit status 1.
#[derive(Error, Debug)]
pub enum GcautoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to get git diff: {0}")]
    Diff(#[source] ToolError),

    #[error("Failed to generate commit message: {0}")]
    Generate(#[source] ToolError),

    #[error("Commit message is empty")]
    EmptyMessage,

    #[error("Failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("Commit failed: {0}")]
    Commit(#[source] ToolError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl GcautoError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

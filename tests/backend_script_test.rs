//! Backend tests against shell scripts standing in for the AI CLIs.
//!
//! The scripts are run through the real `SystemRunner`, so these cover
//! argument passing, stdout capture, noise filtering, and exit handling
//! end-to-end without any network access.
#![cfg(unix)]

mod common;

use std::fs;
use std::sync::Arc;

use gcauto::backend::{ClaudeBackend, CodexBackend, GeminiBackend};
use gcauto::{CommitBackend, StagedDiff, SystemRunner, ToolError};

use common::create_mock_cli;

const DIFF: &str = "diff --git a/src/app.rs b/src/app.rs\n+fn start() {}\n";

#[tokio::test]
async fn test_claude_script_output_is_trimmed() {
    let (_dir, script) = create_mock_cli(
        "claude",
        "#!/bin/sh\nprintf '\\n\\nfeat: 起動処理を追加\\n\\n- start関数を追加\\n\\n'\n",
    );
    let backend = ClaudeBackend::new(Arc::new(SystemRunner)).with_program(script.display().to_string());

    let message = backend
        .generate_commit_message(&StagedDiff::new(DIFF))
        .await
        .expect("script should succeed");

    assert_eq!(message.as_str(), "feat: 起動処理を追加\n\n- start関数を追加");
    assert!(message.has_recognized_prefix());
}

#[tokio::test]
async fn test_claude_script_receives_prompt_with_diff() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let capture = dir.path().join("args.txt");
    let script_body = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$1\" > '{0}'\nprintf '%s' \"$2\" >> '{0}'\necho 'chore: 更新'\n",
        capture.display()
    );
    let (_script_dir, script) = create_mock_cli("claude", &script_body);
    let backend = ClaudeBackend::new(Arc::new(SystemRunner)).with_program(script.display().to_string());

    backend
        .generate_commit_message(&StagedDiff::new(DIFF))
        .await
        .expect("script should succeed");

    let captured = fs::read_to_string(&capture).expect("script should record its arguments");
    let (flag, prompt) = captured.split_once('\n').expect("flag line then prompt");
    assert_eq!(flag, "-p");
    assert!(prompt.contains("+fn start() {}"));
    assert!(prompt.contains("feat/fix/docs/style/refactor/test/chore"));
}

#[tokio::test]
async fn test_gemini_script_credential_notice_removed() {
    let (_dir, script) = create_mock_cli(
        "gemini",
        "#!/bin/sh\necho 'Loaded cached credentials.'\necho 'fix: 判定を修正'\necho ''\necho '- 境界値を修正'\n",
    );
    let backend = GeminiBackend::new(Arc::new(SystemRunner)).with_program(script.display().to_string());

    let message = backend
        .generate_commit_message(&StagedDiff::new(DIFF))
        .await
        .expect("script should succeed");

    assert_eq!(message.as_str(), "fix: 判定を修正\n\n- 境界値を修正");
}

#[tokio::test]
async fn test_codex_script_uses_exec() {
    let (_dir, script) = create_mock_cli(
        "codex",
        "#!/bin/sh\nif [ \"$1\" != exec ]; then echo \"bad subcommand $1\" >&2; exit 64; fi\necho 'progress...' >&2\necho 'refactor: 構造を整理'\n",
    );
    let backend = CodexBackend::new(Arc::new(SystemRunner)).with_program(script.display().to_string());

    let message = backend
        .generate_commit_message(&StagedDiff::new(DIFF))
        .await
        .expect("script should succeed");

    assert_eq!(message.as_str(), "refactor: 構造を整理");
}

#[tokio::test]
async fn test_failing_script_error_wraps_stderr() {
    let (_dir, script) = create_mock_cli(
        "claude",
        "#!/bin/sh\necho 'partial output'\necho 'Error: credit balance is too low' >&2\nexit 2\n",
    );
    let program = script.display().to_string();
    let backend = ClaudeBackend::new(Arc::new(SystemRunner)).with_program(program.clone());

    let err = backend
        .generate_commit_message(&StagedDiff::new(DIFF))
        .await
        .unwrap_err();

    match err {
        ToolError::NonZeroExit {
            program: failed,
            code,
            stderr,
        } => {
            assert_eq!(failed, program);
            assert_eq!(code, 2);
            assert!(stderr.contains("credit balance is too low"));
        }
        other => panic!("Expected NonZeroExit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_silent_script_yields_empty_message() {
    let (_dir, script) = create_mock_cli("gemini", "#!/bin/sh\necho 'Loaded cached credentials.'\n");
    let backend = GeminiBackend::new(Arc::new(SystemRunner)).with_program(script.display().to_string());

    let message = backend
        .generate_commit_message(&StagedDiff::new(DIFF))
        .await
        .expect("empty output is not an error");

    assert!(message.is_empty());
}

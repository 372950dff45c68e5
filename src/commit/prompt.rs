//! Prompt construction for AI-generated commit messages.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::git::StagedDiff;

/// Human language the generated message is written in.
pub const MESSAGE_LANGUAGE: &str = "Japanese";

/// Maximum bytes of diff embedded in the prompt.
///
/// The prompt travels as a single argv entry, and Linux caps one argument at
/// 128 KiB.
const MAX_DIFF_SANITIZED_LENGTH: usize = 100_000;

// CSI sequences such as colour codes (ESC [ ... final-byte)
static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("ansi pattern is valid"));

/// Build the instruction sent to a backend for the given staged diff.
pub fn build_commit_prompt(diff: &StagedDiff) -> String {
    let (sanitized, truncated) = sanitize_diff(diff.as_str(), MAX_DIFF_SANITIZED_LENGTH);
    let truncation_note = if truncated {
        "\n(The diff was truncated due to size. Focus on the visible changes.)"
    } else {
        ""
    };

    format!(
        r#"Write a git commit message in {MESSAGE_LANGUAGE} in the Conventional Commits format, based on the following git diff.

---
{sanitized}
---{truncation_note}

Output the message directly in this form:
type: concise summary of the change

- specific change 1
- specific change 2
- specific change 3

Rules:
- Do not include any preamble or explanatory text
- Output only the commit message itself
- Do not include 🤖, Co-Authored-By, or any other attribution
- Choose the type from feat/fix/docs/style/refactor/test/chore"#
    )
}

/// Sanitize diff text for inclusion in a prompt.
///
/// Removes ANSI escape sequences and control characters (except newlines and
/// tabs), then truncates to `max_len` bytes on a char boundary. The flag is
/// `true` only when text was cut off.
pub fn sanitize_diff(text: &str, max_len: usize) -> (String, bool) {
    let without_ansi = ANSI_RE.replace_all(text, "");

    let mut result: String = without_ansi
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    let truncated = result.len() > max_len;
    if truncated {
        let mut end = max_len;
        while end > 0 && !result.is_char_boundary(end) {
            end -= 1;
        }
        result.truncate(end);
    }

    (result, truncated)
}

//! The commit workflow: diff, generate, confirm, commit.
//!
//! Every collaborator is passed in, so the whole flow runs against fakes in
//! tests and against real processes from `main`.

pub mod confirm;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::backend::BackendFactory;
use crate::commit::CommitMessage;
use crate::error::GcautoError;
use crate::git::GitClient;

pub use confirm::{is_affirmative, read_confirmation};

const RULE: &str = "===================================";

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was staged.
    NothingToDo,
    /// The user declined the generated message.
    Cancelled,
    /// The commit was created.
    Committed,
}

/// Run the workflow once.
///
/// Steps are strictly ordered and each failure ends the run:
/// 1. resolve `backend_name` through `factory` (before touching git)
/// 2. read the staged diff; an empty diff ends with [`Outcome::NothingToDo`]
/// 3. generate the message; an empty message is an error
/// 4. show the message and read one confirmation line from `input`
/// 5. commit only on `y`/`yes`
pub async fn run<F, I, W>(
    backend_name: &str,
    git: &dyn GitClient,
    factory: &F,
    input: &mut I,
    out: &mut W,
) -> Result<Outcome, GcautoError>
where
    F: BackendFactory + ?Sized,
    I: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(
        out,
        "🚀 gcauto: Starting automatic commit process using {}...",
        backend_name
    )?;

    let backend = factory.create(backend_name)?;

    let diff = git.staged_diff().await.map_err(GcautoError::Diff)?;
    if diff.is_empty() {
        writeln!(out, "✅ No changes staged for commit. Nothing to do.")?;
        return Ok(Outcome::NothingToDo);
    }

    debug!(
        "Generating commit message with {} from {} bytes of diff",
        backend.name(),
        diff.as_str().len()
    );
    let message = backend
        .generate_commit_message(&diff)
        .await
        .map_err(GcautoError::Generate)?;

    if message.is_empty() {
        return Err(GcautoError::EmptyMessage);
    }
    inspect_header(&message);

    writeln!(out, "\n📝 Generated Commit Message:")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{message}")?;
    writeln!(out, "{RULE}")?;

    write!(out, "\nDo you want to commit with this message? [y/N]: ")?;
    out.flush()?;

    let confirmed = read_confirmation(input).map_err(GcautoError::Input)?;
    if !confirmed {
        writeln!(out, "\n⏹️ Commit cancelled.")?;
        return Ok(Outcome::Cancelled);
    }

    git.commit(message.as_str())
        .await
        .map_err(GcautoError::Commit)?;

    writeln!(out, "\n✅ Commit completed successfully!")?;
    Ok(Outcome::Committed)
}

/// Log how the generated subject compares to the requested format.
fn inspect_header(message: &CommitMessage) {
    match message.header() {
        Some(header) if header.commit_type.is_some() => {
            debug!(
                "Generated {} commit (scope: {:?}, breaking: {})",
                header.raw_type, header.scope, header.breaking
            );
        }
        Some(header) => warn!(
            "Generated commit type '{}' is not one of feat/fix/docs/style/refactor/test/chore",
            header.raw_type
        ),
        None => warn!(
            "Generated subject has no conventional commit type: {}",
            message.subject()
        ),
    }
}

//! Recording process runner for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ToolError;

use super::runner::{CapturedOutput, ProcessRunner};

type Responder = dyn Fn(&str, &[String]) -> Result<CapturedOutput, ToolError> + Send + Sync;

/// One recorded call to the fake runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub inherited: bool,
}

/// A `ProcessRunner` that never spawns anything.
///
/// Every call is recorded and answered by the supplied closure.
pub(crate) struct FakeRunner {
    respond: Box<Responder>,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new(
        respond: impl Fn(&str, &[String]) -> Result<CapturedOutput, ToolError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Runner whose every call succeeds with the given stdout.
    pub fn with_stdout(stdout: &str) -> Self {
        let stdout = stdout.to_string();
        Self::new(move |_, _| {
            Ok(CapturedOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            })
        })
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, program: &str, args: &[String], inherited: bool) {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
            inherited,
        });
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn output(&self, program: &str, args: &[String]) -> Result<CapturedOutput, ToolError> {
        self.record(program, args, false);
        (self.respond)(program, args)
    }

    async fn run_inherited(&self, program: &str, args: &[String]) -> Result<(), ToolError> {
        self.record(program, args, true);
        (self.respond)(program, args).map(|_| ())
    }
}

//! gcauto - CLI entry point.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gcauto::config::resolve_backend_name;
use gcauto::{CliBackendFactory, GcautoError, GitCli, ProcessRunner, SystemRunner, run};

/// AI-powered git commit message generator.
#[derive(Parser, Debug)]
#[command(name = "gcauto")]
#[command(about = "gcauto: AI-powered git commit message generator")]
#[command(version)]
struct Cli {
    /// AI model to use (claude, gemini or codex) [env: GCAUTO_MODEL] [default: claude]
    #[arg(short = 'm', long = "model", value_name = "NAME")]
    model: Option<String>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    let backend_name = resolve_backend_name(cli.model.as_deref());

    let runner: Arc<dyn ProcessRunner> = Arc::new(SystemRunner);
    let git = GitCli::with_runner(Arc::clone(&runner));
    let factory = CliBackendFactory::new(runner);

    let mut input = io::stdin().lock();
    let mut out = io::stdout();

    match run(&backend_name, &git, &factory, &mut input, &mut out).await {
        Ok(outcome) => {
            debug!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

/// Long flags also accepted with a single dash (`-model`, `-help`, `-version`).
const SINGLE_DASH_LONG_FLAGS: [&str; 4] = ["model", "help", "version", "verbose"];

/// Rewrite `-model`, `-model=NAME`, `-help` and `-version` to their `--` form.
///
/// Arguments after a `--` terminator and the value following `-m`/`--model`
/// are left alone.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut literal = false;
    let mut takes_value = false;

    for arg in args.into_iter().map(Into::<OsString>::into) {
        if literal || takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            literal = true;
            normalized.push(arg);
            continue;
        }

        let rewritten = text
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .filter(|rest| {
                let name = rest.split_once('=').map_or(*rest, |(name, _)| name);
                SINGLE_DASH_LONG_FLAGS.contains(&name)
            })
            .map(|rest| format!("--{rest}"));

        let flag = rewritten.as_deref().unwrap_or(text);
        takes_value = flag == "-m" || flag == "--model";
        normalized.push(rewritten.map_or(arg, OsString::from));
    }

    normalized
}

/// Print a fatal error the way the status lines are printed.
fn report(err: &GcautoError) {
    match err {
        GcautoError::Commit(_) => println!("\n❌ {}", err),
        _ => println!("❌ Error: {}", err),
    }
}

/// Log to stderr, honouring `RUST_LOG`; defaults to warnings only.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "gcauto=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

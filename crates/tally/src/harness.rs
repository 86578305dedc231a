//! Harness entry point - command-line arguments to filter values

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::registry::Registry;
use crate::runner::{RunSummary, Runner};

/// Command-line arguments mapped to the runner's two filter values.
#[derive(Debug, Parser)]
#[command(name = "tally", about = "Run registered test cases")]
pub struct HarnessArgs {
    /// Run only tests whose name starts with this prefix
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Run only tests with this attribute value
    #[arg(long, default_value_t = 0)]
    pub attr: i32,

    /// Print a line for each executed test
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Parse arguments from the environment, run the registry's tests and
/// map the outcome to an exit code (nonzero when any check failed).
///
/// Typical suite `main`:
///
/// ```no_run
/// use std::process::ExitCode;
/// use tally::{register_test, Registry};
///
/// fn config_roundtrip() {
///     tally::verify!(true);
/// }
///
/// fn main() -> anyhow::Result<ExitCode> {
///     let mut registry = Registry::new();
///     register_test!(registry, config_roundtrip);
///     tally::harness::run_from_env(&registry)
/// }
/// ```
pub fn run_from_env(registry: &Registry) -> Result<ExitCode> {
    let args = HarnessArgs::parse();
    let summary = run_with_args(registry, &args)?;
    Ok(exit_code(&summary))
}

/// Run with already-parsed arguments.
pub fn run_with_args(registry: &Registry, args: &HarnessArgs) -> Result<RunSummary> {
    let runner = Runner::new()
        .with_verbose(args.verbose)
        .with_no_color(args.no_color);
    Ok(runner.run(registry, &args.filter, args.attr))
}

fn exit_code(summary: &RunSummary) -> ExitCode {
    if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

//! Run reporting - per-case lines and the final summary

use colored::Colorize;

use crate::registry::TestCase;
use crate::runner::RunSummary;

/// Prints run progress and the summary line.
pub struct Reporter {
    /// Show a line for each executed test.
    verbose: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Reporter {
    /// Create a new reporter.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Announce a case about to execute (verbose mode only).
    pub fn case_started(&self, case: &TestCase) {
        if !self.verbose {
            return;
        }
        println!(
            "{} {} {}",
            "RUN".bold(),
            case.name,
            format!("({}:{})", case.origin.file, case.origin.line).dimmed()
        );
    }

    /// Print the summary for a finished run. Counts are the
    /// registry's accumulated tally, so prior runs without a reset
    /// are included.
    pub fn summary(&self, summary: &RunSummary) {
        println!("{}", "─".repeat(50));

        let status = if summary.failed > 0 {
            "FAILED".red().bold()
        } else {
            "PASSED".green().bold()
        };

        println!(
            "Test result: {} | {} run, {} passed, {} failed",
            status,
            summary.selected.to_string().bold(),
            summary.passed.to_string().green().bold(),
            if summary.failed > 0 {
                summary.failed.to_string().red().bold()
            } else {
                summary.failed.to_string().normal()
            }
        );
    }
}

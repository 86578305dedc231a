//! Runner - filtered, in-order execution of registered cases

use crate::registry::Registry;
use crate::reporter::Reporter;
use crate::verify::ActiveRun;

/// Outcome of one [`Runner::run`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases selected by the filters; all of them executed.
    pub selected: usize,
    /// Pass count after the run (accumulated across runs unless the
    /// registry was reset).
    pub passed: u32,
    /// Fail count after the run, accumulated the same way.
    pub failed: u32,
}

impl RunSummary {
    /// True when no check has failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Runner with output configuration.
pub struct Runner {
    /// Print a line for each executed test.
    verbose: bool,
    /// Disable colored output.
    no_color: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the global color override on drop, so a panicking body
/// unwinding through `run` cannot leak it.
struct ColorOverride {
    active: bool,
}

impl ColorOverride {
    fn set(no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        ColorOverride { active: no_color }
    }
}

impl Drop for ColorOverride {
    fn drop(&mut self) {
        if self.active {
            colored::control::unset_override();
        }
    }
}

impl Runner {
    /// Create a runner with default settings.
    pub fn new() -> Self {
        Self {
            verbose: false,
            no_color: false,
        }
    }

    /// Set whether to print a line per executed test.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Disable colored output.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Run every case whose name starts with `name_filter` (empty
    /// matches all) and whose attribute equals `attr_filter`, in
    /// registration order, then print the summary.
    ///
    /// Single-threaded and synchronous. A panicking body is not
    /// caught: the run terminates immediately, remaining cases do not
    /// execute and no summary is printed.
    pub fn run(&self, registry: &Registry, name_filter: &str, attr_filter: i32) -> RunSummary {
        let _color = ColorOverride::set(self.no_color);

        let reporter = Reporter::new(self.verbose);
        let selected: Vec<_> = registry
            .cases()
            .iter()
            .filter(|case| case.matches(name_filter, attr_filter))
            .collect();

        {
            let _active = ActiveRun::install(registry.state());
            for case in &selected {
                reporter.case_started(case);
                (case.body)();
            }
        }

        let tally = registry.tally();
        let summary = RunSummary {
            selected: selected.len(),
            passed: tally.passed,
            failed: tally.failed,
        };
        reporter.summary(&summary);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Origin, TestCase};
    use crate::verify::test_log::CaptureLog;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    thread_local! {
        static EXECUTED: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn executed() -> Vec<&'static str> {
        EXECUTED.with(|e| e.borrow().clone())
    }

    fn mark(name: &'static str) {
        EXECUTED.with(|e| e.borrow_mut().push(name));
    }

    fn body_a_one() {
        mark("A_one");
        crate::verify!(true);
    }

    fn body_a_two() {
        mark("A_two");
        crate::verify!(true);
    }

    fn body_b_one() {
        mark("B_one");
        crate::verify!(true);
    }

    fn body_failing() {
        mark("failing");
        crate::verify!(1 == 2);
        // Still reached: a failed check does not abort the body.
        mark("after_failure");
        crate::verify!(true);
    }

    fn body_panics() {
        mark("panics");
        crate::verify!(true);
        panic!("boom");
    }

    fn case(body: fn(), name: &'static str, attr: i32) -> TestCase {
        TestCase {
            body,
            attr,
            name,
            origin: Origin {
                file: file!(),
                line: line!(),
            },
        }
    }

    fn scenario_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add(case(body_a_one, "A_one", 0));
        registry.add(case(body_a_two, "A_two", 1));
        registry.add(case(body_b_one, "B_one", 0));
        registry
    }

    fn quiet() -> Runner {
        Runner::new().with_no_color(true)
    }

    #[test]
    fn test_prefix_filter_selects_one() {
        let registry = scenario_registry();
        let summary = quiet().run(&registry, "A", 0);

        assert_eq!(summary.selected, 1);
        assert_eq!(executed(), vec!["A_one"]);
    }

    #[test]
    fn test_empty_filter_runs_default_attr_in_order() {
        let registry = scenario_registry();
        let summary = quiet().run(&registry, "", 0);

        assert_eq!(summary.selected, 2);
        assert_eq!(executed(), vec!["A_one", "B_one"]);
    }

    #[test]
    fn test_attr_filter_selects_tagged_case() {
        let registry = scenario_registry();
        let summary = quiet().run(&registry, "A", 1);

        assert_eq!(summary.selected, 1);
        assert_eq!(executed(), vec!["A_two"]);
    }

    #[test]
    fn test_no_match_runs_nothing() {
        let registry = scenario_registry();
        let summary = quiet().run(&registry, "C", 0);

        assert_eq!(summary.selected, 0);
        assert_eq!(summary.passed, 0);
        assert!(executed().is_empty());
    }

    #[test]
    fn test_failed_verify_is_non_fatal_and_logged_once() {
        let log = CaptureLog::default();
        let mut registry = Registry::with_log(Box::new(log.clone()));
        registry.add(case(body_failing, "failing", 0));

        let summary = quiet().run(&registry, "", 0);

        assert_eq!(executed(), vec!["failing", "after_failure"]);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(log.0.borrow().len(), 1);
    }

    #[test]
    fn test_panicking_body_aborts_run() {
        let mut registry = Registry::new();
        registry.add(case(body_panics, "panics", 0));
        registry.add(case(body_b_one, "B_one", 0));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            quiet().run(&registry, "", 0)
        }));

        // The panic propagates out of `run`: no summary is produced
        // and the case registered after the panicking one never ran.
        assert!(outcome.is_err());
        assert_eq!(executed(), vec!["panics"]);

        // Checks recorded before the panic are kept.
        assert_eq!(registry.tally().passed, 1);
    }

    #[test]
    fn test_counters_accumulate_across_runs() {
        let registry = scenario_registry();
        let runner = quiet();

        let first = runner.run(&registry, "", 0);
        assert_eq!(first.passed, 2);

        let second = runner.run(&registry, "", 0);
        assert_eq!(second.passed, 4);

        registry.reset();
        let third = runner.run(&registry, "", 0);
        assert_eq!(third.passed, 2);
    }
}

//! Test-case registry - the ordered case list and the running tally

use std::cell::Cell;
use std::rc::Rc;

use crate::verify::{ConsoleLog, FailureLog};

/// Source location of a registered test case, kept for diagnostics
/// only - never consulted for filtering or ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    /// File the test was registered from.
    pub file: &'static str,
    /// 1-based line of the registration site.
    pub line: u32,
}

/// A registered test case.
///
/// Immutable after creation; the [`register_test!`](crate::register_test)
/// macro fills in `name` and `origin` from the call site.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// The test body. Zero arguments, no result; checks inside it go
    /// through [`verify!`](macro@crate::verify).
    pub body: fn(),
    /// Integer tag for attribute filtering (grouping tests as "slow",
    /// "integration", and so on). Default 0.
    pub attr: i32,
    /// The test's identifier, by convention the function's name.
    pub name: &'static str,
    /// Where the case was registered.
    pub origin: Origin,
}

impl TestCase {
    /// Whether this case is selected by the given filters: the name
    /// must start with `name_filter` (an empty filter matches every
    /// name) and the attribute must equal `attr_filter` exactly.
    pub(crate) fn matches(&self, name_filter: &str, attr_filter: i32) -> bool {
        self.name.starts_with(name_filter) && self.attr == attr_filter
    }
}

/// Snapshot of the pass/fail counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Checks that passed.
    pub passed: u32,
    /// Checks that failed.
    pub failed: u32,
}

impl Tally {
    /// Total number of recorded checks.
    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    /// True when no check has failed.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// The mutable run state shared between the registry and the active
/// run: the two counters plus the failure log. `Cell` counters keep
/// this single-threaded by construction.
pub(crate) struct RunState {
    passed: Cell<u32>,
    failed: Cell<u32>,
    log: Box<dyn FailureLog>,
}

impl RunState {
    pub(crate) fn record(&self, passed: bool) {
        if passed {
            self.passed.set(self.passed.get() + 1);
        } else {
            self.failed.set(self.failed.get() + 1);
        }
    }

    pub(crate) fn log(&self, category: &str, message: &str) {
        self.log.log(category, message);
    }

    fn tally(&self) -> Tally {
        Tally {
            passed: self.passed.get(),
            failed: self.failed.get(),
        }
    }
}

/// Ordered collection of test cases plus the pass/fail tally.
///
/// Construct one at program start and pass it by reference to the
/// registration code and the [`Runner`](crate::Runner). Registration
/// must finish before a run begins; the case list is append-only and
/// read-only during execution.
///
/// The counters accumulate across multiple runs within one process.
/// Call [`reset`](Registry::reset) for fresh counts per run.
pub struct Registry {
    cases: Vec<TestCase>,
    state: Rc<RunState>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry reporting failed checks to stderr.
    pub fn new() -> Self {
        Self::with_log(Box::new(ConsoleLog))
    }

    /// Create an empty registry with a caller-supplied failure log.
    pub fn with_log(log: Box<dyn FailureLog>) -> Self {
        Self {
            cases: Vec::new(),
            state: Rc::new(RunState {
                passed: Cell::new(0),
                failed: Cell::new(0),
                log,
            }),
        }
    }

    /// Append a case. No deduplication; registration order is the
    /// execution order. Always succeeds.
    pub fn add(&mut self, case: TestCase) {
        debug_assert!(!case.name.is_empty(), "test case must have a name");
        debug_assert!(case.origin.line >= 1, "origin line must be 1-based");
        self.cases.push(case);
    }

    /// Record one check outcome: a pass bumps `passed`, a failure
    /// bumps `failed`. Safe to call from within any executing body.
    pub fn record(&self, passed: bool) {
        self.state.record(passed);
    }

    /// Snapshot of the counters.
    pub fn tally(&self) -> Tally {
        self.state.tally()
    }

    /// Zero both counters. Never happens automatically: re-running
    /// tests without a reset accumulates onto prior counts.
    pub fn reset(&self) {
        self.state.passed.set(0);
        self.state.failed.set(0);
    }

    /// All registered cases, in registration order.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check if no cases are registered.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub(crate) fn state(&self) -> Rc<RunState> {
        Rc::clone(&self.state)
    }
}

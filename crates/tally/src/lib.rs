//! Tally - a minimal test-case registry and runner
//!
//! Test functions register into an explicit [`Registry`] at program
//! start; a [`Runner`] later executes a filtered subset in
//! registration order, tallying pass/fail counts from inline
//! [`verify!`](macro@verify) checks.
//!
//! Filtering is by name prefix (empty prefix matches everything) plus
//! an exact integer attribute, so suites can tag tests as "slow" or
//! "integration" with a nonzero attribute and keep them out of the
//! default run.
//!
//! # Example
//!
//! ```
//! use tally::{register_test, Registry, Runner};
//!
//! fn math_adds() {
//!     tally::verify!(2 + 2 == 4);
//! }
//!
//! fn math_overflows() {
//!     tally::verify!(u8::MAX.checked_add(1).is_none());
//! }
//!
//! let mut registry = Registry::new();
//! register_test!(registry, math_adds);
//! register_test!(registry, math_overflows);
//!
//! let summary = Runner::new().run(&registry, "math_", 0);
//! assert_eq!(summary.selected, 2);
//! assert_eq!(summary.passed, 2);
//! ```
//!
//! # Execution model
//!
//! Single-threaded and synchronous: registration happens on whichever
//! thread performs program initialization, and a run proceeds on one
//! thread to completion. Checks are non-fatal - a failed `verify!`
//! is recorded and logged, and the body keeps executing - but a
//! panicking body is not caught and aborts the whole run.
//!
//! Counters accumulate across runs within one process until
//! [`Registry::reset`] is called.

pub mod harness;
mod macros;
pub mod registry;
pub mod reporter;
pub mod runner;
pub mod verify;

pub use registry::{Origin, Registry, Tally, TestCase};
pub use reporter::Reporter;
pub use runner::{RunSummary, Runner};
pub use verify::{ConsoleLog, FailureLog};

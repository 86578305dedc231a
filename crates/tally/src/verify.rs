//! Assertion contract - records check outcomes into the active run

use std::cell::RefCell;
use std::rc::Rc;

use colored::Colorize;

use crate::registry::RunState;

/// Logging collaborator for failed checks: one `log` call per failed
/// [`verify!`](macro@crate::verify).
pub trait FailureLog {
    /// Emit one diagnostic entry.
    fn log(&self, category: &str, message: &str);
}

/// Default failure log: a colored line on stderr.
pub struct ConsoleLog;

impl FailureLog for ConsoleLog {
    fn log(&self, category: &str, message: &str) {
        eprintln!("{} {}", format!("[{}]", category).red().bold(), message);
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Rc<RunState>>> = const { RefCell::new(None) };
}

/// Marks a registry's run state as the active one for the current
/// thread, restoring whatever was active before on drop.
pub(crate) struct ActiveRun {
    previous: Option<Rc<RunState>>,
}

impl ActiveRun {
    pub(crate) fn install(state: Rc<RunState>) -> Self {
        let previous = ACTIVE.with(|slot| slot.borrow_mut().replace(state));
        ActiveRun { previous }
    }
}

impl Drop for ActiveRun {
    fn drop(&mut self) {
        ACTIVE.with(|slot| *slot.borrow_mut() = self.previous.take());
    }
}

/// Backs the [`verify!`](macro@crate::verify) macro.
///
/// Records the outcome into the active run's tally. A failed check
/// additionally emits exactly one log entry under category `"test"`,
/// carrying the literal source text of the expression and the call
/// site; execution of the enclosing body continues either way.
///
/// Outside an active run there is no tally to record into and the
/// call is a no-op.
pub fn record(passed: bool, expr: &str, file: &str, line: u32) {
    ACTIVE.with(|slot| {
        if let Some(state) = slot.borrow().as_ref() {
            state.record(passed);
            if !passed {
                state.log("test", &format!("test fail: {} at {}:{}", expr, file, line));
            }
        }
    });
}

/// In-memory failure log for tests.
#[cfg(test)]
pub(crate) mod test_log {
    use super::FailureLog;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub(crate) struct CaptureLog(pub(crate) Rc<RefCell<Vec<(String, String)>>>);

    impl FailureLog for CaptureLog {
        fn log(&self, category: &str, message: &str) {
            self.0
                .borrow_mut()
                .push((category.to_string(), message.to_string()));
        }
    }
}

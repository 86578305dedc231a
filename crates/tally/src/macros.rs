//! Registration and assertion macros

/// Check a condition inside a test body.
///
/// Records a pass or a failure into the running registry's tally. A
/// false condition is logged under category `"test"` with the literal
/// source text of the expression, and the body keeps executing - this
/// is a non-fatal check, not an aborting assertion.
///
/// ```
/// use tally::{register_test, Registry, Runner};
///
/// fn numbers_add() {
///     tally::verify!(2 + 2 == 4);
/// }
///
/// let mut registry = Registry::new();
/// register_test!(registry, numbers_add);
/// let summary = Runner::new().run(&registry, "", 0);
/// assert_eq!(summary.failed, 0);
/// ```
#[macro_export]
macro_rules! verify {
    ($cond:expr) => {
        $crate::verify::record($cond, stringify!($cond), file!(), line!())
    };
}

/// Register a test function, capturing its name and source location.
///
/// The attribute defaults to 0 when omitted. Registration is an
/// explicit call - collect these in an initialization function that
/// runs before the [`Runner`](crate::Runner) starts.
///
/// ```
/// use tally::{register_test, Registry};
///
/// fn parses_empty_input() {}
/// fn parses_large_input() {}
///
/// let mut registry = Registry::new();
/// register_test!(registry, parses_empty_input);
/// register_test!(registry, parses_large_input, 1);
/// ```
#[macro_export]
macro_rules! register_test {
    ($registry:expr, $func:ident) => {
        $crate::register_test!($registry, $func, 0)
    };
    ($registry:expr, $func:ident, $attr:expr) => {
        $registry.add($crate::registry::TestCase {
            body: $func,
            attr: $attr,
            name: stringify!($func),
            origin: $crate::registry::Origin {
                file: file!(),
                line: line!(),
            },
        })
    };
}

//! Structural self-checks for relation graphs.
//!
//! A graph is well formed when every edge is recorded on both endpoints,
//! no relation list repeats a key, and every key it lists is still
//! registered. Implementors report the first violation they find.

use crate::graph_error::ElementGraphError;

/// Whole-structure validation for graphs and their relation lists.
pub trait DebugInvariants {
    /// Panic on the first violation when invariant checking is compiled in
    /// (debug builds, `strict-invariants`, `check-invariants`); no-op
    /// otherwise.
    fn debug_assert_invariants(&self);
    /// Walk every element and return the first asymmetric edge, duplicate
    /// entry or dangling key.
    fn validate_invariants(&self) -> Result<(), ElementGraphError>;
}

/// Run a fallible check and panic with `[invariants] <ctx>: <error>` when it
/// fails. Expands to nothing unless invariant checking is compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(err) = $check {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), err);
        }
    };
}

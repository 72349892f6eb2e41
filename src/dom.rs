//! DOM Helpers
//!
//! Logging for best-effort DOM calls whose failure should not abort a handler.

use std::fmt::Debug;

/// Log a failed DOM call at `warn`. Returns whether the call succeeded.
pub fn warn_on_err<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(action, error = ?err, "DOM call failed");
            false
        }
    }
}

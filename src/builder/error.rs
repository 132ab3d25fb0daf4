//! Build errors for controller construction.

use thiserror::Error;

/// Errors that can occur when building a table controller.
///
/// A table that would violate determinism or totality is refused here,
/// before the controller exists.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Reset state not specified. Call .reset_state(state) before .build()")]
    MissingResetState,

    #[error("No transition entries defined. Add at least one entry")]
    NoEntries,

    #[error("Conflicting entries for state '{state}' on input '{input}'")]
    DuplicateEntry { state: String, input: char },

    #[error("No entry for state '{state}' on input '{input}' and no fallback output declared")]
    IncompleteTable { state: String, input: char },
}

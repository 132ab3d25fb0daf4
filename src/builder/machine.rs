//! Builder for constructing table controllers.

use crate::builder::error::BuildError;
use crate::core::{StateSpace, Symbol};
use crate::engine::{TableController, TransitionEntry};

/// Builder for constructing table controllers with a fluent API.
///
/// `build()` refuses tables that would make the machine nondeterministic
/// (two rows for one `(state, input)` pair) or partial (a pair over
/// `universe() x alphabet()` with neither a row nor a fallback output).
pub struct ControllerBuilder<S: StateSpace, I: Symbol, O: Symbol> {
    reset: Option<S>,
    entries: Vec<TransitionEntry<S, I, O>>,
    fallback: Option<O>,
}

impl<S: StateSpace, I: Symbol, O: Symbol> ControllerBuilder<S, I, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reset: None,
            entries: Vec::new(),
            fallback: None,
        }
    }

    /// Set the canonical starting state (required).
    pub fn reset_state(mut self, state: S) -> Self {
        self.reset = Some(state);
        self
    }

    /// Add a single transition row.
    pub fn entry(mut self, from: S, input: I, to: S, output: O) -> Self {
        self.entries.push(TransitionEntry {
            from,
            input,
            to,
            output,
        });
        self
    }

    /// Add multiple transition rows at once.
    pub fn entries(mut self, entries: Vec<TransitionEntry<S, I, O>>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Declare the output emitted by unmodeled `(state, input)` pairs.
    ///
    /// With a fallback, any pair without a row resolves to a self-loop
    /// emitting this output; without one, `build()` requires a row for
    /// every pair.
    pub fn fallback(mut self, output: O) -> Self {
        self.fallback = Some(output);
        self
    }

    /// Build the controller.
    ///
    /// Returns an error if required fields are missing or the table is
    /// nondeterministic or incomplete.
    pub fn build(self) -> Result<TableController<S, I, O>, BuildError> {
        let reset = self.reset.ok_or(BuildError::MissingResetState)?;

        if self.entries.is_empty() {
            return Err(BuildError::NoEntries);
        }

        for (position, row) in self.entries.iter().enumerate() {
            let conflict = self.entries[position + 1..]
                .iter()
                .any(|other| other.from == row.from && other.input == row.input);
            if conflict {
                return Err(BuildError::DuplicateEntry {
                    state: row.from.name().to_string(),
                    input: row.input.glyph(),
                });
            }
        }

        if self.fallback.is_none() {
            for state in S::universe() {
                for input in I::alphabet() {
                    let covered = self
                        .entries
                        .iter()
                        .any(|row| row.from == state && row.input == input);
                    if !covered {
                        return Err(BuildError::IncompleteTable {
                            state: state.name().to_string(),
                            input: input.glyph(),
                        });
                    }
                }
            }
        }

        Ok(TableController::from_parts(
            reset,
            self.entries,
            self.fallback,
        ))
    }
}

impl<S: StateSpace, I: Symbol, O: Symbol> Default for ControllerBuilder<S, I, O> {
    fn default() -> Self {
        Self::new()
    }
}

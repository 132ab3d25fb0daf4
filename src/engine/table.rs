//! Lookup-table controller.

use crate::core::{Controller, State, Symbol};
use serde::{Deserialize, Serialize};

/// One row of a transition table.
///
/// Reads as: in state `from`, on input `input`, move to state `to` and
/// emit `output`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionEntry<S: State, I: Symbol, O: Symbol> {
    /// The state this row fires from
    pub from: S,
    /// The input symbol this row consumes
    pub input: I,
    /// The successor state
    pub to: S,
    /// The output symbol emitted by the tick
    pub output: O,
}

/// A deterministic controller backed by a transition table.
///
/// Constructed only through
/// [`ControllerBuilder`](crate::builder::ControllerBuilder), whose
/// validation establishes the two invariants `step` relies on: at most one
/// row per `(state, input)` pair (determinism), and a row or a fallback
/// output for every pair (totality). Unmodeled pairs resolve to a
/// self-loop emitting the fallback output, so a tick is never dropped.
#[derive(Debug)]
pub struct TableController<S: State, I: Symbol, O: Symbol> {
    reset: S,
    entries: Vec<TransitionEntry<S, I, O>>,
    fallback: Option<O>,
}

impl<S: State, I: Symbol, O: Symbol> TableController<S, I, O> {
    pub(crate) fn from_parts(
        reset: S,
        entries: Vec<TransitionEntry<S, I, O>>,
        fallback: Option<O>,
    ) -> Self {
        Self {
            reset,
            entries,
            fallback,
        }
    }

    /// The rows of the table, in declaration order.
    pub fn entries(&self) -> &[TransitionEntry<S, I, O>] {
        &self.entries
    }

    /// The fallback output for unmodeled `(state, input)` pairs, if any.
    pub fn fallback(&self) -> Option<&O> {
        self.fallback.as_ref()
    }
}

impl<S: State, I: Symbol, O: Symbol> Controller for TableController<S, I, O> {
    type State = S;
    type Input = I;
    type Output = O;

    fn reset(&self) -> S {
        self.reset.clone()
    }

    fn step(&self, state: &S, input: &I) -> (S, O) {
        if let Some(row) = self
            .entries
            .iter()
            .find(|row| &row.from == state && &row.input == input)
        {
            return (row.to.clone(), row.output.clone());
        }

        // Build validation guarantees a fallback whenever the table has holes.
        let output = self
            .fallback
            .clone()
            .expect("table validated total at build time");
        (state.clone(), output)
    }
}

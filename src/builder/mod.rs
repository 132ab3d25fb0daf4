//! Builder API for ergonomic controller construction.
//!
//! This module provides a fluent builder and declaration macros for
//! creating table controllers with minimal boilerplate. Determinism and
//! totality are checked at build time, so a [`TableController`] that
//! exists is already valid.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::ControllerBuilder;

use crate::core::{State, Symbol};
use crate::engine::TransitionEntry;

/// Create a single transition row.
///
/// # Example
///
/// ```
/// use lockstep::builder::entry;
/// use lockstep::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Gate { Closed, Open }
/// }
///
/// symbol_enum! {
///     enum Cmd { Toggle => 't' }
/// }
///
/// symbol_enum! {
///     enum Ack { Done => 'd' }
/// }
///
/// let row = entry(Gate::Closed, Cmd::Toggle, Gate::Open, Ack::Done);
/// assert_eq!(row.from, Gate::Closed);
/// ```
pub fn entry<S, I, O>(from: S, input: I, to: S, output: O) -> TransitionEntry<S, I, O>
where
    S: State,
    I: Symbol,
    O: Symbol,
{
    TransitionEntry {
        from,
        input,
        to,
        output,
    }
}

/// Create a self-loop row: stay in `state` on `input`, emitting `output`.
///
/// # Example
///
/// ```
/// use lockstep::builder::hold;
/// use lockstep::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Gate { Closed, Open }
/// }
///
/// symbol_enum! {
///     enum Cmd { Hold => 'h' }
/// }
///
/// symbol_enum! {
///     enum Ack { Idle => 'i' }
/// }
///
/// let row = hold(Gate::Closed, Cmd::Hold, Ack::Idle);
/// assert_eq!(row.from, row.to);
/// ```
pub fn hold<S, I, O>(state: S, input: I, output: O) -> TransitionEntry<S, I, O>
where
    S: State,
    I: Symbol,
    O: Symbol,
{
    TransitionEntry {
        from: state.clone(),
        input,
        to: state,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state_enum, symbol_enum};

    state_enum! {
        enum Gate {
            Closed,
            Open,
        }
    }

    symbol_enum! {
        enum Cmd {
            Hold => '0',
            Toggle => '1',
        }
    }

    symbol_enum! {
        enum Ack {
            Shut => 'S',
            Ajar => 'A',
        }
    }

    #[test]
    fn entry_builds_a_row() {
        let row = entry(Gate::Closed, Cmd::Toggle, Gate::Open, Ack::Ajar);

        assert_eq!(row.from, Gate::Closed);
        assert_eq!(row.input, Cmd::Toggle);
        assert_eq!(row.to, Gate::Open);
        assert_eq!(row.output, Ack::Ajar);
    }

    #[test]
    fn hold_builds_a_self_loop() {
        let row = hold(Gate::Open, Cmd::Hold, Ack::Ajar);

        assert_eq!(row.from, Gate::Open);
        assert_eq!(row.to, Gate::Open);
    }
}

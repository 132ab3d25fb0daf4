//! Core types for tick-synchronous controllers.
//!
//! This module contains the pure heart of the library:
//! - Closed symbol alphabets via the [`Symbol`] trait
//! - Controller state via the [`State`] and [`StateSpace`] traits
//! - The [`Controller`] capability interface (`reset` + `step`)
//! - Immutable tick traces
//!
//! Everything here is pure (no side effects). Time, pacing, and I/O live
//! in the `driver` module; exploration lives in `reachability`.

mod alphabet;
mod controller;
mod state;
mod trace;

pub use alphabet::{InvalidSymbol, Symbol};
pub use controller::Controller;
pub use state::{State, StateSpace};
pub use trace::{TickRecord, TickTrace};

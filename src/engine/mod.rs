//! Table-driven transition engine.
//!
//! A concrete [`Controller`](crate::core::Controller) whose transition
//! function is a validated lookup table. Tables are constructed through
//! [`ControllerBuilder`](crate::builder::ControllerBuilder), which refuses
//! nondeterministic or partial tables before they exist.

mod table;

pub use table::{TableController, TransitionEntry};

//! Lockstep: a tick-synchronous reactive controller library
//!
//! Lockstep models discrete-time, synchronous reactive controllers - the
//! traffic-light kind of logic unit - as pure transition functions, and
//! pairs them with a driver and a reachability harness built on the
//! "pure core, imperative shell" philosophy. One tick consumes exactly
//! one input symbol and produces exactly one output symbol; purity of the
//! transition function is what makes runs replayable and reachability
//! checking deterministic.
//!
//! # Core Concepts
//!
//! - **Symbols**: closed, finite input/output alphabets via the `Symbol`
//!   trait
//! - **Controllers**: the `{reset, step}` capability interface, with a
//!   validated table-driven implementation behind a builder
//! - **Driving**: the `TickDriver` sequences ticks over a token stream
//!   with injectable pacing
//! - **Reachability**: the harness explores the machine and reports
//!   declared-but-unreachable states and outputs
//!
//! # Example
//!
//! ```rust
//! use lockstep::builder::{entry, hold, ControllerBuilder};
//! use lockstep::core::Symbol;
//! use lockstep::driver::TickDriver;
//! use lockstep::{state_enum, symbol_enum};
//!
//! state_enum! {
//!     enum Light { Red, Green, Yellow }
//! }
//!
//! symbol_enum! {
//!     enum Pulse { Hold => '0', Advance => '1' }
//! }
//!
//! symbol_enum! {
//!     enum Color { Red => 'R', Green => 'G', Yellow => 'Y' }
//! }
//!
//! let controller = ControllerBuilder::new()
//!     .reset_state(Light::Red)
//!     .entries(vec![
//!         entry(Light::Red, Pulse::Advance, Light::Green, Color::Green),
//!         entry(Light::Green, Pulse::Advance, Light::Yellow, Color::Yellow),
//!         entry(Light::Yellow, Pulse::Advance, Light::Red, Color::Red),
//!         hold(Light::Red, Pulse::Hold, Color::Red),
//!         hold(Light::Green, Pulse::Hold, Color::Green),
//!         hold(Light::Yellow, Pulse::Hold, Color::Yellow),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! let driver = TickDriver::new(controller);
//! let outcome = driver.run("11101010101").unwrap();
//!
//! let rendered: String = outcome.outputs.iter().map(|o| o.glyph()).collect();
//! assert_eq!(rendered, "GYRRGGYYRRG");
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod engine;
pub mod reachability;

// Re-export commonly used types
pub use crate::core::{Controller, InvalidSymbol, State, StateSpace, Symbol};

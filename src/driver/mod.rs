//! The imperative shell: tick sequencing and pacing.
//!
//! The driver walks a raw token stream one tick at a time, decoding each
//! token against the input alphabet and surfacing each output before
//! advancing. Real-time pacing is an injectable policy so interactive
//! runs can pace for human observation while tests and the reachability
//! harness run at full speed.

pub mod error;
pub mod pacing;
pub mod run;

pub use error::DriverError;
pub use pacing::Pacing;
pub use run::{RunOutcome, TickDriver};

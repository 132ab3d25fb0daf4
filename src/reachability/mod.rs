//! Reachability verification.
//!
//! Determines which declared states and output symbols a controller can
//! actually produce from its reset state under *some* alphabet-valid
//! input sequence, either by bounded exhaustive exploration or by
//! replaying caller-supplied representative sequences. Declared members
//! that are never observed are surfaced as findings for a human reviewer:
//! in generated controller logic they indicate dead states or dead
//! outputs.

mod harness;
mod report;

pub use harness::ReachabilityHarness;
pub use report::{Finding, ReachabilityReport};

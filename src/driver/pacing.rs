//! Inter-tick pacing policies.

use std::thread;
use std::time::Duration;

/// How the driver paces real time between ticks.
///
/// Pacing is cosmetic: it models the wall-clock gap between external
/// events for a human observer, and must never influence the controller -
/// `step` is presented with zero knowledge of time. The reachability
/// harness runs without any pacing at all.
///
/// The delay blocks the calling thread (cooperative pacing, no
/// cancellation semantics); wrap the whole run in an external timeout if
/// cancellation is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pacing {
    /// No delay between ticks.
    #[default]
    None,
    /// A fixed delay before every tick after the first.
    Fixed(Duration),
}

impl Pacing {
    /// Block for the configured delay before tick number `tick`.
    ///
    /// The first tick is never delayed: the first external event is
    /// already pending when the run starts.
    pub fn pause_before(&self, tick: usize) {
        if tick == 0 {
            return;
        }
        if let Pacing::Fixed(delay) = self {
            thread::sleep(*delay);
        }
    }
}

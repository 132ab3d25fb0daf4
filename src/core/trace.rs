//! Tick trace recording.
//!
//! Provides immutable tracking of a controller run, one record per tick,
//! following functional programming principles.

use crate::core::alphabet::Symbol;
use crate::core::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single tick.
///
/// Captures everything one tick did: the state it started from, the input
/// it consumed, the output it emitted, and the state it produced.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use lockstep::core::TickRecord;
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
/// let record = TickRecord {
///     tick: 0,
///     from: Gate::Closed,
///     input: Cmd::Toggle,
///     output: Ack::Done,
///     to: Gate::Open,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TickRecord<S: State, I: Symbol, O: Symbol> {
    /// Zero-based position of this tick within the run
    pub tick: usize,
    /// The state the tick started from
    pub from: S,
    /// The input symbol consumed
    pub input: I,
    /// The output symbol emitted
    pub output: O,
    /// The state the tick produced
    pub to: S,
    /// When the tick executed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only trace of a controller run.
///
/// The trace is immutable - [`record`](TickTrace::record) returns a new
/// trace with the tick appended, leaving the original untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TickTrace<S: State, I: Symbol, O: Symbol> {
    records: Vec<TickRecord<S, I, O>>,
}

impl<S: State, I: Symbol, O: Symbol> Default for TickTrace<S, I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Symbol, O: Symbol> TickTrace<S, I, O> {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a tick, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the record appended.
    pub fn record(&self, record: TickRecord<S, I, O>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get all tick records in run order.
    pub fn records(&self) -> &[TickRecord<S, I, O>] {
        &self.records
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the starting state, then
    /// the `to` state of each tick.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Get the output symbols emitted, one per tick, in run order.
    pub fn outputs(&self) -> Vec<&O> {
        self.records.iter().map(|record| &record.output).collect()
    }

    /// Calculate total duration from first to last tick.
    ///
    /// Returns `None` if the trace is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

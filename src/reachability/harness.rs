//! The reachability harness.

use crate::core::{Controller, InvalidSymbol, State, StateSpace, Symbol};
use crate::reachability::report::ReachabilityReport;
use std::collections::VecDeque;

/// Drives a controller over chosen input sequences and accumulates the
/// set of states and outputs actually observed.
///
/// The observation record is monotonic: across one harness session the
/// observed sets only grow, and re-running an already-explored sequence
/// changes neither set. The record is compared against the declared
/// universe and alphabet when [`report`](ReachabilityHarness::report) is
/// called; the harness itself never mutates controller state directly -
/// it only calls `reset` and `step`, which is all the purity it needs to
/// replay sequences deterministically.
///
/// # Example
///
/// ```rust
/// use lockstep::builder::{entry, hold, ControllerBuilder};
/// use lockstep::reachability::ReachabilityHarness;
/// use lockstep::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Light { Red, Green, Flashing }
/// }
///
/// symbol_enum! {
///     enum Pulse { Hold => '0', Advance => '1' }
/// }
///
/// symbol_enum! {
///     enum Color { Red => 'R', Green => 'G', Flash => 'F' }
/// }
///
/// // Nothing transitions into Flashing, so it is declared but dead.
/// let controller = ControllerBuilder::new()
///     .reset_state(Light::Red)
///     .entries(vec![
///         entry(Light::Red, Pulse::Advance, Light::Green, Color::Green),
///         entry(Light::Green, Pulse::Advance, Light::Red, Color::Red),
///         hold(Light::Red, Pulse::Hold, Color::Red),
///         hold(Light::Green, Pulse::Hold, Color::Green),
///         entry(Light::Flashing, Pulse::Advance, Light::Red, Color::Red),
///         hold(Light::Flashing, Pulse::Hold, Color::Flash),
///     ])
///     .build()
///     .unwrap();
///
/// let mut harness = ReachabilityHarness::new(controller);
/// harness.explore(8);
///
/// let report = harness.report();
/// assert!(report.is_exhaustive());
/// assert_eq!(report.unreachable_states, vec![Light::Flashing]);
/// assert_eq!(report.unreachable_outputs, vec![Color::Flash]);
/// ```
pub struct ReachabilityHarness<C: Controller> {
    controller: C,
    observed_states: Vec<C::State>,
    observed_outputs: Vec<C::Output>,
    bound_exhausted: bool,
}

impl<C: Controller> ReachabilityHarness<C>
where
    C::State: StateSpace,
{
    /// Create a harness with an empty observation record.
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            observed_states: Vec::new(),
            observed_outputs: Vec::new(),
            bound_exhausted: false,
        }
    }

    /// Bounded breadth-first exploration from the reset state.
    ///
    /// At each explored state, every symbol in the input alphabet is
    /// applied and the resulting `(state', output)` recorded; newly seen
    /// states join the frontier. Exploration covers every input sequence
    /// of length at most `max_depth` and stops when no new states remain
    /// or the bound cuts the frontier off. The bound is required because
    /// nothing guarantees the state space is small without domain
    /// knowledge; hitting it is recorded as a report caveat, never a
    /// failure.
    pub fn explore(&mut self, max_depth: usize) {
        let start = self.controller.reset();
        self.observe_state(start.clone());

        let mut visited = vec![start.clone()];
        let mut frontier = VecDeque::new();
        frontier.push_back((start, 0usize));

        while let Some((state, depth)) = frontier.pop_front() {
            if depth == max_depth {
                // Successors of this state were never examined, so the
                // reachable set may extend past what we saw.
                self.bound_exhausted = true;
                continue;
            }

            for input in C::Input::alphabet() {
                let (next, output) = self.controller.step(&state, &input);
                self.observe_output(output);

                if !visited.contains(&next) {
                    log::debug!(
                        "discovered state '{}' at depth {}",
                        next.name(),
                        depth + 1
                    );
                    visited.push(next.clone());
                    self.observe_state(next.clone());
                    frontier.push_back((next, depth + 1));
                }
            }
        }
    }

    /// Drive one caller-supplied representative sequence from the reset
    /// state, observing every state and output along the way.
    pub fn replay(&mut self, inputs: &[C::Input]) {
        let mut state = self.controller.reset();
        self.observe_state(state.clone());

        for input in inputs {
            let (next, output) = self.controller.step(&state, input);
            self.observe_output(output);
            self.observe_state(next.clone());
            state = next;
        }
    }

    /// Decode a raw token string and replay it.
    ///
    /// The whole string is decoded before anything runs: a bad token
    /// observes nothing, since a partially observed sequence would
    /// corrupt the record.
    pub fn replay_raw(&mut self, raw: &str) -> Result<(), InvalidSymbol> {
        let inputs = raw
            .chars()
            .map(C::Input::decode)
            .collect::<Result<Vec<_>, _>>()?;
        self.replay(&inputs);
        Ok(())
    }

    /// Snapshot the record against the declared universe and alphabet.
    ///
    /// Computing a report neither consumes nor shrinks the record.
    pub fn report(&self) -> ReachabilityReport<C::State, C::Output> {
        let unreachable_states = <C::State as StateSpace>::universe()
            .into_iter()
            .filter(|state| !self.observed_states.contains(state))
            .collect();
        let unreachable_outputs = <C::Output as Symbol>::alphabet()
            .into_iter()
            .filter(|output| !self.observed_outputs.contains(output))
            .collect();

        ReachabilityReport {
            observed_states: self.observed_states.clone(),
            observed_outputs: self.observed_outputs.clone(),
            unreachable_states,
            unreachable_outputs,
            bound_exhausted: self.bound_exhausted,
        }
    }

    fn observe_state(&mut self, state: C::State) {
        if !self.observed_states.contains(&state) {
            self.observed_states.push(state);
        }
    }

    fn observe_output(&mut self, output: C::Output) {
        if !self.observed_outputs.contains(&output) {
            self.observed_outputs.push(output);
        }
    }
}

//! The tick driver.

use crate::core::{Controller, State, Symbol, TickRecord, TickTrace};
use crate::driver::error::DriverError;
use crate::driver::pacing::Pacing;
use chrono::Utc;

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunOutcome<C: Controller> {
    /// One output symbol per consumed input token, in input order.
    pub outputs: Vec<C::Output>,
    /// The state the controller was left in.
    pub final_state: C::State,
    /// The full tick-by-tick trace of the run.
    pub trace: TickTrace<C::State, C::Input, C::Output>,
}

/// Sequences ticks against a controller, one per input token.
///
/// The driver owns no controller-specific knowledge: it primes the
/// controller with [`reset`](Controller::reset), then for each raw token
/// in order it paces, decodes the token against the input alphabet, and
/// invokes [`step`](Controller::step), surfacing the output before
/// advancing. All loop state is local to the call - nothing persists in
/// the driver between runs.
///
/// Decoding is fail-fast: the first token outside the alphabet aborts the
/// run with [`DriverError::InvalidSymbol`]. Outputs for prior positions
/// have already been surfaced; nothing is emitted for the bad position or
/// beyond, and no default symbol is ever substituted.
///
/// # Example
///
/// ```rust
/// use lockstep::builder::{entry, ControllerBuilder};
/// use lockstep::core::Symbol;
/// use lockstep::driver::TickDriver;
/// use lockstep::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Gate { Closed, Open }
/// }
///
/// symbol_enum! {
///     enum Cmd { Hold => '0', Toggle => '1' }
/// }
///
/// symbol_enum! {
///     enum Ack { Shut => 'S', Ajar => 'A' }
/// }
///
/// let controller = ControllerBuilder::new()
///     .reset_state(Gate::Closed)
///     .entries(vec![
///         entry(Gate::Closed, Cmd::Toggle, Gate::Open, Ack::Ajar),
///         entry(Gate::Open, Cmd::Toggle, Gate::Closed, Ack::Shut),
///         entry(Gate::Closed, Cmd::Hold, Gate::Closed, Ack::Shut),
///         entry(Gate::Open, Cmd::Hold, Gate::Open, Ack::Ajar),
///     ])
///     .build()
///     .unwrap();
///
/// let driver = TickDriver::new(controller);
/// let outcome = driver.run("1101").unwrap();
///
/// let rendered: String = outcome.outputs.iter().map(|o| o.glyph()).collect();
/// assert_eq!(rendered, "ASSA");
/// ```
pub struct TickDriver<C: Controller> {
    controller: C,
    pacing: Pacing,
}

impl<C: Controller> TickDriver<C> {
    /// Create a driver with no inter-tick pacing.
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            pacing: Pacing::None,
        }
    }

    /// Set the pacing policy.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Access the driven controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Run the driver over a raw token stream.
    pub fn run(&self, raw: &str) -> Result<RunOutcome<C>, DriverError> {
        self.run_with(raw, |_| {})
    }

    /// Run the driver, surfacing each output to `observe` before the
    /// driver advances to the next token.
    pub fn run_with<F>(&self, raw: &str, mut observe: F) -> Result<RunOutcome<C>, DriverError>
    where
        F: FnMut(&C::Output),
    {
        let mut state = self.controller.reset();
        let mut outputs = Vec::with_capacity(raw.len());
        let mut trace = TickTrace::new();

        for (position, token) in raw.chars().enumerate() {
            self.pacing.pause_before(position);

            let input = C::Input::decode(token)
                .map_err(|source| DriverError::InvalidSymbol { position, source })?;

            let (next, output) = self.controller.step(&state, &input);
            log::trace!(
                "tick {}: {} --{}--> {}",
                position,
                state.name(),
                token,
                next.name()
            );

            trace = trace.record(TickRecord {
                tick: position,
                from: state,
                input,
                output: output.clone(),
                to: next.clone(),
                timestamp: Utc::now(),
            });

            observe(&output);
            outputs.push(output);
            state = next;
        }

        Ok(RunOutcome {
            outputs,
            final_state: state,
            trace,
        })
    }
}

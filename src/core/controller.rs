//! The controller capability interface.

use crate::core::alphabet::Symbol;
use crate::core::state::State;

/// A deterministic, tick-synchronous reactive controller.
///
/// A controller is anything that can be primed to a starting state and
/// then advanced one tick at a time: each tick consumes exactly one input
/// symbol and produces exactly one output symbol, with no hidden
/// buffering. The driver and the reachability harness know a controller
/// only through this interface, so any concrete machine — a table built
/// with [`ControllerBuilder`](crate::builder::ControllerBuilder), a
/// hand-written match, a generated transition function — can stand behind
/// it without touching either of them.
///
/// # The tick contract
///
/// - [`reset`](Controller::reset) is the priming call: deterministic,
///   side-effect free, consuming no input and emitting no output.
/// - [`step`](Controller::step) is pure and **total** over alphabet-valid
///   inputs. Every `(state, input)` pair maps to a defined
///   `(state', output)` — a pair the author never modeled must still land
///   somewhere (typically a self-loop with an idle output), because a tick
///   is never silently dropped.
/// - No hidden state beyond the returned `state'` may influence the next
///   call. Replaying any prefix of an input sequence therefore reproduces
///   identical intermediate states, which is what lets the harness explore
///   without rewinding anything.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{Controller, State, Symbol};
/// use lockstep::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Toggle { Off, On }
/// }
///
/// symbol_enum! {
///     enum Command { Stay => '0', Flip => '1' }
/// }
///
/// symbol_enum! {
///     enum Level { Low => 'L', High => 'H' }
/// }
///
/// struct ToggleUnit;
///
/// impl Controller for ToggleUnit {
///     type State = Toggle;
///     type Input = Command;
///     type Output = Level;
///
///     fn reset(&self) -> Toggle {
///         Toggle::Off
///     }
///
///     fn step(&self, state: &Toggle, input: &Command) -> (Toggle, Level) {
///         let next = match (state, input) {
///             (Toggle::Off, Command::Flip) => Toggle::On,
///             (Toggle::On, Command::Flip) => Toggle::Off,
///             (current, Command::Stay) => current.clone(),
///         };
///         let output = match next {
///             Toggle::Off => Level::Low,
///             Toggle::On => Level::High,
///         };
///         (next, output)
///     }
/// }
///
/// let unit = ToggleUnit;
/// let state = unit.reset();
/// let (state, output) = unit.step(&state, &Command::Flip);
/// assert_eq!(state, Toggle::On);
/// assert_eq!(output, Level::High);
/// ```
pub trait Controller: Send + Sync {
    /// The controller's state type.
    type State: State;
    /// The input alphabet.
    type Input: Symbol;
    /// The output alphabet.
    type Output: Symbol;

    /// Produce the canonical starting state.
    ///
    /// This is the priming call of the startup contract: it must be made
    /// once before the first real tick, takes no input, and emits no
    /// output.
    fn reset(&self) -> Self::State;

    /// Advance one tick: consume one input symbol, produce the successor
    /// state and one output symbol.
    fn step(&self, state: &Self::State, input: &Self::Input) -> (Self::State, Self::Output);
}

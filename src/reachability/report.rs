//! Reachability reports and findings.

use crate::core::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single verification finding.
///
/// Findings are not execution errors: they flag declared-but-unreachable
/// states or outputs for a human reviewer, since dead states in a
/// generated controller are evidence of dead logic or of a specification
/// that permits states no input sequence can exercise.
#[derive(Clone, Debug, PartialEq)]
pub enum Finding<S: State, O: Symbol> {
    /// A declared state no explored input sequence ever reached.
    UnreachableState(S),
    /// A declared output no explored input sequence ever produced.
    UnreachableOutput(O),
}

impl<S: State, O: Symbol> fmt::Display for Finding<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnreachableState(state) => {
                write!(f, "declared state '{}' was never reached", state.name())
            }
            Finding::UnreachableOutput(output) => {
                write!(f, "declared output '{}' was never produced", output.glyph())
            }
        }
    }
}

/// The harness's sole externally visible result.
///
/// Observed sets are everything the exploration actually saw; unreachable
/// sets are the declared complement. A report only claims unreachability
/// *within the explored bound*: when `bound_exhausted` is set, states
/// beyond the bound were never examined, and the unreachable sets are
/// findings to review, not proofs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ReachabilityReport<S: State, O: Symbol> {
    /// Every state observed, in discovery order.
    pub observed_states: Vec<S>,
    /// Every output observed, in discovery order.
    pub observed_outputs: Vec<O>,
    /// Declared states never observed.
    pub unreachable_states: Vec<S>,
    /// Declared outputs never observed.
    pub unreachable_outputs: Vec<O>,
    /// Whether exploration hit its depth bound before the reachable set
    /// was exhausted.
    pub bound_exhausted: bool,
}

impl<S: State, O: Symbol> ReachabilityReport<S, O> {
    /// Whether every declared state and output was observed.
    pub fn is_clean(&self) -> bool {
        self.unreachable_states.is_empty() && self.unreachable_outputs.is_empty()
    }

    /// Whether exploration drained the reachable set within its bound.
    ///
    /// When this is `false`, unreachability findings hold only up to the
    /// explored depth.
    pub fn is_exhaustive(&self) -> bool {
        !self.bound_exhausted
    }

    /// All findings, states first. Accumulates every finding rather than
    /// stopping at the first.
    pub fn findings(&self) -> Vec<Finding<S, O>> {
        let states = self
            .unreachable_states
            .iter()
            .cloned()
            .map(Finding::UnreachableState);
        let outputs = self
            .unreachable_outputs
            .iter()
            .cloned()
            .map(Finding::UnreachableOutput);
        states.chain(outputs).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateSpace;
    use crate::{state_enum, symbol_enum};

    state_enum! {
        enum Light {
            Red,
            Green,
            Flashing,
        }
    }

    symbol_enum! {
        enum Color {
            Red => 'R',
            Green => 'G',
            Flash => 'F',
        }
    }

    fn report() -> ReachabilityReport<Light, Color> {
        ReachabilityReport {
            observed_states: vec![Light::Red, Light::Green],
            observed_outputs: vec![Color::Red, Color::Green],
            unreachable_states: vec![Light::Flashing],
            unreachable_outputs: vec![Color::Flash],
            bound_exhausted: false,
        }
    }

    #[test]
    fn findings_accumulate_states_then_outputs() {
        let findings = report().findings();
        assert_eq!(
            findings,
            vec![
                Finding::UnreachableState(Light::Flashing),
                Finding::UnreachableOutput(Color::Flash),
            ]
        );
    }

    #[test]
    fn findings_render_for_review() {
        let findings = report().findings();
        assert_eq!(
            findings[0].to_string(),
            "declared state 'Flashing' was never reached"
        );
        assert_eq!(
            findings[1].to_string(),
            "declared output 'F' was never produced"
        );
    }

    #[test]
    fn clean_report_has_no_findings() {
        let clean = ReachabilityReport::<Light, Color> {
            observed_states: Light::universe(),
            observed_outputs: Color::alphabet(),
            unreachable_states: vec![],
            unreachable_outputs: vec![],
            bound_exhausted: false,
        };

        assert!(clean.is_clean());
        assert!(clean.findings().is_empty());
    }

    #[test]
    fn bound_exhaustion_is_part_of_the_contract() {
        let mut capped = report();
        capped.bound_exhausted = true;

        assert!(!capped.is_exhaustive());
    }

    #[test]
    fn report_serializes_correctly() {
        let report = report();
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ReachabilityReport<Light, Color> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.observed_states, report.observed_states);
        assert_eq!(deserialized.unreachable_outputs, report.unreachable_outputs);
        assert!(!deserialized.bound_exhausted);
    }
}

//! Controller state traits.
//!
//! A controller's state is an opaque value that fully determines its
//! future behavior. States are created by `reset`, replaced on every
//! tick, and discarded at shutdown; they are never persisted across runs
//! and never mutated outside the transition engine.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for controller states.
///
/// All methods are pure. States are immutable values; advancing the
/// machine produces a new state rather than mutating the old one.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for trace recording
/// - `PartialEq`: States must be comparable, which is what lets the
///   reachability harness report state-level (not just output-level)
///   coverage
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for reports
///
/// # Example
///
/// ```rust
/// use lockstep::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
///     Yellow,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///             Self::Yellow => "Yellow",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// A state type with a declared, finite universe.
///
/// The universe is the full set of states the controller's author declared,
/// whether or not every member can actually be reached. The reachability
/// harness subtracts its observations from this set to find dead states.
///
/// The [`state_enum!`](crate::state_enum) macro generates this impl for
/// simple enums, listing every variant.
pub trait StateSpace: State {
    /// Every declared state, in declaration order.
    fn universe() -> Vec<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Red => "Red",
                Self::Green => "Green",
                Self::Yellow => "Yellow",
            }
        }
    }

    impl StateSpace for Light {
        fn universe() -> Vec<Self> {
            vec![Self::Red, Self::Green, Self::Yellow]
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Light::Red.name(), "Red");
        assert_eq!(Light::Green.name(), "Green");
        assert_eq!(Light::Yellow.name(), "Yellow");
    }

    #[test]
    fn universe_lists_every_declared_state() {
        let universe = Light::universe();
        assert_eq!(universe.len(), 3);
        assert!(universe.contains(&Light::Red));
        assert!(universe.contains(&Light::Green));
        assert!(universe.contains(&Light::Yellow));
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(Light::Red, Light::Red);
        assert_ne!(Light::Red, Light::Green);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = Light::Yellow;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Light = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

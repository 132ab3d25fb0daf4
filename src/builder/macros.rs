//! Macros for declaring state spaces and symbol alphabets.

/// Generate `State` and `StateSpace` trait implementations for simple enums.
///
/// Every variant becomes a member of the declared state universe, whether
/// or not the transition table can actually reach it - that gap is exactly
/// what the reachability harness reports.
///
/// # Example
///
/// ```
/// use lockstep::core::StateSpace;
/// use lockstep::state_enum;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// assert_eq!(Light::universe().len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::StateSpace for $name {
            fn universe() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }
        }
    };
}

/// Generate a `Symbol` trait implementation for simple enums.
///
/// Each variant is declared with its presentation glyph; decoding is
/// derived from the glyph map, so the alphabet stays closed by
/// construction.
///
/// # Example
///
/// ```
/// use lockstep::core::Symbol;
/// use lockstep::symbol_enum;
///
/// symbol_enum! {
///     pub enum Pulse {
///         Hold => '0',
///         Advance => '1',
///     }
/// }
///
/// assert_eq!(Pulse::Advance.glyph(), '1');
/// assert_eq!(Pulse::decode('0'), Ok(Pulse::Hold));
/// assert!(Pulse::decode('9').is_err());
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $glyph:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Symbol for $name {
            fn glyph(&self) -> char {
                match self {
                    $(Self::$variant => $glyph),*
                }
            }

            fn alphabet() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }
        }
    };
}

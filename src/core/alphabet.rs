//! Closed symbol alphabets for controller inputs and outputs.
//!
//! Every value a controller consumes or emits is a member of a finite
//! alphabet declared once at configuration time. Nothing in this library
//! accepts or produces a value outside its alphabet; that closedness is
//! what makes reachability analysis decidable.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// A raw token that is not a member of the declared alphabet.
///
/// Raised at decode time, before the token reaches a controller. Callers
/// must treat this as fatal for the run: substituting a default symbol
/// would corrupt any reachability record derived from the run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("token '{raw}' is not a member of the declared alphabet")]
pub struct InvalidSymbol {
    /// The offending raw token.
    pub raw: char,
}

/// Trait for members of a closed, finite symbol alphabet.
///
/// Input and output symbols both implement this trait. The alphabet is
/// declared once via [`Symbol::alphabet`] and never discovered at runtime.
///
/// # Required Traits
///
/// - `Clone`: Symbols must be cloneable for trace recording
/// - `PartialEq`: Symbols must be comparable for decoding and observation
/// - `Debug`: Symbols must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Symbols must be serializable for reports
///
/// # Example
///
/// ```rust
/// use lockstep::core::Symbol;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Pulse {
///     Hold,
///     Advance,
/// }
///
/// impl Symbol for Pulse {
///     fn glyph(&self) -> char {
///         match self {
///             Self::Hold => '0',
///             Self::Advance => '1',
///         }
///     }
///
///     fn alphabet() -> Vec<Self> {
///         vec![Self::Hold, Self::Advance]
///     }
/// }
///
/// assert_eq!(Pulse::decode('1'), Ok(Pulse::Advance));
/// assert!(Pulse::decode('2').is_err());
/// ```
///
/// The [`symbol_enum!`](crate::symbol_enum) macro generates this impl for
/// simple enums.
pub trait Symbol:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The presentation form of this symbol. Total: every member has one.
    fn glyph(&self) -> char;

    /// The full membership of the alphabet, in declaration order.
    fn alphabet() -> Vec<Self>;

    /// Decode a raw token into an alphabet member.
    ///
    /// Fails with [`InvalidSymbol`] when `raw` matches no member's glyph.
    fn decode(raw: char) -> Result<Self, InvalidSymbol> {
        Self::alphabet()
            .into_iter()
            .find(|symbol| symbol.glyph() == raw)
            .ok_or(InvalidSymbol { raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Digit {
        Zero,
        One,
    }

    impl Symbol for Digit {
        fn glyph(&self) -> char {
            match self {
                Self::Zero => '0',
                Self::One => '1',
            }
        }

        fn alphabet() -> Vec<Self> {
            vec![Self::Zero, Self::One]
        }
    }

    #[test]
    fn decode_accepts_alphabet_members() {
        assert_eq!(Digit::decode('0'), Ok(Digit::Zero));
        assert_eq!(Digit::decode('1'), Ok(Digit::One));
    }

    #[test]
    fn decode_rejects_foreign_tokens() {
        let err = Digit::decode('2').unwrap_err();
        assert_eq!(err, InvalidSymbol { raw: '2' });
    }

    #[test]
    fn invalid_symbol_names_the_token() {
        let err = Digit::decode('x').unwrap_err();
        assert_eq!(
            err.to_string(),
            "token 'x' is not a member of the declared alphabet"
        );
    }

    #[test]
    fn glyph_is_total_over_the_alphabet() {
        for symbol in Digit::alphabet() {
            let glyph = symbol.glyph();
            assert_eq!(Digit::decode(glyph), Ok(symbol));
        }
    }

    #[test]
    fn alphabet_preserves_declaration_order() {
        assert_eq!(Digit::alphabet(), vec![Digit::Zero, Digit::One]);
    }

    #[test]
    fn symbol_serializes_correctly() {
        let symbol = Digit::One;
        let json = serde_json::to_string(&symbol).unwrap();
        let deserialized: Digit = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, deserialized);
    }
}

//! Driver error types.

use crate::core::InvalidSymbol;
use thiserror::Error;

/// Errors that can abort a driver run.
///
/// The driver fails fast: the first bad token ends the run with the
/// outputs for prior positions already surfaced and nothing emitted for
/// the bad position or beyond. Nothing is retried - the machine is
/// deterministic, so an identical rerun reproduces an identical error.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A raw token outside the input alphabet was encountered.
    #[error("invalid input token at position {position}: {source}")]
    InvalidSymbol {
        /// Zero-based position of the offending token in the input stream.
        position: usize,
        #[source]
        source: InvalidSymbol,
    },
}

//! Error types for chronopack codecs

use thiserror::Error;

/// Codec errors
///
/// Every variant is deterministic for a given input; retrying a failed
/// encode or decode without changing the input cannot succeed, so callers
/// decide whether to abort or attribute the failure to a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Text matches neither the canonical pattern nor an accepted fallback
    #[error("cannot parse {text:?} as {kind}: expected pattern {pattern}")]
    Parse {
        text: String,
        kind: &'static str,
        pattern: &'static str,
    },

    /// Scalar has the wrong underlying representation
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Epoch milliseconds outside the representable calendar range
    #[error("epoch milliseconds {millis} outside representable range")]
    Range { millis: i64 },

    /// A temporal value could not be rendered to its canonical pattern
    #[error("cannot format {kind} value: {reason}")]
    Format { kind: &'static str, reason: String },
}

/// Result type for chronopack operations
pub type CodecResult<T> = Result<T, CodecError>;

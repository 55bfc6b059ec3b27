//! # Error Types
//!
//! Construction failures for core primitives. Field-level validation
//! errors live in `luxqr-schema` and payload decoding errors live in
//! `luxqr-codec`; the two taxonomies are never merged.

use thiserror::Error;

/// Error raised when a core primitive cannot be constructed from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LuxqrError {
    /// A string is not a member of a closed value set.
    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant {
        /// Name of the value set (e.g. `"category"`).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A string is not an RFC 3339 absolute timestamp.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A structured value that should be a key-value object is not one.
    #[error("expected a key-value object, got {0}")]
    NotAnObject(&'static str),
}

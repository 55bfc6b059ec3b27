//! Payload decoding errors. Kept apart from field validation errors.

use thiserror::Error;

/// Failure to decode pasted text into a candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not a JSON object.
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// What the decoder found instead.
        reason: String,
    },
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }
}

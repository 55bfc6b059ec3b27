//! # Payload Text
//!
//! `Payload` wraps the encoded text. The inner string is private: the only
//! way to get one is [`Codec::serialize()`](crate::Codec::serialize), so a
//! `Payload` is always a well-formed, declaration-ordered JSON object.

use std::fmt;

/// Byte size above which some scanners struggle to read the rendered code.
pub const RECOMMENDED_MAX_PAYLOAD_BYTES: usize = 2000;

/// Encoded product record, ready for a barcode renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Payload(String);

impl Payload {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    /// The payload text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 byte size of the payload.
    pub fn len_bytes(&self) -> usize {
        self.0.len()
    }

    /// Consume the payload and return the text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns a warning if the payload is larger than `limit` bytes.
    pub fn size_warning(&self, limit: usize) -> Option<SizeWarning> {
        let size = self.len_bytes();
        (size > limit).then_some(SizeWarning { size, limit })
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Payload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A payload exceeded the scan-reliability threshold. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeWarning {
    /// Actual payload size in bytes.
    pub size: usize,
    /// The threshold that was exceeded.
    pub limit: usize,
}

impl fmt::Display for SizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "QR code contains a large amount of data ({} bytes, over {}). \
             Some scanners may have difficulty reading it.",
            self.size, self.limit
        )
    }
}

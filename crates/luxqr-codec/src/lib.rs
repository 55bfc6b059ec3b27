//! # luxqr-codec: Payload Encoding
//!
//! The payload is the only form of a product record that leaves the
//! process: it is handed to a barcode renderer, or pasted back in by a
//! reader. This crate owns both directions.
//!
//! - [`Codec::serialize()`] stamps `generatedAt` once and emits a compact
//!   JSON object with keys in field declaration order.
//! - [`Codec::parse()`] turns pasted text back into a [`Candidate`],
//!   keeping every key it finds, known or not.
//!
//! ## Crate Policy
//!
//! - Depends only on `luxqr-core` internally. Never on `luxqr-schema`:
//!   the codec enforces shape, the schema enforces meaning.
//! - Serializing never fails and never validates.
//! - Parsing fails only when the text is not a JSON object.
//! - The only side effect is reading the injected [`Clock`].
//!
//! [`Candidate`]: luxqr_core::Candidate
//! [`Clock`]: luxqr_core::Clock

pub mod codec;
pub mod error;
pub mod payload;

pub use codec::{parse, serialize, Codec};
pub use error::ParseError;
pub use payload::{Payload, SizeWarning, RECOMMENDED_MAX_PAYLOAD_BYTES};

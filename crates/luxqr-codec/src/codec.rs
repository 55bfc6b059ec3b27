//! # Codec
//!
//! ## Wire Format
//!
//! A compact JSON object, one member per present field:
//!
//! ```text
//! {"productName":"Tote","sku":"HB-1","brand":"Maison","category":"Handbags","generatedAt":"2026-01-15T12:00:00Z"}
//! ```
//!
//! - Keys appear in field declaration order, `generatedAt` last.
//! - Values are JSON strings, except `warrantyMonths` which is an integer.
//! - Absent fields are omitted. An empty string is emitted as `""`.
//!
//! The workspace builds serde_json with `preserve_order`, so a `Map` keeps
//! members in insertion order.

use luxqr_core::{Candidate, Clock, ProductRecord, SystemClock};
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::payload::Payload;

/// Encodes records into payloads and decodes pasted text into candidates.
///
/// `C` is the time source used to stamp `generatedAt`.
#[derive(Debug, Clone, Default)]
pub struct Codec<C: Clock = SystemClock> {
    clock: C,
}

impl Codec<SystemClock> {
    /// A codec that stamps with the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Codec<C> {
    /// A codec that stamps with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Encode `record` as a payload.
    ///
    /// Stamps `generatedAt` on the record in place if it has none; a record
    /// that is already stamped keeps its stamp. Does not validate.
    pub fn serialize(&self, record: &mut ProductRecord) -> Payload {
        if record.generated_at().is_none() {
            let at = record.stamp_once(self.clock.now()).to_timestamp();
            tracing::debug!(generated_at = %at, sku = %record.sku, "stamped record");
        }
        Payload::new(encode_entries(record))
    }

    /// Decode pasted text into a candidate.
    ///
    /// Surrounding whitespace is ignored. Every key in the object is kept,
    /// including keys this version does not know.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedPayload`] if the text is not valid JSON
    /// or is valid JSON but not an object.
    pub fn parse(&self, text: &str) -> Result<Candidate, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("rejected empty payload");
            return Err(ParseError::malformed("empty input"));
        }
        let value: Value = serde_json::from_str(trimmed).map_err(|e| {
            tracing::debug!(error = %e, "payload is not JSON");
            ParseError::malformed(e.to_string())
        })?;
        let candidate = Candidate::from_value(value).map_err(|e| {
            tracing::debug!(error = %e, "payload is not an object");
            ParseError::malformed(e.to_string())
        })?;
        tracing::debug!(
            keys = candidate.len(),
            unknown = candidate.unknown_keys().len(),
            "parsed payload"
        );
        Ok(candidate)
    }
}

/// Encode `record` with the system clock. See [`Codec::serialize()`].
pub fn serialize(record: &mut ProductRecord) -> Payload {
    Codec::new().serialize(record)
}

/// Decode pasted text. See [`Codec::parse()`].
pub fn parse(text: &str) -> Result<Candidate, ParseError> {
    Codec::new().parse(text)
}

fn encode_entries(record: &ProductRecord) -> String {
    let members: Map<String, Value> = record
        .entries()
        .into_iter()
        .map(|(field, value)| (field.as_str().to_string(), value))
        .collect();
    Value::Object(members).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxqr_core::{Category, EventDate, FixedClock, Timestamp};
    use serde_json::json;

    fn clock(s: &str) -> FixedClock {
        FixedClock(Timestamp::parse(s).unwrap())
    }

    fn minimal() -> ProductRecord {
        ProductRecord::new("Tote", "HB-1", "Maison", Category::Handbags)
    }

    #[test]
    fn test_minimal_record_wire_text() {
        let codec = Codec::with_clock(clock("2026-01-15T12:00:00Z"));
        let payload = codec.serialize(&mut minimal());
        assert_eq!(
            payload.as_str(),
            r#"{"productName":"Tote","sku":"HB-1","brand":"Maison","category":"Handbags","generatedAt":"2026-01-15T12:00:00Z"}"#
        );
    }

    #[test]
    fn test_serialize_stamps_in_place() {
        let codec = Codec::with_clock(clock("2026-01-15T12:00:00Z"));
        let mut record = minimal();
        codec.serialize(&mut record);
        assert_eq!(
            record.generated_at().map(EventDate::to_timestamp),
            Some(Timestamp::parse("2026-01-15T12:00:00Z").unwrap())
        );
    }

    #[test]
    fn test_stamped_record_is_not_restamped() {
        let mut record = minimal();
        let first = Codec::with_clock(clock("2026-01-15T12:00:00Z")).serialize(&mut record);
        let second = Codec::with_clock(clock("2030-06-01T00:00:00Z")).serialize(&mut record);
        assert_eq!(first, second);
    }

    #[test]
    fn test_text_values_are_escaped() {
        let mut record = minimal();
        record.notes = Some("line one\n\"quoted\" \\ done".into());
        let payload = Codec::with_clock(clock("2026-01-15T12:00:00Z")).serialize(&mut record);
        let back: Value = serde_json::from_str(payload.as_str()).unwrap();
        assert_eq!(back["notes"], json!("line one\n\"quoted\" \\ done"));
    }

    #[test]
    fn test_empty_string_is_emitted_absent_is_not() {
        let mut record = minimal();
        record.customer_email = Some(String::new());
        let payload = Codec::with_clock(clock("2026-01-15T12:00:00Z")).serialize(&mut record);
        assert!(payload.as_str().contains(r#""customerEmail":"""#));
        assert!(!payload.as_str().contains("notes"));
        assert!(!payload.as_str().contains("null"));
    }

    #[test]
    fn test_parse_trims_pasted_whitespace() {
        let c = Codec::new().parse("  \n{\"sku\":\"A\"}\n\t").unwrap();
        assert_eq!(c.get("sku"), Some(&json!("A")));
    }

    #[test]
    fn test_parse_keeps_unknown_keys() {
        let c = parse(r#"{"sku":"A","colour":"red"}"#).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.unknown_keys(), vec!["colour"]);
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        for text in ["", "   ", "[1,2]", "42", "\"sku\"", "null", "{\"sku\":", "{sku: 1}"] {
            assert!(
                matches!(parse(text), Err(ParseError::MalformedPayload { .. })),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_does_not_check_meaning() {
        let c = parse(r#"{"category":"Bogus","warrantyMonths":-1}"#).unwrap();
        assert_eq!(c.len(), 2);
    }
}

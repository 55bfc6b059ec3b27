//! # Product Record
//!
//! The typed, validated shape of a single product. Required fields are
//! plain values; every optional field is an `Option<_>` so "not provided"
//! and "provided as empty text" remain distinct.
//!
//! `generatedAt` is not a public field. It can only be read, or set once
//! through [`ProductRecord::stamp_once()`] or [`ProductRecord::keep_stamp()`];
//! a record that already carries a stamp keeps it. A stamp read back from a
//! payload keeps its original text, fractional seconds and offset included.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::Field;
use crate::temporal::{EventDate, Timestamp};
use crate::vocabulary::{Category, QualityStatus, WarehouseAction};

/// A product record that passed schema validation (or was built in code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_name: String,
    pub sku: String,
    pub brand: String,
    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_date: Option<EventDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_batch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_material_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_check_status: Option<QualityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_inspector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_date: Option<EventDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialization_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_action: Option<WarehouseAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_sale_date: Option<EventDate>,
    /// Free text. No currency or locale is implied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    /// `Some("")` means the form field was left blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_months: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_at: Option<EventDate>,
}

impl ProductRecord {
    /// Create a record with the required fields set and every optional
    /// field absent.
    pub fn new(
        product_name: impl Into<String>,
        sku: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            sku: sku.into(),
            brand: brand.into(),
            category,
            description: None,
            manufacturing_date: None,
            manufacturing_batch: None,
            raw_material_source: None,
            quality_check_status: None,
            quality_inspector: None,
            packaging_date: None,
            packaging_location: None,
            serialization_number: None,
            transport_from: None,
            transport_to: None,
            transport_carrier: None,
            warehouse_location: None,
            warehouse_action: None,
            retailer_name: None,
            retailer_location: None,
            customer_sale_date: None,
            sale_price: None,
            customer_email: None,
            warranty_months: None,
            certificate_number: None,
            notes: None,
            generated_at: None,
        }
    }

    /// When the record was finalised for transport, if it has been.
    pub fn generated_at(&self) -> Option<&EventDate> {
        self.generated_at.as_ref()
    }

    /// Mint a stamp at `at` unless one is already present.
    ///
    /// Minted stamps are rendered in `Z` form at second precision. Returns
    /// the stamp the record carries afterwards.
    pub fn stamp_once(&mut self, at: Timestamp) -> &EventDate {
        self.generated_at.get_or_insert_with(|| EventDate::from_timestamp(at))
    }

    /// Keep a stamp read from a payload, verbatim, unless one is already
    /// present.
    pub fn keep_stamp(&mut self, stamp: EventDate) -> &EventDate {
        self.generated_at.get_or_insert(stamp)
    }

    /// Present fields as `(field, wire value)` pairs in declaration order.
    ///
    /// Text, dates and enumerations become JSON strings; `warrantyMonths`
    /// becomes a JSON integer. Absent fields are skipped.
    pub fn entries(&self) -> Vec<(Field, Value)> {
        let mut out = Vec::with_capacity(crate::field::FIELD_COUNT);
        for field in Field::all() {
            if let Some(value) = self.wire_value(*field) {
                out.push((*field, value));
            }
        }
        out
    }

    /// The wire value of a single field, or `None` when absent.
    pub fn wire_value(&self, field: Field) -> Option<Value> {
        fn text(v: &Option<String>) -> Option<Value> {
            v.as_ref().map(|s| Value::String(s.clone()))
        }
        fn date(v: &Option<EventDate>) -> Option<Value> {
            v.as_ref().map(|d| Value::String(d.as_str().to_string()))
        }

        match field {
            Field::ProductName => Some(Value::String(self.product_name.clone())),
            Field::Sku => Some(Value::String(self.sku.clone())),
            Field::Brand => Some(Value::String(self.brand.clone())),
            Field::Category => Some(Value::String(self.category.as_str().to_string())),
            Field::Description => text(&self.description),
            Field::ManufacturingDate => date(&self.manufacturing_date),
            Field::ManufacturingBatch => text(&self.manufacturing_batch),
            Field::RawMaterialSource => text(&self.raw_material_source),
            Field::QualityCheckStatus => self
                .quality_check_status
                .map(|s| Value::String(s.as_str().to_string())),
            Field::QualityInspector => text(&self.quality_inspector),
            Field::PackagingDate => date(&self.packaging_date),
            Field::PackagingLocation => text(&self.packaging_location),
            Field::SerializationNumber => text(&self.serialization_number),
            Field::TransportFrom => text(&self.transport_from),
            Field::TransportTo => text(&self.transport_to),
            Field::TransportCarrier => text(&self.transport_carrier),
            Field::WarehouseLocation => text(&self.warehouse_location),
            Field::WarehouseAction => self
                .warehouse_action
                .map(|a| Value::String(a.as_str().to_string())),
            Field::RetailerName => text(&self.retailer_name),
            Field::RetailerLocation => text(&self.retailer_location),
            Field::CustomerSaleDate => date(&self.customer_sale_date),
            Field::SalePrice => text(&self.sale_price),
            Field::CustomerEmail => text(&self.customer_email),
            Field::WarrantyMonths => self.warranty_months.map(Value::from),
            Field::CertificateNumber => text(&self.certificate_number),
            Field::Notes => text(&self.notes),
            Field::GeneratedAt => date(&self.generated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> ProductRecord {
        ProductRecord::new("Tote", "HB-1", "Maison", Category::Handbags)
    }

    #[test]
    fn test_new_has_only_required_entries() {
        let fields: Vec<Field> = minimal().entries().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, Field::REQUIRED);
    }

    #[test]
    fn test_entries_follow_declaration_order() {
        let mut r = minimal();
        r.notes = Some("last".into());
        r.description = Some("first optional".into());
        r.warranty_months = Some(12);
        let fields: Vec<Field> = r.entries().into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                Field::ProductName,
                Field::Sku,
                Field::Brand,
                Field::Category,
                Field::Description,
                Field::WarrantyMonths,
                Field::Notes,
            ]
        );
    }

    #[test]
    fn test_empty_string_is_an_entry() {
        let mut r = minimal();
        r.customer_email = Some(String::new());
        assert_eq!(r.wire_value(Field::CustomerEmail), Some(json!("")));
        assert_eq!(r.wire_value(Field::Notes), None);
    }

    #[test]
    fn test_warranty_is_an_integer_on_the_wire() {
        let mut r = minimal();
        r.warranty_months = Some(24);
        assert_eq!(r.wire_value(Field::WarrantyMonths), Some(json!(24)));
    }

    #[test]
    fn test_stamp_once_keeps_first_stamp() {
        let first = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let second = Timestamp::parse("2026-02-01T00:00:00Z").unwrap();
        let mut r = minimal();
        assert_eq!(r.generated_at(), None);
        assert_eq!(r.stamp_once(first).to_timestamp(), first);
        assert_eq!(r.stamp_once(second).to_timestamp(), first);
        assert_eq!(r.generated_at().map(EventDate::to_timestamp), Some(first));
        assert_eq!(
            r.wire_value(Field::GeneratedAt),
            Some(json!("2026-01-15T12:00:00Z"))
        );
    }

    #[test]
    fn test_kept_stamp_is_not_reformatted() {
        let kept = EventDate::parse("2024-06-15T10:20:30.456Z").unwrap();
        let mut r = minimal();
        assert_eq!(r.keep_stamp(kept.clone()), &kept);
        r.stamp_once(Timestamp::parse("2026-01-15T12:00:00Z").unwrap());
        assert_eq!(
            r.wire_value(Field::GeneratedAt),
            Some(json!("2024-06-15T10:20:30.456Z"))
        );
    }

    #[test]
    fn test_keep_stamp_does_not_replace_a_minted_one() {
        let mut r = minimal();
        r.stamp_once(Timestamp::parse("2026-01-15T12:00:00Z").unwrap());
        r.keep_stamp(EventDate::parse("1999-01-01T00:00:00+01:00").unwrap());
        assert_eq!(
            r.generated_at().map(EventDate::as_str),
            Some("2026-01-15T12:00:00Z")
        );
    }

    #[test]
    fn test_serde_skips_absent_fields() {
        let json = serde_json::to_value(minimal()).unwrap();
        assert_eq!(
            json,
            json!({
                "productName": "Tote",
                "sku": "HB-1",
                "brand": "Maison",
                "category": "Handbags"
            })
        );
    }
}

//! # Candidate Validation
//!
//! [`validate`] walks the record fields in declaration order, checks each
//! one against its [`FieldKind`] rule, and either assembles a
//! [`ProductRecord`] or returns every failure it found.
//!
//! A JSON `null` is read as "absent". The codec never writes `null`, so a
//! `null` can only come from hand-written input, and treating it as a
//! missing key is the least surprising reading.
//!
//! Keys that no [`Field`] names are ignored here. They remain visible on
//! the [`Candidate`] for callers that want to reject them.

use std::str::FromStr;

use luxqr_core::{
    Candidate, Category, EventDate, Field, FieldKind, ProductRecord, QualityStatus,
    WarehouseAction,
};
use serde_json::{Map, Value};

use crate::error::{FieldError, FieldErrors};

/// Validate an arbitrary structured value as a product record.
///
/// A value that is not an object is treated as an empty object, so it
/// reports the four required fields as missing.
///
/// # Errors
///
/// Returns [`FieldErrors`] holding every failure, ordered by field
/// declaration order. Never short-circuits.
pub fn validate(candidate: &Value) -> Result<ProductRecord, FieldErrors> {
    match candidate.as_object() {
        Some(map) => validate_map(map),
        None => validate_map(&Map::new()),
    }
}

/// Validate a [`Candidate`] returned by the codec.
pub fn validate_candidate(candidate: &Candidate) -> Result<ProductRecord, FieldErrors> {
    validate_map(candidate.as_map())
}

/// Returns true if `email` is a syntactically valid address.
///
/// The empty string is not an address; callers decide whether blank means
/// "not provided".
pub fn is_valid_email(email: &str) -> bool {
    validator::validate_email(email)
}

fn validate_map(map: &Map<String, Value>) -> Result<ProductRecord, FieldErrors> {
    let mut errors = Vec::new();
    let get = |field: Field| map.get(field.as_str()).filter(|v| !v.is_null());

    // Declaration order below is the error order.
    let product_name = check(
        &mut errors,
        required_text(Field::ProductName, get(Field::ProductName)),
    );
    let sku = check(&mut errors, required_text(Field::Sku, get(Field::Sku)));
    let brand = check(&mut errors, required_text(Field::Brand, get(Field::Brand)));
    let category = check(
        &mut errors,
        required_enum::<Category>(Field::Category, get(Field::Category)),
    );
    let description = optional(&mut errors, Field::Description, get(Field::Description), text);
    let manufacturing_date = optional(
        &mut errors,
        Field::ManufacturingDate,
        get(Field::ManufacturingDate),
        date,
    );
    let manufacturing_batch = optional(
        &mut errors,
        Field::ManufacturingBatch,
        get(Field::ManufacturingBatch),
        text,
    );
    let raw_material_source = optional(
        &mut errors,
        Field::RawMaterialSource,
        get(Field::RawMaterialSource),
        text,
    );
    let quality_check_status = optional(
        &mut errors,
        Field::QualityCheckStatus,
        get(Field::QualityCheckStatus),
        member::<QualityStatus>,
    );
    let quality_inspector = optional(
        &mut errors,
        Field::QualityInspector,
        get(Field::QualityInspector),
        text,
    );
    let packaging_date = optional(
        &mut errors,
        Field::PackagingDate,
        get(Field::PackagingDate),
        date,
    );
    let packaging_location = optional(
        &mut errors,
        Field::PackagingLocation,
        get(Field::PackagingLocation),
        text,
    );
    let serialization_number = optional(
        &mut errors,
        Field::SerializationNumber,
        get(Field::SerializationNumber),
        text,
    );
    let transport_from = optional(
        &mut errors,
        Field::TransportFrom,
        get(Field::TransportFrom),
        text,
    );
    let transport_to = optional(&mut errors, Field::TransportTo, get(Field::TransportTo), text);
    let transport_carrier = optional(
        &mut errors,
        Field::TransportCarrier,
        get(Field::TransportCarrier),
        text,
    );
    let warehouse_location = optional(
        &mut errors,
        Field::WarehouseLocation,
        get(Field::WarehouseLocation),
        text,
    );
    let warehouse_action = optional(
        &mut errors,
        Field::WarehouseAction,
        get(Field::WarehouseAction),
        member::<WarehouseAction>,
    );
    let retailer_name = optional(&mut errors, Field::RetailerName, get(Field::RetailerName), text);
    let retailer_location = optional(
        &mut errors,
        Field::RetailerLocation,
        get(Field::RetailerLocation),
        text,
    );
    let customer_sale_date = optional(
        &mut errors,
        Field::CustomerSaleDate,
        get(Field::CustomerSaleDate),
        date,
    );
    let sale_price = optional(&mut errors, Field::SalePrice, get(Field::SalePrice), text);
    let customer_email = optional(
        &mut errors,
        Field::CustomerEmail,
        get(Field::CustomerEmail),
        email,
    );
    let warranty_months = optional(
        &mut errors,
        Field::WarrantyMonths,
        get(Field::WarrantyMonths),
        count,
    );
    let certificate_number = optional(
        &mut errors,
        Field::CertificateNumber,
        get(Field::CertificateNumber),
        text,
    );
    let notes = optional(&mut errors, Field::Notes, get(Field::Notes), text);
    let generated_at = optional(&mut errors, Field::GeneratedAt, get(Field::GeneratedAt), date);

    tracing::debug!(
        keys = map.len(),
        errors = errors.len(),
        "validated product candidate"
    );

    let (Some(product_name), Some(sku), Some(brand), Some(category)) =
        (product_name, sku, brand, category)
    else {
        return Err(FieldErrors::new(errors));
    };
    if !errors.is_empty() {
        return Err(FieldErrors::new(errors));
    }

    let mut record = ProductRecord::new(product_name, sku, brand, category);
    record.description = description;
    record.manufacturing_date = manufacturing_date;
    record.manufacturing_batch = manufacturing_batch;
    record.raw_material_source = raw_material_source;
    record.quality_check_status = quality_check_status;
    record.quality_inspector = quality_inspector;
    record.packaging_date = packaging_date;
    record.packaging_location = packaging_location;
    record.serialization_number = serialization_number;
    record.transport_from = transport_from;
    record.transport_to = transport_to;
    record.transport_carrier = transport_carrier;
    record.warehouse_location = warehouse_location;
    record.warehouse_action = warehouse_action;
    record.retailer_name = retailer_name;
    record.retailer_location = retailer_location;
    record.customer_sale_date = customer_sale_date;
    record.sale_price = sale_price;
    record.customer_email = customer_email;
    record.warranty_months = warranty_months;
    record.certificate_number = certificate_number;
    record.notes = notes;
    if let Some(stamp) = generated_at {
        record.keep_stamp(stamp);
    }
    Ok(record)
}

/// Push the error, if any, and keep the value, if any.
fn check<T>(errors: &mut Vec<FieldError>, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

/// Run `parse` on a present value. Absent stays `None` without error.
fn optional<T>(
    errors: &mut Vec<FieldError>,
    field: Field,
    value: Option<&Value>,
    parse: fn(Field, &Value) -> Result<T, FieldError>,
) -> Option<T> {
    debug_assert!(!field.is_required());
    value.and_then(|v| check(errors, parse(field, v)))
}

fn required_text(field: Field, value: Option<&Value>) -> Result<String, FieldError> {
    debug_assert_eq!(field.kind(), FieldKind::RequiredText);
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(FieldError::MissingField { field }),
    }
}

fn required_enum<T: FromStr>(field: Field, value: Option<&Value>) -> Result<T, FieldError> {
    debug_assert_eq!(field.kind(), FieldKind::RequiredEnum);
    match value {
        Some(v) if v.as_str().is_some_and(|s| !s.trim().is_empty()) => member(field, v),
        _ => Err(FieldError::MissingField { field }),
    }
}

fn member<T: FromStr>(field: Field, value: &Value) -> Result<T, FieldError> {
    let invalid = || FieldError::InvalidEnum {
        field,
        allowed: field.allowed_values().unwrap_or(&[]),
    };
    value
        .as_str()
        .ok_or_else(invalid)?
        .parse::<T>()
        .map_err(|_| invalid())
}

fn text(field: Field, value: &Value) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(FieldError::InvalidText { field })
}

fn date(field: Field, value: &Value) -> Result<EventDate, FieldError> {
    value
        .as_str()
        .and_then(|s| EventDate::parse(s).ok())
        .ok_or(FieldError::InvalidDate { field })
}

fn email(field: Field, value: &Value) -> Result<String, FieldError> {
    match value.as_str() {
        Some("") => Ok(String::new()),
        Some(s) if is_valid_email(s) => Ok(s.to_string()),
        _ => Err(FieldError::InvalidEmail { field }),
    }
}

fn count(field: Field, value: &Value) -> Result<u64, FieldError> {
    value.as_u64().ok_or(FieldError::InvalidNumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn required() -> Value {
        json!({
            "productName": "Smartwatch X200",
            "sku": "SWX-200-98234",
            "brand": "TechNova",
            "category": "Watches"
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut v = required();
        v[key] = value;
        v
    }

    #[test]
    fn test_required_only_is_valid() {
        let r = validate(&required()).unwrap();
        assert_eq!(r.product_name, "Smartwatch X200");
        assert_eq!(r.category, Category::Watches);
        assert_eq!(r.description, None);
        assert_eq!(r.generated_at(), None);
    }

    #[test]
    fn test_non_object_reports_all_required() {
        for v in [json!(null), json!([]), json!("productName"), json!(7)] {
            let errs = validate(&v).unwrap_err();
            assert_eq!(errs.fields(), Field::REQUIRED);
        }
    }

    #[test]
    fn test_blank_required_is_missing() {
        let errs = validate(&with("brand", json!("   "))).unwrap_err();
        assert_eq!(
            errs.errors(),
            &[FieldError::MissingField {
                field: Field::Brand
            }]
        );
    }

    #[test]
    fn test_non_text_required_is_missing() {
        let errs = validate(&with("sku", json!(12345))).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::Sku]);
        let errs = validate(&with("category", json!(3))).unwrap_err();
        assert_eq!(
            errs.errors(),
            &[FieldError::MissingField {
                field: Field::Category
            }]
        );
    }

    #[test]
    fn test_required_values_are_not_trimmed() {
        let r = validate(&with("productName", json!("  Padded  "))).unwrap();
        assert_eq!(r.product_name, "  Padded  ");
    }

    #[test]
    fn test_null_is_absent() {
        let r = validate(&with("notes", Value::Null)).unwrap();
        assert_eq!(r.notes, None);
        let errs = validate(&with("sku", Value::Null)).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::Sku]);
    }

    #[test]
    fn test_empty_optional_text_is_kept() {
        let r = validate(&with("notes", json!(""))).unwrap();
        assert_eq!(r.notes, Some(String::new()));
    }

    #[test]
    fn test_optional_enums() {
        let r = validate(&with("qualityCheckStatus", json!("Fail"))).unwrap();
        assert_eq!(r.quality_check_status, Some(QualityStatus::Fail));

        let errs = validate(&with("warehouseAction", json!("Shipped"))).unwrap_err();
        assert_eq!(
            errs.errors(),
            &[FieldError::InvalidEnum {
                field: Field::WarehouseAction,
                allowed: WarehouseAction::NAMES,
            }]
        );

        let errs = validate(&with("qualityCheckStatus", json!(""))).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::QualityCheckStatus]);
    }

    #[test]
    fn test_warranty_months() {
        assert_eq!(
            validate(&with("warrantyMonths", json!(0))).unwrap().warranty_months,
            Some(0)
        );
        for bad in [json!(-1), json!(1.5), json!("24"), json!(true)] {
            let errs = validate(&with("warrantyMonths", bad)).unwrap_err();
            assert_eq!(
                errs.errors(),
                &[FieldError::InvalidNumber {
                    field: Field::WarrantyMonths
                }]
            );
        }
    }

    #[test]
    fn test_dates() {
        let r = validate(&with("packagingDate", json!("2024-06-18T00:00:00.000Z"))).unwrap();
        assert_eq!(
            r.packaging_date.as_ref().map(EventDate::as_str),
            Some("2024-06-18T00:00:00.000Z")
        );
        let errs = validate(&with("packagingDate", json!("2024-06-18"))).unwrap_err();
        assert_eq!(
            errs.errors(),
            &[FieldError::InvalidDate {
                field: Field::PackagingDate
            }]
        );
    }

    #[test]
    fn test_generated_at_is_accepted_from_payloads() {
        let r = validate(&with("generatedAt", json!("2026-01-15T12:00:00Z"))).unwrap();
        assert_eq!(
            r.generated_at().map(EventDate::as_str),
            Some("2026-01-15T12:00:00Z")
        );
        let errs = validate(&with("generatedAt", json!("soon"))).unwrap_err();
        assert_eq!(errs.fields(), vec![Field::GeneratedAt]);
    }

    #[test]
    fn test_generated_at_keeps_fractional_seconds_and_offset() {
        for text in ["2024-06-15T10:20:30.456Z", "2024-06-15T12:20:30+02:00"] {
            let r = validate(&with("generatedAt", json!(text))).unwrap();
            assert_eq!(r.generated_at().map(EventDate::as_str), Some(text));
            assert_eq!(r.wire_value(Field::GeneratedAt), Some(json!(text)));
        }
    }

    #[test]
    fn test_non_text_optional_is_invalid_text() {
        let errs = validate(&with("notes", json!({"a": 1}))).unwrap_err();
        assert_eq!(
            errs.errors(),
            &[FieldError::InvalidText {
                field: Field::Notes
            }]
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let r = validate(&with("colour", json!("red"))).unwrap();
        assert_eq!(r.brand, "TechNova");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("customer@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email(""));
    }
}

//! # Record Fields
//!
//! [`Field`] names every key of a product record. Its variant order is the
//! declaration order of the record, and that order is load-bearing:
//!
//! - the schema validator reports errors in this order,
//! - the codec emits payload keys in this order (`generatedAt` last),
//! - the decode view walks fields in this order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LuxqrError;

/// How a field is typed and constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Required non-empty text.
    RequiredText,
    /// Required, and must name a member of a closed value set.
    RequiredEnum,
    /// Optional free text.
    Text,
    /// Optional absolute RFC 3339 timestamp text.
    Date,
    /// Optional member of a closed value set.
    Enum,
    /// Optional email address; the empty string means "not provided".
    Email,
    /// Optional non-negative integer.
    Count,
    /// Producer-set stamp, never user-editable.
    Stamp,
}

/// A key of the product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ProductName,
    Sku,
    Brand,
    Category,
    Description,
    ManufacturingDate,
    ManufacturingBatch,
    RawMaterialSource,
    QualityCheckStatus,
    QualityInspector,
    PackagingDate,
    PackagingLocation,
    SerializationNumber,
    TransportFrom,
    TransportTo,
    TransportCarrier,
    WarehouseLocation,
    WarehouseAction,
    RetailerName,
    RetailerLocation,
    CustomerSaleDate,
    SalePrice,
    CustomerEmail,
    WarrantyMonths,
    CertificateNumber,
    Notes,
    GeneratedAt,
}

/// Total number of record fields, `generatedAt` included.
pub const FIELD_COUNT: usize = 27;

impl Field {
    /// The four required fields, in declaration order.
    pub const REQUIRED: [Field; 4] = [Self::ProductName, Self::Sku, Self::Brand, Self::Category];

    /// Returns every field in declaration order.
    pub fn all() -> &'static [Field] {
        &[
            Self::ProductName,
            Self::Sku,
            Self::Brand,
            Self::Category,
            Self::Description,
            Self::ManufacturingDate,
            Self::ManufacturingBatch,
            Self::RawMaterialSource,
            Self::QualityCheckStatus,
            Self::QualityInspector,
            Self::PackagingDate,
            Self::PackagingLocation,
            Self::SerializationNumber,
            Self::TransportFrom,
            Self::TransportTo,
            Self::TransportCarrier,
            Self::WarehouseLocation,
            Self::WarehouseAction,
            Self::RetailerName,
            Self::RetailerLocation,
            Self::CustomerSaleDate,
            Self::SalePrice,
            Self::CustomerEmail,
            Self::WarrantyMonths,
            Self::CertificateNumber,
            Self::Notes,
            Self::GeneratedAt,
        ]
    }

    /// Returns the camelCase payload key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductName => "productName",
            Self::Sku => "sku",
            Self::Brand => "brand",
            Self::Category => "category",
            Self::Description => "description",
            Self::ManufacturingDate => "manufacturingDate",
            Self::ManufacturingBatch => "manufacturingBatch",
            Self::RawMaterialSource => "rawMaterialSource",
            Self::QualityCheckStatus => "qualityCheckStatus",
            Self::QualityInspector => "qualityInspector",
            Self::PackagingDate => "packagingDate",
            Self::PackagingLocation => "packagingLocation",
            Self::SerializationNumber => "serializationNumber",
            Self::TransportFrom => "transportFrom",
            Self::TransportTo => "transportTo",
            Self::TransportCarrier => "transportCarrier",
            Self::WarehouseLocation => "warehouseLocation",
            Self::WarehouseAction => "warehouseAction",
            Self::RetailerName => "retailerName",
            Self::RetailerLocation => "retailerLocation",
            Self::CustomerSaleDate => "customerSaleDate",
            Self::SalePrice => "salePrice",
            Self::CustomerEmail => "customerEmail",
            Self::WarrantyMonths => "warrantyMonths",
            Self::CertificateNumber => "certificateNumber",
            Self::Notes => "notes",
            Self::GeneratedAt => "generatedAt",
        }
    }

    /// Human-readable label, as shown next to a form input or in the
    /// decoded view.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductName => "Product Name",
            Self::Sku => "SKU/Serial Number",
            Self::Brand => "Brand",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::ManufacturingDate => "Manufacturing Date",
            Self::ManufacturingBatch => "Batch",
            Self::RawMaterialSource => "Raw Material Source",
            Self::QualityCheckStatus => "Quality Check",
            Self::QualityInspector => "Inspector",
            Self::PackagingDate => "Packaging Date",
            Self::PackagingLocation => "Packaging Location",
            Self::SerializationNumber => "Serial Number",
            Self::TransportFrom => "From",
            Self::TransportTo => "To",
            Self::TransportCarrier => "Carrier",
            Self::WarehouseLocation => "Warehouse Location",
            Self::WarehouseAction => "Warehouse Action",
            Self::RetailerName => "Retailer",
            Self::RetailerLocation => "Retailer Location",
            Self::CustomerSaleDate => "Sale Date",
            Self::SalePrice => "Sale Price",
            Self::CustomerEmail => "Customer Email",
            Self::WarrantyMonths => "Warranty",
            Self::CertificateNumber => "Certificate",
            Self::Notes => "Notes",
            Self::GeneratedAt => "Generated",
        }
    }

    /// Returns how this field is typed and constrained.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::ProductName | Self::Sku | Self::Brand => FieldKind::RequiredText,
            Self::Category => FieldKind::RequiredEnum,
            Self::ManufacturingDate | Self::PackagingDate | Self::CustomerSaleDate => {
                FieldKind::Date
            }
            Self::QualityCheckStatus | Self::WarehouseAction => FieldKind::Enum,
            Self::CustomerEmail => FieldKind::Email,
            Self::WarrantyMonths => FieldKind::Count,
            Self::GeneratedAt => FieldKind::Stamp,
            Self::Description
            | Self::ManufacturingBatch
            | Self::RawMaterialSource
            | Self::QualityInspector
            | Self::PackagingLocation
            | Self::SerializationNumber
            | Self::TransportFrom
            | Self::TransportTo
            | Self::TransportCarrier
            | Self::WarehouseLocation
            | Self::RetailerName
            | Self::RetailerLocation
            | Self::SalePrice
            | Self::CertificateNumber
            | Self::Notes => FieldKind::Text,
        }
    }

    /// Returns true for the four required fields.
    pub fn is_required(&self) -> bool {
        matches!(self.kind(), FieldKind::RequiredText | FieldKind::RequiredEnum)
    }

    /// For enumerated fields, the wire names of the allowed values.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Category => Some(crate::Category::NAMES),
            Self::QualityCheckStatus => Some(crate::QualityStatus::NAMES),
            Self::WarehouseAction => Some(crate::WarehouseAction::NAMES),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = LuxqrError;

    /// Look up a field by its payload key. Unknown keys are an error here;
    /// callers that need forward compatibility keep the raw key instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| LuxqrError::UnknownVariant {
                kind: "field",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count() {
        assert_eq!(Field::all().len(), FIELD_COUNT);
    }

    #[test]
    fn test_declaration_order_starts_with_required() {
        assert_eq!(&Field::all()[..4], &Field::REQUIRED);
        assert_eq!(Field::all().last(), Some(&Field::GeneratedAt));
    }

    #[test]
    fn test_all_is_sorted_by_ord() {
        let all = Field::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_as_str_roundtrip() {
        for field in Field::all() {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), *field);
        }
        assert!("colour".parse::<Field>().is_err());
        assert!("ProductName".parse::<Field>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for field in Field::all() {
            let json = serde_json::to_string(field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<Field> = Field::all()
            .iter()
            .copied()
            .filter(Field::is_required)
            .collect();
        assert_eq!(required, Field::REQUIRED);
    }

    #[test]
    fn test_allowed_values_only_for_enums() {
        for field in Field::all() {
            let is_enum = matches!(field.kind(), FieldKind::Enum | FieldKind::RequiredEnum);
            assert_eq!(field.allowed_values().is_some(), is_enum, "{field}");
        }
    }

    #[test]
    fn test_labels_non_empty() {
        for field in Field::all() {
            assert!(!field.label().is_empty());
        }
    }
}

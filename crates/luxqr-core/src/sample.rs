//! Preset demo record, the values the product form starts out with.

use serde_json::json;

use crate::candidate::Candidate;

/// The preset record as an unvalidated candidate, every field populated
/// except `generatedAt`.
pub fn preset_candidate() -> Candidate {
    Candidate::from_map(
        json!({
            "productName": "Smartwatch X200",
            "sku": "SWX-200-98234",
            "brand": "TechNova",
            "category": "Watches",
            "description": "High-end smartwatch with health tracking features.",
            "manufacturingDate": "2024-06-15T00:00:00.000Z",
            "manufacturingBatch": "BATCH-55682",
            "rawMaterialSource": "Supplier A \u{2014} Shenzhen, China",
            "qualityCheckStatus": "Pass",
            "qualityInspector": "John Doe",
            "packagingDate": "2024-06-18T00:00:00.000Z",
            "packagingLocation": "Factory Warehouse A1",
            "serializationNumber": "SER-9912837",
            "transportFrom": "Shenzhen Port",
            "transportTo": "Los Angeles Distribution Hub",
            "transportCarrier": "GlobalTrans Logistics",
            "warehouseLocation": "LA Warehouse Zone 3",
            "warehouseAction": "Received",
            "retailerName": "SuperTech Store",
            "retailerLocation": "San Francisco, CA",
            "customerSaleDate": "2024-07-02T00:00:00.000Z",
            "salePrice": "249.99",
            "customerEmail": "customer@example.com",
            "warrantyMonths": 24,
            "certificateNumber": "CERT-88219012",
            "notes": "Item passed all inspections and was packaged securely."
        })
        .as_object()
        .cloned()
        .unwrap_or_default(),
    )
}

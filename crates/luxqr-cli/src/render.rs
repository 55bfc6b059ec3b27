//! # Decoded Record View
//!
//! Renders a parsed candidate for a human reader. Rendering is lenient: it
//! does not require the candidate to pass schema validation. A field is
//! shown only if it is present and holds a sane value for its kind
//! (non-empty text, or a number for the warranty); everything else is
//! skipped silently. Sections with nothing to show are omitted.
//!
//! `customerEmail` is never shown.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use luxqr_core::{Candidate, Field, QualityStatus};
use serde_json::Value;

/// Visual weight of a badge value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Alert,
    Neutral,
}

impl Tone {
    /// Quality status tone: `Pass` is ok, `Fail` is an alert, anything
    /// else (including values outside the set) is neutral.
    pub fn for_quality(value: &str) -> Self {
        match value.parse::<QualityStatus>() {
            Ok(QualityStatus::Pass) => Self::Ok,
            Ok(QualityStatus::Fail) => Self::Alert,
            _ => Self::Neutral,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Alert => "alert",
            Self::Neutral => "neutral",
        }
    }
}

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
    pub tone: Option<Tone>,
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<Row>,
}

/// Everything the decode view shows for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub sections: Vec<Section>,
    pub generated_on: Option<String>,
}

impl View {
    /// Build the view for `candidate`.
    pub fn build(candidate: &Candidate) -> Self {
        let text = |f: Field| text_value(candidate, f);
        let date = |f: Field| text_value(candidate, f).map(|s| format_date(&s));

        let mut product = Vec::new();
        push(&mut product, "Brand", text(Field::Brand));
        push(&mut product, "Manufacturing Date", date(Field::ManufacturingDate));
        push(&mut product, "Warranty", warranty(candidate));
        push(&mut product, "Certificate Number", text(Field::CertificateNumber));
        push(&mut product, "Description", text(Field::Description));

        let mut quality = Vec::new();
        push(&mut quality, "Batch", text(Field::ManufacturingBatch));
        push(&mut quality, "Material Source", text(Field::RawMaterialSource));
        if let Some(status) = text(Field::QualityCheckStatus) {
            quality.push(Row {
                label: "Quality Check",
                tone: Some(Tone::for_quality(&status)),
                value: status,
            });
        }
        push(&mut quality, "Inspector", text(Field::QualityInspector));

        let mut packaging = Vec::new();
        push(&mut packaging, "Date", date(Field::PackagingDate));
        push(&mut packaging, "Location", text(Field::PackagingLocation));
        push(&mut packaging, "Serial", text(Field::SerializationNumber));

        let mut transport = Vec::new();
        push(&mut transport, "From", text(Field::TransportFrom));
        push(&mut transport, "To", text(Field::TransportTo));
        push(&mut transport, "Carrier", text(Field::TransportCarrier));

        let mut warehouse = Vec::new();
        push(&mut warehouse, "Location", text(Field::WarehouseLocation));
        push(&mut warehouse, "Action", text(Field::WarehouseAction));

        let mut retail = Vec::new();
        push(&mut retail, "Retailer", text(Field::RetailerName));
        push(&mut retail, "Location", text(Field::RetailerLocation));
        push(&mut retail, "Sale Date", date(Field::CustomerSaleDate));
        push(&mut retail, "Price", text(Field::SalePrice));

        let mut notes = Vec::new();
        push(&mut notes, "Notes", text(Field::Notes));

        let sections = [
            ("Product", product),
            ("Manufacturing & Quality", quality),
            ("Packaging", packaging),
            ("Transport", transport),
            ("Warehouse", warehouse),
            ("Retail", retail),
            ("Notes", notes),
        ]
        .into_iter()
        .filter(|(_, rows)| !rows.is_empty())
        .map(|(title, rows)| Section { title, rows })
        .collect();

        Self {
            title: text(Field::ProductName),
            sku: text(Field::Sku),
            category: text(Field::Category),
            sections,
            generated_on: text(Field::GeneratedAt).map(|s| format_stamp(&s)),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title.as_deref().unwrap_or("(unnamed product)"))?;
        if let Some(category) = &self.category {
            write!(f, "  [{category}]")?;
        }
        writeln!(f)?;
        if let Some(sku) = &self.sku {
            writeln!(f, "SKU: {sku}")?;
        }

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            for row in &section.rows {
                write!(f, "  {}: {}", row.label, row.value)?;
                if let Some(tone) = row.tone {
                    write!(f, " [{}]", tone.as_str())?;
                }
                writeln!(f)?;
            }
        }

        if let Some(at) = &self.generated_on {
            writeln!(f)?;
            writeln!(f, "QR Code generated on {at}")?;
        }
        Ok(())
    }
}

fn push(rows: &mut Vec<Row>, label: &'static str, value: Option<String>) {
    if let Some(value) = value {
        rows.push(Row {
            label,
            value,
            tone: None,
        });
    }
}

fn text_value(candidate: &Candidate, field: Field) -> Option<String> {
    match candidate.field(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn warranty(candidate: &Candidate) -> Option<String> {
    match candidate.field(Field::WarrantyMonths)? {
        Value::Number(n) => Some(format!("{n} months")),
        Value::String(s) if !s.trim().is_empty() => Some(format!("{s} months")),
        _ => None,
    }
}

/// Long-form calendar date (`June 15, 2024`), or the raw text when it is
/// not a recognisable date.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %-d, %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

fn format_stamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&chrono::Utc)
            .format("%B %-d, %Y at %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxqr_core::sample::preset_candidate;
    use serde_json::json;

    fn candidate(v: Value) -> Candidate {
        Candidate::from_value(v).unwrap()
    }

    fn titles(view: &View) -> Vec<&'static str> {
        view.sections.iter().map(|s| s.title).collect()
    }

    #[test]
    fn format_date_long_form() {
        assert_eq!(format_date("2024-06-15T00:00:00.000Z"), "June 15, 2024");
        assert_eq!(format_date("2024-06-15"), "June 15, 2024");
        assert_eq!(format_date("last tuesday"), "last tuesday");
    }

    #[test]
    fn quality_tones() {
        assert_eq!(Tone::for_quality("Pass"), Tone::Ok);
        assert_eq!(Tone::for_quality("Fail"), Tone::Alert);
        assert_eq!(Tone::for_quality("Pending"), Tone::Neutral);
        assert_eq!(Tone::for_quality("pass"), Tone::Neutral);
    }

    #[test]
    fn preset_shows_every_section() {
        let view = View::build(&preset_candidate());
        assert_eq!(
            titles(&view),
            vec![
                "Product",
                "Manufacturing & Quality",
                "Packaging",
                "Transport",
                "Warehouse",
                "Retail",
                "Notes",
            ]
        );
        assert_eq!(view.title.as_deref(), Some("Smartwatch X200"));
        assert!(view.generated_on.is_none());
    }

    #[test]
    fn empty_sections_are_omitted() {
        let view = View::build(&candidate(json!({
            "productName": "Tote",
            "brand": "Maison",
            "transportTo": "Paris"
        })));
        assert_eq!(titles(&view), vec!["Product", "Transport"]);
    }

    #[test]
    fn lenient_about_bad_values() {
        let view = View::build(&candidate(json!({
            "productName": 42,
            "category": "Rings",
            "notes": "",
            "packagingLocation": ["not", "text"],
            "qualityCheckStatus": "Maybe",
            "customerEmail": "someone@example.com"
        })));
        assert_eq!(view.title, None);
        assert_eq!(view.category.as_deref(), Some("Rings"));
        assert_eq!(titles(&view), vec!["Manufacturing & Quality"]);
        assert_eq!(view.sections[0].rows[0].tone, Some(Tone::Neutral));
        assert!(!view.to_string().contains("someone@example.com"));
    }

    #[test]
    fn display_layout() {
        let view = View::build(&candidate(json!({
            "productName": "Tote",
            "sku": "HB-1",
            "category": "Handbags",
            "qualityCheckStatus": "Fail",
            "warrantyMonths": 12,
            "generatedAt": "2026-01-15T12:00:00Z"
        })));
        assert_eq!(
            view.to_string(),
            "Tote  [Handbags]\n\
             SKU: HB-1\n\
             \n\
             Product\n\
             \x20 Warranty: 12 months\n\
             \n\
             Manufacturing & Quality\n\
             \x20 Quality Check: Fail [alert]\n\
             \n\
             QR Code generated on January 15, 2026 at 12:00:00 UTC\n"
        );
    }
}

//! # Closed Value Sets
//!
//! The three enumerated vocabularies of the product record. Each is a
//! closed enum: an unknown string cannot become a variant, so downstream
//! code matches exhaustively and an added variant forces every consumer
//! to handle it.
//!
//! Wire spelling is the variant name exactly (`"Watches"`, `"Pass"`,
//! `"Received"`). Parsing is case-sensitive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LuxqrError;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Watches,
    Handbags,
    Jewelry,
    Apparel,
    Accessories,
    Other,
}

impl Category {
    /// Wire names of every category, in canonical order.
    pub const NAMES: &'static [&'static str] = &[
        "Watches",
        "Handbags",
        "Jewelry",
        "Apparel",
        "Accessories",
        "Other",
    ];

    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Watches,
            Self::Handbags,
            Self::Jewelry,
            Self::Apparel,
            Self::Accessories,
            Self::Other,
        ]
    }

    /// Returns the wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watches => "Watches",
            Self::Handbags => "Handbags",
            Self::Jewelry => "Jewelry",
            Self::Apparel => "Apparel",
            Self::Accessories => "Accessories",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LuxqrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Watches" => Ok(Self::Watches),
            "Handbags" => Ok(Self::Handbags),
            "Jewelry" => Ok(Self::Jewelry),
            "Apparel" => Ok(Self::Apparel),
            "Accessories" => Ok(Self::Accessories),
            "Other" => Ok(Self::Other),
            other => Err(LuxqrError::UnknownVariant {
                kind: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// Outcome of the quality inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityStatus {
    Pass,
    Fail,
    Pending,
}

impl QualityStatus {
    /// Wire names of every status, in canonical order.
    pub const NAMES: &'static [&'static str] = &["Pass", "Fail", "Pending"];

    /// Returns all statuses in canonical order.
    pub fn all() -> &'static [QualityStatus] {
        &[Self::Pass, Self::Fail, Self::Pending]
    }

    /// Returns the wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityStatus {
    type Err = LuxqrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pass" => Ok(Self::Pass),
            "Fail" => Ok(Self::Fail),
            "Pending" => Ok(Self::Pending),
            other => Err(LuxqrError::UnknownVariant {
                kind: "quality status",
                value: other.to_string(),
            }),
        }
    }
}

/// Last recorded warehouse movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarehouseAction {
    Received,
    Dispatched,
    Stored,
}

impl WarehouseAction {
    /// Wire names of every action, in canonical order.
    pub const NAMES: &'static [&'static str] = &["Received", "Dispatched", "Stored"];

    /// Returns all actions in canonical order.
    pub fn all() -> &'static [WarehouseAction] {
        &[Self::Received, Self::Dispatched, Self::Stored]
    }

    /// Returns the wire name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Dispatched => "Dispatched",
            Self::Stored => "Stored",
        }
    }
}

impl std::fmt::Display for WarehouseAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarehouseAction {
    type Err = LuxqrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Received" => Ok(Self::Received),
            "Dispatched" => Ok(Self::Dispatched),
            "Stored" => Ok(Self::Stored),
            other => Err(LuxqrError::UnknownVariant {
                kind: "warehouse action",
                value: other.to_string(),
            }),
        }
    }
}

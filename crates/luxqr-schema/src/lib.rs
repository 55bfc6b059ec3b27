//! # luxqr-schema: Record Validation
//!
//! Turns an untyped candidate (form input, or the output of
//! `luxqr-codec::parse`) into a typed [`ProductRecord`], or reports every
//! field that stops it from being one.
//!
//! ## Validation Rules
//!
//! - `productName`, `sku`, `brand`, `category` must be non-empty text.
//! - `category`, `qualityCheckStatus`, `warehouseAction` must name a member
//!   of their closed value set.
//! - `customerEmail` may be absent, empty, or a syntactically valid address.
//! - `warrantyMonths` must be a non-negative integer.
//! - Dates and `generatedAt` must be absolute RFC 3339 timestamps.
//!
//! All errors are collected in one pass and reported in field declaration
//! order, so a form can mark every bad input at once.
//!
//! ## Crate Policy
//!
//! - Depends only on `luxqr-core` internally. Never on `luxqr-codec`.
//! - Pure functions only: no I/O, no clock, no shared state.
//! - Valid values pass through unchanged. Nothing is trimmed or coerced.
//!
//! [`ProductRecord`]: luxqr_core::ProductRecord

pub mod error;
pub mod validate;

pub use error::{FieldError, FieldErrors};
pub use validate::{is_valid_email, validate, validate_candidate};

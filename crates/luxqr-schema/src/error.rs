//! # Field Errors
//!
//! Validation failures are recoverable and addressable: each names the
//! field it belongs to so a UI can show it inline. They are never mixed
//! with payload decoding errors.

use std::fmt;

use luxqr_core::Field;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field is absent, not text, or blank after trimming.
    #[error("{field}: {}", required_message(.field))]
    MissingField {
        /// The required field.
        field: Field,
    },

    /// An enumerated field holds a value outside its set.
    #[error("{field}: must be one of {}", .allowed.join(", "))]
    InvalidEnum {
        /// The enumerated field.
        field: Field,
        /// Wire names of the permitted values.
        allowed: &'static [&'static str],
    },

    /// A non-empty email field is not a syntactically valid address.
    #[error("{field}: invalid email")]
    InvalidEmail {
        /// The email field.
        field: Field,
    },

    /// A count field is not a non-negative integer.
    #[error("{field}: must be a non-negative whole number")]
    InvalidNumber {
        /// The count field.
        field: Field,
    },

    /// A date field is not an absolute RFC 3339 timestamp.
    #[error("{field}: must be an absolute timestamp (RFC 3339)")]
    InvalidDate {
        /// The date field.
        field: Field,
    },

    /// An optional free-text field holds something other than text.
    #[error("{field}: must be text")]
    InvalidText {
        /// The text field.
        field: Field,
    },
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField { field }
            | Self::InvalidEnum { field, .. }
            | Self::InvalidEmail { field }
            | Self::InvalidNumber { field }
            | Self::InvalidDate { field }
            | Self::InvalidText { field } => *field,
        }
    }
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::ProductName => "Product name is required",
        Field::Sku => "SKU/Serial number is required",
        Field::Brand => "Brand name is required",
        Field::Category => "Category is required",
        _ => "is required",
    }
}

/// Every validation failure for one candidate, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a slice of all errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The offending fields, in order, one entry per error.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(FieldError::field).collect()
    }

    /// The first error for `field`, if any.
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

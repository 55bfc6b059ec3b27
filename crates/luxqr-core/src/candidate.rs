//! # Candidate Records
//!
//! A [`Candidate`] is what the codec hands back from a pasted payload and
//! what the schema validator takes in: a key-value object that may or may
//! not describe a valid product record. Keys are kept exactly as they
//! arrived, including keys no current [`Field`] names, so a caller can
//! decide whether to ignore or reject them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LuxqrError;
use crate::field::Field;

/// An unvalidated key-value object.
///
/// # Invariants
///
/// The inner value is always a JSON object. The only constructors are
/// [`Candidate::from_value()`] (which rejects non-objects),
/// [`Candidate::from_map()`] and [`Default`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(Map<String, Value>);

impl Candidate {
    /// Wrap a structured value.
    ///
    /// # Errors
    ///
    /// Returns [`LuxqrError::NotAnObject`] for arrays, scalars and `null`.
    pub fn from_value(value: Value) -> Result<Self, LuxqrError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(LuxqrError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Wrap an existing map.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Look up a raw key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a known field.
    pub fn field(&self, field: Field) -> Option<&Value> {
        self.0.get(field.as_str())
    }

    /// Returns true if the key is present (with any value, `null` included).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate the keys that were present in the source.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Keys that no known [`Field`] names.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.keys().filter(|k| k.parse::<Field>().is_err()).collect()
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no keys are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set a raw key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Drop a raw key, returning its value. Remaining keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a plain JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Candidate {
    type Error = LuxqrError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Candidate> for Value {
    fn from(candidate: Candidate) -> Self {
        candidate.into_value()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

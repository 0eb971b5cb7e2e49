//! Schemaless documents and their typed field values.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// A single field value.
///
/// Mirrors the scalar types of the hosted store. Nested maps and arrays are not
/// used by the catalog and are dropped when decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Position of the value's type in the store's cross-type ordering.
    const fn type_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Double(_) => 2,
            Self::Timestamp(_) => 3,
            Self::String(_) => 4,
        }
    }

    /// Total order used when sorting query results.
    ///
    /// Values of different types order by type first; integers and doubles
    /// compare numerically.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Double(a), Self::Double(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Double(b)) => (*a as f64).total_cmp(b),
            (Self::Double(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Field name to value map of a document.
pub type Fields = BTreeMap<String, Value>;

/// Reasons a stored field cannot be read as the expected type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing field `{0}`")]
    Missing(String),
    #[error("field `{field}` should be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

/// A stored document: its store-assigned key plus fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    #[must_use]
    pub const fn new(id: String, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Raw value of a field, treating `null` as absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !matches!(v, Value::Null))
    }

    /// A required string field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] if the field is absent or not a string.
    pub fn string(&self, field: &str) -> Result<String, FieldError> {
        self.opt_string(field)?
            .ok_or_else(|| FieldError::Missing(field.to_string()))
    }

    /// An optional string field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::WrongType`] if the field holds something else.
    pub fn opt_string(&self, field: &str) -> Result<Option<String>, FieldError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(wrong_type(field, "a string")),
        }
    }

    /// A required boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] if the field is absent or not a boolean.
    pub fn bool(&self, field: &str) -> Result<bool, FieldError> {
        match self.get(field) {
            None => Err(FieldError::Missing(field.to_string())),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(wrong_type(field, "a boolean")),
        }
    }

    /// A required integer field. Whole doubles are accepted, since clients
    /// without an integer type write numbers as doubles.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] if the field is absent or not a whole number.
    #[allow(clippy::cast_possible_truncation)]
    pub fn integer(&self, field: &str) -> Result<i64, FieldError> {
        match self.get(field) {
            None => Err(FieldError::Missing(field.to_string())),
            Some(Value::Integer(n)) => Ok(*n),
            Some(Value::Double(d)) if d.fract() == 0.0 && d.is_finite() => Ok(*d as i64),
            Some(_) => Err(wrong_type(field, "an integer")),
        }
    }

    /// An optional timestamp field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::WrongType`] if the field holds something else.
    pub fn opt_timestamp(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Timestamp(t)) => Ok(Some(*t)),
            Some(_) => Err(wrong_type(field, "a timestamp")),
        }
    }
}

fn wrong_type(field: &str, expected: &'static str) -> FieldError {
    FieldError::WrongType {
        field: field.to_string(),
        expected,
    }
}

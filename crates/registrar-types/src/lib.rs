//! # registrar-types: Core types for `Registrar`
//!
//! This crate contains shared types used across the `Registrar` system:
//! - Entity IDs ([`RowId`])
//! - Field naming and typing ([`FieldName`], [`FieldKind`])
//! - Dynamically typed field values ([`Value`])
//! - Branded credit values ([`Credits`], [`TaggedCredits`], [`BrandTag`])
//! - Presentation helpers ([`format_teacher_name`])

use std::borrow::Borrow;
use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

mod credits;

pub use credits::{
    Brand, BrandMismatchError, BrandTag, Credits, CreditsError, Major, Minor, TaggedCredits,
    major_credits, minor_credits, sum_credits, sum_major_credits, sum_minor_credits,
};

// ============================================================================
// Entity IDs
// ============================================================================

/// Identifier handed out by a row store for a persisted record.
///
/// Opaque to everything except the store that issued it: callers only
/// thread it back into later `update`/`delete` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(u64);

impl RowId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RowId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RowId> for u64 {
    fn from(id: RowId) -> Self {
        id.0
    }
}

// ============================================================================
// Field Names
// ============================================================================

/// Name of a record field.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the field name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldName({:?})", self.0)
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// Field Kinds
// ============================================================================

/// Type check applied to a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// UTF-8 text.
    Text,
    /// Whole number.
    Integer,
    /// Any number, whole or fractional.
    Number,
    /// `true` / `false`.
    Boolean,
    /// No type check at all.
    Any,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "TEXT"),
            FieldKind::Integer => write!(f, "INTEGER"),
            FieldKind::Number => write!(f, "NUMBER"),
            FieldKind::Boolean => write!(f, "BOOLEAN"),
            FieldKind::Any => write!(f, "ANY"),
        }
    }
}

// ============================================================================
// Values
// ============================================================================

/// A dynamically typed field value.
///
/// Declared fields are checked against their [`FieldKind`]; extra fields on
/// extensible records keep whatever value they were given.
///
/// Note: `Real` compares by bit pattern so that `Value` can be `Eq`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / null.
    #[default]
    Null,
    /// Boolean value.
    Boolean(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Real(f64),
    /// UTF-8 text.
    Text(String),
    /// Nested JSON (arrays and objects).
    Json(serde_json::Value),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Json(a), Value::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Value {
    /// Returns the narrowest kind describing this value.
    ///
    /// Returns `None` for `Null`, and `Any` for nested JSON.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(FieldKind::Boolean),
            Value::Integer(_) => Some(FieldKind::Integer),
            Value::Real(_) => Some(FieldKind::Number),
            Value::Text(_) => Some(FieldKind::Text),
            Value::Json(_) => Some(FieldKind::Any),
        }
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the value as a string slice, if it is Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an Integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an f64 if it is any number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a bool, if it is Boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Checks whether this (non-null) value passes the given kind's type check.
    ///
    /// Null never satisfies a kind; presence is decided by the caller.
    pub fn is_compatible_with(&self, kind: FieldKind) -> bool {
        match (self, kind) {
            (Value::Null, _) => false,
            (_, FieldKind::Any) => true,
            (Value::Text(_), FieldKind::Text) => true,
            (Value::Integer(_), FieldKind::Integer | FieldKind::Number) => true,
            (Value::Real(_), FieldKind::Number) => true,
            (Value::Boolean(_), FieldKind::Boolean) => true,
            _ => false,
        }
    }

    /// Converts a JSON value, mapping scalars onto their own variants.
    ///
    /// Whole JSON numbers become `Integer`; everything else numeric becomes `Real`.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Real),
            },
            serde_json::Value::String(s) => Value::Text(s),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::Json(other)
            }
        }
    }

    /// Converts this value to JSON.
    ///
    /// Non-finite reals have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(v) => serde_json::Value::from(*v),
            Value::Real(v) => serde_json::Number::from_f64(*v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Json(j) => j.clone(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Json(j) => write!(f, "{j}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self {
        Value::from_json(j)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// Presentation helpers
// ============================================================================

/// Formats a teacher's name as `"<initial>. <last name>"`.
///
/// # Examples
///
/// ```
/// # use registrar_types::format_teacher_name;
/// assert_eq!(format_teacher_name("John", "Doe"), "J. Doe");
/// assert_eq!(format_teacher_name("", "Doe"), "Doe");
/// ```
pub fn format_teacher_name(first_name: &str, last_name: &str) -> String {
    match first_name.chars().next() {
        Some(initial) => format!("{initial}. {last_name}"),
        None => last_name.to_string(),
    }
}

#[cfg(test)]
mod tests;

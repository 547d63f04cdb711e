//! Validated records and the factory that builds them.

use std::collections::BTreeMap;
use std::sync::Arc;

use registrar_types::{FieldKind, FieldName, Value};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{RecordError, Result, ValidationError};
use crate::shape::{FieldDef, Shape};

/// Raw record input: field name to value.
pub type Input = BTreeMap<FieldName, Value>;

/// A record that satisfied its shape at construction.
///
/// Records are immutable. Every required field is present with a value of the
/// declared kind for as long as the record exists. [`Record::with_field`]
/// returns a new record and refuses to touch readonly fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    shape: Arc<Shape>,
    /// Declared fields that are present.
    fields: BTreeMap<FieldName, Value>,
    /// Undeclared fields carried through by extensible shapes.
    extra: BTreeMap<FieldName, Value>,
}

/// Builds a record from raw input, validating it against `shape`.
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. required fields, in declaration order: present, non-null, right kind;
/// 2. optional fields that are present: right kind (null counts as absent);
/// 3. closed shapes only: no undeclared fields (first in name order).
///
/// Extensible shapes copy undeclared fields through without looking at them.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use registrar_schema::{ShapeBuilder, ValidationReason, construct};
/// use registrar_types::{FieldKind, Value};
///
/// let shape = Arc::new(
///     ShapeBuilder::new("Row")
///         .required("firstName", FieldKind::Text)
///         .optional("age", FieldKind::Integer)
///         .build(),
/// );
///
/// let row = construct(shape.clone(), [("firstName", Value::from("Guillaume"))]).unwrap();
/// assert_eq!(row.text("firstName"), Some("Guillaume"));
///
/// let err = construct(shape, [("age", Value::from(23))]).unwrap_err();
/// assert_eq!(err.reason, ValidationReason::MissingRequired);
/// ```
pub fn construct<I, K, V>(shape: Arc<Shape>, input: I) -> Result<Record>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<FieldName>,
    V: Into<Value>,
{
    let input: Input = input
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    match validate(&shape, input) {
        Ok((fields, extra)) => {
            tracing::debug!(
                shape = shape.name(),
                fields = fields.len(),
                extra = extra.len(),
                "record constructed"
            );
            Ok(Record {
                shape,
                fields,
                extra,
            })
        }
        Err(error) => {
            tracing::debug!(
                shape = shape.name(),
                field = %error.field,
                reason = %error.reason,
                "record rejected"
            );
            Err(error)
        }
    }
}

/// Builds a record from a JSON object.
pub fn construct_json(
    shape: Arc<Shape>,
    object: serde_json::Map<String, serde_json::Value>,
) -> Result<Record> {
    construct(shape, object.into_iter().map(|(k, v)| (k, Value::from_json(v))))
}

type Validated = (BTreeMap<FieldName, Value>, BTreeMap<FieldName, Value>);

fn validate(shape: &Shape, mut remaining: Input) -> Result<Validated> {
    let mut fields = BTreeMap::new();

    for def in shape.required_fields() {
        match remaining.remove(def.name.as_str()) {
            None | Some(Value::Null) => return Err(ValidationError::missing(def.name.clone())),
            Some(value) => {
                check_kind(def, &value)?;
                fields.insert(def.name.clone(), value);
            }
        }
    }

    for def in shape.optional_fields() {
        match remaining.remove(def.name.as_str()) {
            None | Some(Value::Null) => {}
            Some(value) => {
                check_kind(def, &value)?;
                fields.insert(def.name.clone(), value);
            }
        }
    }

    if !shape.is_extensible() {
        if let Some(name) = remaining.keys().next() {
            return Err(ValidationError::unexpected(name.clone()));
        }
    }

    Ok((fields, remaining))
}

fn check_kind(def: &FieldDef, value: &Value) -> Result<()> {
    if value.is_compatible_with(def.kind) {
        Ok(())
    } else {
        Err(ValidationError::type_mismatch(
            def.name.clone(),
            def.kind,
            value.kind().unwrap_or(FieldKind::Any),
        ))
    }
}

impl Record {
    /// Assembles a record from parts already known to satisfy `shape`.
    ///
    /// Used by the typed records, whose fields are checked by the type system.
    pub(crate) fn assemble(
        shape: Arc<Shape>,
        fields: BTreeMap<FieldName, Value>,
        extra: BTreeMap<FieldName, Value>,
    ) -> Self {
        debug_assert!(
            validate(
                &shape,
                fields
                    .iter()
                    .chain(extra.iter())
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            )
            .is_ok(),
            "assembled record does not satisfy shape '{}'",
            shape.name()
        );

        Self {
            shape,
            fields,
            extra,
        }
    }

    /// Returns the shape this record was validated against.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the shared shape handle.
    pub fn shape_handle(&self) -> Arc<Shape> {
        Arc::clone(&self.shape)
    }

    /// Looks up a field, declared or extra.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).or_else(|| self.extra.get(name))
    }

    /// Returns true if the field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_integer)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_number)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_boolean)
    }

    /// Returns the present declared fields in declaration order.
    pub fn declared_fields(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.shape
            .fields()
            .iter()
            .filter_map(|def| self.fields.get_key_value(def.name.as_str()))
    }

    /// Returns the undeclared fields in name order.
    pub fn extra_fields(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.extra.iter()
    }

    /// Returns every field: declared ones first, then extras.
    pub fn entries(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.declared_fields().chain(self.extra_fields())
    }

    /// Returns the number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len() + self.extra.len()
    }

    /// Returns true if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of this record with one field set.
    ///
    /// Readonly fields are rejected. Declared fields are type-checked, and
    /// setting an optional field to null removes it. Undeclared fields are
    /// only accepted by extensible shapes.
    pub fn with_field(
        &self,
        name: impl Into<FieldName>,
        value: impl Into<Value>,
    ) -> std::result::Result<Record, RecordError> {
        let name = name.into();
        let value = value.into();
        let mut next = self.clone();

        match self.shape.find_field(name.as_str()) {
            Some(def) if def.readonly => {
                tracing::warn!(
                    shape = self.shape.name(),
                    field = %name,
                    "attempt to change readonly field"
                );
                return Err(RecordError::Readonly { field: name });
            }
            Some(def) => {
                if value.is_null() {
                    if def.is_required() {
                        return Err(ValidationError::missing(name).into());
                    }
                    next.fields.remove(name.as_str());
                } else {
                    check_kind(def, &value)?;
                    next.fields.insert(name, value);
                }
            }
            None if self.shape.is_extensible() => {
                next.extra.insert(name, value);
            }
            None => return Err(ValidationError::unexpected(name).into()),
        }

        Ok(next)
    }

    /// Consumes the record and returns its fields as raw input.
    pub fn into_input(self) -> Input {
        let mut input = self.extra;
        input.extend(self.fields);
        input
    }

    /// Converts this record to a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries()
                .map(|(k, v)| (k.as_str().to_string(), v.to_json()))
                .collect(),
        )
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.entries() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

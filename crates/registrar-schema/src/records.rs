//! Typed records for the registrar domain.
//!
//! Each type here is the statically typed view of one shape: known fields
//! are struct fields, and the shape is available from `shape()` for callers
//! that start from untyped input. Converting from a [`Record`] re-validates
//! against the type's own shape, so any record with the right fields can be
//! turned into the typed form regardless of which shape produced it.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use registrar_types::{FieldKind, FieldName, Value, format_teacher_name};
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result, ValidationError};
use crate::record::{Record, construct};
use crate::shape::{Shape, ShapeBuilder};

/// Field names shared by the shapes below.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const AGE: &str = "age";
    pub const LOCATION: &str = "location";
    pub const FULL_TIME_EMPLOYEE: &str = "fullTimeEmployee";
    pub const YEARS_OF_EXPERIENCE: &str = "yearsOfExperience";
    pub const EXPERIENCE_TEACHING_C: &str = "experienceTeachingC";
    pub const EXPERIENCE_TEACHING_REACT: &str = "experienceTeachingReact";
    pub const EXPERIENCE_TEACHING_JAVA: &str = "experienceTeachingJava";
}

use fields::{
    AGE, EXPERIENCE_TEACHING_C, EXPERIENCE_TEACHING_JAVA, EXPERIENCE_TEACHING_REACT, FIRST_NAME,
    FULL_TIME_EMPLOYEE, LAST_NAME, LOCATION, YEARS_OF_EXPERIENCE,
};

// ============================================================================
// Field extraction
// ============================================================================

fn text_field(record: &Record, name: &str) -> Result<String> {
    match record.get(name) {
        None | Some(Value::Null) => Err(ValidationError::missing(name)),
        Some(Value::Text(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(name, FieldKind::Text, other)),
    }
}

fn integer_field(record: &Record, name: &str) -> Result<i64> {
    optional_integer(record, name)?.ok_or_else(|| ValidationError::missing(name))
}

fn optional_integer(record: &Record, name: &str) -> Result<Option<i64>> {
    match record.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Integer(v)) => Ok(Some(*v)),
        Some(other) => Err(mismatch(name, FieldKind::Integer, other)),
    }
}

fn boolean_field(record: &Record, name: &str) -> Result<bool> {
    match record.get(name) {
        None | Some(Value::Null) => Err(ValidationError::missing(name)),
        Some(Value::Boolean(b)) => Ok(*b),
        Some(other) => Err(mismatch(name, FieldKind::Boolean, other)),
    }
}

fn mismatch(name: &str, expected: FieldKind, value: &Value) -> ValidationError {
    ValidationError::type_mismatch(name, expected, value.kind().unwrap_or(FieldKind::Any))
}

/// Re-validates a record's fields against another shape.
fn revalidate(shape: Arc<Shape>, record: &Record) -> Result<Record> {
    construct(
        shape,
        record.entries().map(|(k, v)| (k.clone(), v.clone())),
    )
}

fn declared(pairs: impl IntoIterator<Item = (&'static str, Value)>) -> BTreeMap<FieldName, Value> {
    pairs
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (FieldName::from(k), v))
        .collect()
}

// ============================================================================
// Student
// ============================================================================

static STUDENT_SHAPE: LazyLock<Arc<Shape>> = LazyLock::new(|| {
    Arc::new(
        ShapeBuilder::new("Student")
            .required(FIRST_NAME, FieldKind::Text)
            .required(LAST_NAME, FieldKind::Text)
            .required(AGE, FieldKind::Integer)
            .required(LOCATION, FieldKind::Text)
            .build(),
    )
});

/// A student: every field required, nothing else allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub location: String,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            location: location.into(),
        }
    }

    pub fn shape() -> Arc<Shape> {
        Arc::clone(&STUDENT_SHAPE)
    }

    pub fn to_record(&self) -> Record {
        Record::assemble(
            Self::shape(),
            declared([
                (FIRST_NAME, Value::from(self.first_name.as_str())),
                (LAST_NAME, Value::from(self.last_name.as_str())),
                (AGE, Value::from(self.age)),
                (LOCATION, Value::from(self.location.as_str())),
            ]),
            BTreeMap::new(),
        )
    }
}

impl TryFrom<&Record> for Student {
    type Error = ValidationError;

    fn try_from(record: &Record) -> Result<Self> {
        let record = revalidate(Self::shape(), record)?;
        Ok(Self {
            first_name: text_field(&record, FIRST_NAME)?,
            last_name: text_field(&record, LAST_NAME)?,
            age: integer_field(&record, AGE)?,
            location: text_field(&record, LOCATION)?,
        })
    }
}

// ============================================================================
// Teacher
// ============================================================================

fn teacher_shape(extensible: bool) -> Shape {
    ShapeBuilder::new("Teacher")
        .readonly(FIRST_NAME, FieldKind::Text)
        .readonly(LAST_NAME, FieldKind::Text)
        .required(FULL_TIME_EMPLOYEE, FieldKind::Boolean)
        .required(LOCATION, FieldKind::Text)
        .optional(YEARS_OF_EXPERIENCE, FieldKind::Integer)
        .extensible(extensible)
        .build()
}

static TEACHER_SHAPE: LazyLock<Arc<Shape>> = LazyLock::new(|| Arc::new(teacher_shape(true)));
static CLOSED_TEACHER_SHAPE: LazyLock<Arc<Shape>> =
    LazyLock::new(|| Arc::new(teacher_shape(false)));

/// A teacher in the staff directory.
///
/// The name fields are readonly: they are set by [`Teacher::new`] and only
/// exposed through accessors afterwards. Any number of additional fields may
/// be attached with [`Teacher::with_extra`].
///
/// ```
/// use registrar_schema::Teacher;
///
/// let mut teacher = Teacher::new("Sarah", "Johnson", true, "Boston");
/// teacher.location = "Cambridge".to_string();
/// assert_eq!(teacher.first_name(), "Sarah");
/// ```
///
/// Assigning a name after construction does not compile:
///
/// ```compile_fail
/// use registrar_schema::Teacher;
///
/// let mut teacher = Teacher::new("Sarah", "Johnson", true, "Boston");
/// teacher.first_name = "NewName".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    first_name: String,
    last_name: String,
    pub full_time_employee: bool,
    pub location: String,
    pub years_of_experience: Option<i64>,
    extra: BTreeMap<FieldName, Value>,
}

impl Teacher {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        full_time_employee: bool,
        location: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            full_time_employee,
            location: location.into(),
            years_of_experience: None,
            extra: BTreeMap::new(),
        }
    }

    /// Extensible teacher shape.
    pub fn shape() -> Arc<Shape> {
        Arc::clone(&TEACHER_SHAPE)
    }

    /// Teacher shape with or without extra fields allowed.
    pub fn shape_with_extras(allow_extra_fields: bool) -> Arc<Shape> {
        if allow_extra_fields {
            Self::shape()
        } else {
            Arc::clone(&CLOSED_TEACHER_SHAPE)
        }
    }

    pub fn with_years_of_experience(mut self, years: i64) -> Self {
        self.years_of_experience = Some(years);
        self
    }

    /// Attaches an additional field.
    pub fn with_extra(
        mut self,
        name: impl Into<FieldName>,
        value: impl Into<Value>,
    ) -> std::result::Result<Self, RecordError> {
        self.set_extra(name, value)?;
        Ok(self)
    }

    /// Sets an additional field, returning the previous value.
    ///
    /// Names declared by the teacher shape cannot be used as extras.
    pub fn set_extra(
        &mut self,
        name: impl Into<FieldName>,
        value: impl Into<Value>,
    ) -> std::result::Result<Option<Value>, RecordError> {
        let name = name.into();
        if TEACHER_SHAPE.declares(name.as_str()) {
            return Err(RecordError::DeclaredField { field: name });
        }
        Ok(self.extra.insert(name, value.into()))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns `"<initial>. <last name>"`.
    pub fn display_name(&self) -> String {
        format_teacher_name(&self.first_name, &self.last_name)
    }

    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub fn extra_fields(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.extra.iter()
    }

    pub fn to_record(&self) -> Record {
        Record::assemble(
            Self::shape(),
            declared([
                (FIRST_NAME, Value::from(self.first_name.as_str())),
                (LAST_NAME, Value::from(self.last_name.as_str())),
                (FULL_TIME_EMPLOYEE, Value::from(self.full_time_employee)),
                (LOCATION, Value::from(self.location.as_str())),
                (YEARS_OF_EXPERIENCE, Value::from(self.years_of_experience)),
            ]),
            self.extra.clone(),
        )
    }
}

impl TryFrom<&Record> for Teacher {
    type Error = ValidationError;

    fn try_from(record: &Record) -> Result<Self> {
        let record = revalidate(Self::shape(), record)?;
        Ok(Self {
            first_name: text_field(&record, FIRST_NAME)?,
            last_name: text_field(&record, LAST_NAME)?,
            full_time_employee: boolean_field(&record, FULL_TIME_EMPLOYEE)?,
            location: text_field(&record, LOCATION)?,
            years_of_experience: optional_integer(&record, YEARS_OF_EXPERIENCE)?,
            extra: record
                .extra_fields()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        })
    }
}

// ============================================================================
// Row element
// ============================================================================

static ROW_ELEMENT_SHAPE: LazyLock<Arc<Shape>> = LazyLock::new(|| {
    Arc::new(
        ShapeBuilder::new("RowElement")
            .required(FIRST_NAME, FieldKind::Text)
            .required(LAST_NAME, FieldKind::Text)
            .optional(AGE, FieldKind::Integer)
            .build(),
    )
});

/// Payload handed to a row store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowElement {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

impl RowElement {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn shape() -> Arc<Shape> {
        Arc::clone(&ROW_ELEMENT_SHAPE)
    }

    pub fn to_record(&self) -> Record {
        Record::assemble(
            Self::shape(),
            declared([
                (FIRST_NAME, Value::from(self.first_name.as_str())),
                (LAST_NAME, Value::from(self.last_name.as_str())),
                (AGE, Value::from(self.age)),
            ]),
            BTreeMap::new(),
        )
    }
}

impl TryFrom<&Record> for RowElement {
    type Error = ValidationError;

    fn try_from(record: &Record) -> Result<Self> {
        let record = revalidate(Self::shape(), record)?;
        Ok(Self {
            first_name: text_field(&record, FIRST_NAME)?,
            last_name: text_field(&record, LAST_NAME)?,
            age: optional_integer(&record, AGE)?,
        })
    }
}

// ============================================================================
// Subject teacher
// ============================================================================

static SUBJECT_TEACHER_SHAPE: LazyLock<Arc<Shape>> = LazyLock::new(|| {
    Arc::new(
        ShapeBuilder::new("SubjectTeacher")
            .required(FIRST_NAME, FieldKind::Text)
            .required(LAST_NAME, FieldKind::Text)
            .optional(EXPERIENCE_TEACHING_C, FieldKind::Integer)
            .optional(EXPERIENCE_TEACHING_REACT, FieldKind::Integer)
            .optional(EXPERIENCE_TEACHING_JAVA, FieldKind::Integer)
            .build(),
    )
});

/// A teacher as seen by the subjects.
///
/// Carries one optional experience field per subject. A teacher can have any
/// combination of them; each subject only looks at its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectTeacher {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_teaching_c: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_teaching_react: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_teaching_java: Option<i64>,
}

impl SubjectTeacher {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_c_experience(mut self, years: i64) -> Self {
        self.experience_teaching_c = Some(years);
        self
    }

    pub fn with_react_experience(mut self, years: i64) -> Self {
        self.experience_teaching_react = Some(years);
        self
    }

    pub fn with_java_experience(mut self, years: i64) -> Self {
        self.experience_teaching_java = Some(years);
        self
    }

    pub fn shape() -> Arc<Shape> {
        Arc::clone(&SUBJECT_TEACHER_SHAPE)
    }

    pub fn to_record(&self) -> Record {
        Record::assemble(
            Self::shape(),
            declared([
                (FIRST_NAME, Value::from(self.first_name.as_str())),
                (LAST_NAME, Value::from(self.last_name.as_str())),
                (EXPERIENCE_TEACHING_C, Value::from(self.experience_teaching_c)),
                (
                    EXPERIENCE_TEACHING_REACT,
                    Value::from(self.experience_teaching_react),
                ),
                (
                    EXPERIENCE_TEACHING_JAVA,
                    Value::from(self.experience_teaching_java),
                ),
            ]),
            BTreeMap::new(),
        )
    }
}

impl TryFrom<&Record> for SubjectTeacher {
    type Error = ValidationError;

    fn try_from(record: &Record) -> Result<Self> {
        let record = revalidate(Self::shape(), record)?;
        Ok(Self {
            first_name: text_field(&record, FIRST_NAME)?,
            last_name: text_field(&record, LAST_NAME)?,
            experience_teaching_c: optional_integer(&record, EXPERIENCE_TEACHING_C)?,
            experience_teaching_react: optional_integer(&record, EXPERIENCE_TEACHING_REACT)?,
            experience_teaching_java: optional_integer(&record, EXPERIENCE_TEACHING_JAVA)?,
        })
    }
}

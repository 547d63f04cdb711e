//! # registrar-schema: Record shapes and validation for `Registrar`
//!
//! A [`Shape`] declares the fields a record may carry:
//!
//! - **required** fields must be present and of the declared [`FieldKind`],
//! - **optional** fields may be absent, but are type-checked when present,
//! - **readonly** fields can only be written when the record is built,
//! - **extensible** shapes carry any number of undeclared fields verbatim.
//!
//! [`construct`] is the only way to turn raw input into a [`Record`]. Records
//! are immutable; [`Record::with_field`] yields a modified copy and refuses to
//! touch readonly fields.
//!
//! The [`records`] module holds the typed records of the registrar domain
//! ([`Student`], [`Teacher`], [`RowElement`], [`SubjectTeacher`]).
//!
//! ## Usage
//!
//! ```
//! use registrar_schema::{Teacher, construct};
//! use registrar_types::Value;
//!
//! let record = construct(
//!     Teacher::shape(),
//!     [
//!         ("firstName", Value::from("John")),
//!         ("lastName", Value::from("Doe")),
//!         ("fullTimeEmployee", Value::from(false)),
//!         ("location", Value::from("London")),
//!         ("department", Value::from("Math")),
//!     ],
//! )?;
//!
//! assert_eq!(record.text("department"), Some("Math"));
//!
//! let teacher = Teacher::try_from(&record)?;
//! assert_eq!(teacher.display_name(), "J. Doe");
//! # Ok::<(), registrar_schema::ValidationError>(())
//! ```
//!
//! [`FieldKind`]: registrar_types::FieldKind

mod error;
mod record;
pub mod records;
mod shape;


pub use error::{RecordError, Result, ValidationError, ValidationReason};
pub use record::{Input, Record, construct, construct_json};
pub use records::{RowElement, Student, SubjectTeacher, Teacher};
pub use shape::{FieldDef, Presence, Shape, ShapeBuilder};

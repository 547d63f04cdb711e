//! # Registrar
//!
//! Typed records for a school's staff and student directory.
//!
//! Registrar ties four small pieces together:
//!
//! - **Records** - shapes with required, optional, readonly and extensible
//!   fields, validated once at construction ([`construct`], [`Record`])
//! - **Staff dispatch** - salary-based choice between [`Director`] and
//!   [`Teacher`](registrar_staff::Teacher), and subjects that report teacher
//!   availability ([`Subject`])
//! - **Branded credits** - major and minor credits that only sum within
//!   their own brand ([`Credits`], [`TaggedCredits`])
//! - **Row store** - an external collaborator persisting [`RowElement`]s
//!   ([`RowStore`])
//!
//! # Quick Start
//!
//! ```
//! use registrar::{Duties, Registrar, RowElement};
//!
//! let registrar = Registrar::in_memory();
//!
//! let employee = registrar.hire(1000);
//! assert_eq!(employee.work_tasks(), "Getting to director tasks");
//!
//! let id = registrar.insert_row(&RowElement::new("Guillaume", "Salva"))?;
//! registrar.update_row(id, &RowElement::new("Guillaume", "Salva").with_age(23))?;
//! registrar.delete_row(id)?;
//! # Ok::<(), registrar::RegistrarError>(())
//! ```

mod error;
mod registrar;
pub mod samples;

pub use error::{RegistrarError, Result};
pub use registrar::Registrar;

// Re-export the building blocks
pub use registrar_config::{ConfigLoader, RegistrarConfig};
pub use registrar_schema::{
    Record, RecordError, RowElement, Shape, ShapeBuilder, Student, SubjectTeacher, Teacher,
    ValidationError, ValidationReason, construct, construct_json,
};
pub use registrar_staff::{
    Director, Duties, Employee, EmployeeKind, HiringPolicy, NO_AVAILABLE_TEACHER, Salary, Subject,
    SubjectKind, create_employee,
};
pub use registrar_store::{MemoryRowStore, RowStore, StoreError};
pub use registrar_types::{
    BrandMismatchError, BrandTag, Credits, CreditsError, FieldKind, FieldName, Major, Minor,
    RowId, TaggedCredits, Value, format_teacher_name, major_credits, minor_credits, sum_credits,
};

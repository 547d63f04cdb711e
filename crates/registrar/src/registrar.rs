//! Main entry point for the Registrar SDK.
//!
//! The `Registrar` struct owns the loaded configuration, the hiring policy
//! derived from it, and the row store rows are persisted to.

use std::sync::Arc;

use registrar_config::RegistrarConfig;
use registrar_schema::{Record, RowElement, Shape, Student, SubjectTeacher, Teacher, construct};
use registrar_staff::{Employee, HiringPolicy, Salary, Subject, SubjectKind};
use registrar_store::{MemoryRowStore, RowStore};
use registrar_types::{FieldName, RowId, TaggedCredits, Value};

use crate::error::Result;

/// Registrar SDK handle.
///
/// # Example
///
/// ```
/// use registrar::{Registrar, RegistrarConfig, Value};
///
/// let registrar = Registrar::in_memory_with_config(RegistrarConfig::strict())?;
///
/// // The strict configuration closes the teacher shape.
/// let rejected = registrar.build_teacher([
///     ("firstName", Value::from("John")),
///     ("lastName", Value::from("Doe")),
///     ("fullTimeEmployee", Value::from(false)),
///     ("location", Value::from("London")),
///     ("contract", Value::from(false)),
/// ]);
/// assert!(rejected.is_err());
/// # Ok::<(), registrar::RegistrarError>(())
/// ```
#[derive(Debug)]
pub struct Registrar<S: RowStore = MemoryRowStore> {
    config: RegistrarConfig,
    policy: HiringPolicy,
    teacher_shape: Arc<Shape>,
    store: S,
}

impl Registrar<MemoryRowStore> {
    /// Creates a registrar with default configuration and an empty
    /// in-memory row store.
    pub fn in_memory() -> Self {
        let config = RegistrarConfig::default();
        let store = MemoryRowStore::with_first_id(config.store.first_row_id);
        Self::assemble(config, store)
    }

    /// Creates a registrar backed by an in-memory row store that issues ids
    /// from `config.store.first_row_id`.
    pub fn in_memory_with_config(config: RegistrarConfig) -> Result<Self> {
        let store = MemoryRowStore::with_first_id(config.store.first_row_id);
        Self::with_store(config, store)
    }
}

impl<S: RowStore> Registrar<S> {
    /// Creates a registrar persisting rows to `store`.
    pub fn with_store(config: RegistrarConfig, store: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, store))
    }

    fn assemble(config: RegistrarConfig, store: S) -> Self {
        let policy = HiringPolicy::new(config.dispatch.teacher_salary_threshold);
        let teacher_shape = Teacher::shape_with_extras(config.records.allow_extra_fields);

        tracing::debug!(
            threshold = policy.teacher_salary_threshold,
            allow_extra_fields = config.records.allow_extra_fields,
            ?store,
            "registrar ready"
        );

        Self {
            config,
            policy,
            teacher_shape,
            store,
        }
    }

    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    pub fn policy(&self) -> &HiringPolicy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------------
    // Staff
    // ------------------------------------------------------------------------

    /// Selects an employee for `salary` using the configured threshold.
    pub fn hire(&self, salary: impl Into<Salary>) -> Employee {
        self.policy.select(&salary.into())
    }

    /// Creates a subject with `teacher` assigned.
    pub fn assign(&self, kind: SubjectKind, teacher: SubjectTeacher) -> Box<dyn Subject> {
        let mut subject = kind.subject();
        subject.set_teacher(teacher);
        subject
    }

    // ------------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------------

    /// Teacher shape in effect, extensible unless the configuration says
    /// otherwise.
    pub fn teacher_shape(&self) -> Arc<Shape> {
        Arc::clone(&self.teacher_shape)
    }

    /// Validates raw input as a teacher record.
    pub fn teacher_record<I, K, V>(&self, input: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: Into<Value>,
    {
        Ok(construct(self.teacher_shape(), input)?)
    }

    /// Validates raw input and builds a [`Teacher`] from it.
    pub fn build_teacher<I, K, V>(&self, input: I) -> Result<Teacher>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: Into<Value>,
    {
        let record = self.teacher_record(input)?;
        Ok(Teacher::try_from(&record)?)
    }

    /// Validates raw input and builds a [`Student`] from it.
    pub fn build_student<I, K, V>(&self, input: I) -> Result<Student>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: Into<Value>,
    {
        let record = construct(Student::shape(), input)?;
        Ok(Student::try_from(&record)?)
    }

    // ------------------------------------------------------------------------
    // Credits
    // ------------------------------------------------------------------------

    /// Sums runtime-tagged credits. All items must share one brand.
    ///
    /// Returns `None` for an empty input.
    pub fn total_credits(
        &self,
        credits: impl IntoIterator<Item = TaggedCredits>,
    ) -> Result<Option<TaggedCredits>> {
        let mut total: Option<TaggedCredits> = None;
        for item in credits {
            total = Some(match total {
                None => item,
                Some(sum) => sum.combine(item)?,
            });
        }
        Ok(total)
    }

    // ------------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------------

    pub fn insert_row(&self, row: &RowElement) -> Result<RowId> {
        let id = self.store.insert_row(row)?;
        tracing::info!(%id, "row inserted");
        Ok(id)
    }

    /// Validates an untyped record against the row shape, then inserts it.
    pub fn insert_row_record(&self, record: &Record) -> Result<RowId> {
        let row = RowElement::try_from(record)?;
        self.insert_row(&row)
    }

    pub fn update_row(&self, id: RowId, row: &RowElement) -> Result<RowId> {
        let new_id = self.store.update_row(id, row)?;
        tracing::info!(%id, %new_id, "row updated");
        Ok(new_id)
    }

    pub fn delete_row(&self, id: RowId) -> Result<()> {
        self.store.delete_row(id)?;
        tracing::info!(%id, "row deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistrarError;
    use registrar_config::{DispatchConfig, StoreConfig};
    use registrar_schema::ValidationReason;
    use registrar_staff::{EmployeeKind, NO_AVAILABLE_TEACHER};
    use registrar_store::StoreError;
    use registrar_types::{BrandTag, CreditsError};
    use test_case::test_case;

    fn teacher_input() -> Vec<(&'static str, Value)> {
        vec![
            ("firstName", Value::from("John")),
            ("lastName", Value::from("Doe")),
            ("fullTimeEmployee", Value::from(false)),
            ("location", Value::from("London")),
            ("contract", Value::from(false)),
        ]
    }

    #[test_case(499 => EmployeeKind::Teacher; "below default threshold")]
    #[test_case(500 => EmployeeKind::Director; "at default threshold")]
    fn hire_uses_default_threshold(salary: i32) -> EmployeeKind {
        Registrar::in_memory().hire(salary).kind()
    }

    #[test]
    fn hire_uses_configured_threshold() {
        let config = RegistrarConfig {
            dispatch: DispatchConfig {
                teacher_salary_threshold: 1000.0,
            },
            ..RegistrarConfig::default()
        };
        let registrar = Registrar::in_memory_with_config(config).unwrap();

        assert_eq!(registrar.hire(999).kind(), EmployeeKind::Teacher);
        assert_eq!(registrar.hire("$999").kind(), EmployeeKind::Director);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RegistrarConfig {
            dispatch: DispatchConfig {
                teacher_salary_threshold: f64::NAN,
            },
            ..RegistrarConfig::default()
        };

        let err = Registrar::in_memory_with_config(config).unwrap_err();
        assert!(matches!(err, RegistrarError::Config(_)));
    }

    #[test]
    fn extensible_teacher_keeps_extra_fields() {
        let registrar = Registrar::in_memory();
        let teacher = registrar.build_teacher(teacher_input()).unwrap();

        assert_eq!(teacher.extra("contract"), Some(&Value::Boolean(false)));
        assert_eq!(teacher.display_name(), "J. Doe");
    }

    #[test]
    fn strict_teacher_rejects_extra_fields() {
        let registrar = Registrar::in_memory_with_config(RegistrarConfig::strict()).unwrap();

        match registrar.build_teacher(teacher_input()) {
            Err(RegistrarError::Validation(err)) => {
                assert_eq!(err.field.as_str(), "contract");
                assert_eq!(err.reason, ValidationReason::UnexpectedField);
            }
            other => panic!("expected unexpected field error, got {other:?}"),
        }
    }

    #[test]
    fn build_student_requires_age() {
        let registrar = Registrar::in_memory();
        let err = registrar
            .build_student([
                ("firstName", Value::from("John")),
                ("lastName", Value::from("Doe")),
                ("location", Value::from("London")),
            ])
            .unwrap_err();

        assert!(matches!(
            err,
            RegistrarError::Validation(ref e) if e.reason == ValidationReason::MissingRequired
        ));
    }

    #[test]
    fn assign_reports_availability() {
        let registrar = Registrar::in_memory();
        let anna = SubjectTeacher::new("Anna", "Davis").with_java_experience(7);

        let java = registrar.assign(SubjectKind::Java, anna.clone());
        let react = registrar.assign(SubjectKind::React, anna);

        assert_eq!(java.available_teacher(), "Available Teacher: Anna");
        assert_eq!(react.available_teacher(), NO_AVAILABLE_TEACHER);
    }

    #[test]
    fn total_credits_within_one_brand() {
        let registrar = Registrar::in_memory();
        let total = registrar
            .total_credits([
                TaggedCredits::new(BrandTag::Major, 4),
                TaggedCredits::new(BrandTag::Major, 3),
            ])
            .unwrap();

        assert_eq!(total, Some(TaggedCredits::new(BrandTag::Major, 7)));
        assert_eq!(registrar.total_credits(std::iter::empty()).unwrap(), None);
    }

    #[test]
    fn total_credits_rejects_mixed_brands() {
        let registrar = Registrar::in_memory();
        let err = registrar
            .total_credits([
                TaggedCredits::new(BrandTag::Major, 4),
                TaggedCredits::new(BrandTag::Minor, 2),
            ])
            .unwrap_err();

        assert!(matches!(
            err,
            RegistrarError::Credits(CreditsError::BrandMismatch(_))
        ));
    }

    #[test]
    fn row_crud_uses_configured_first_id() {
        let config = RegistrarConfig {
            store: StoreConfig { first_row_id: 40 },
            ..RegistrarConfig::default()
        };
        let registrar = Registrar::in_memory_with_config(config).unwrap();

        let id = registrar
            .insert_row(&RowElement::new("Guillaume", "Salva"))
            .unwrap();
        assert_eq!(id, RowId::new(40));

        let updated = registrar
            .update_row(id, &RowElement::new("Guillaume", "Salva").with_age(23))
            .unwrap();
        assert_eq!(updated, id);
        assert_eq!(
            registrar.store().get(id).unwrap().and_then(|row| row.age),
            Some(23)
        );

        registrar.delete_row(id).unwrap();
        assert!(matches!(
            registrar.delete_row(id),
            Err(RegistrarError::Store(StoreError::RowNotFound(_)))
        ));
    }

    #[test]
    fn insert_row_record_validates_first() {
        let registrar = Registrar::in_memory();

        let bad = construct(
            Student::shape(),
            [
                ("firstName", Value::from("John")),
                ("lastName", Value::from("Doe")),
                ("age", Value::from(20)),
                ("location", Value::from("London")),
            ],
        )
        .unwrap();

        assert!(matches!(
            registrar.insert_row_record(&bad),
            Err(RegistrarError::Validation(_))
        ));
        assert!(registrar.store().is_empty().unwrap());

        let good = RowElement::new("Guillaume", "Salva").with_age(23).to_record();
        let id = registrar.insert_row_record(&good).unwrap();
        assert_eq!(
            registrar.store().get(id).unwrap(),
            Some(RowElement::new("Guillaume", "Salva").with_age(23))
        );
    }
}

//! Sample data for walkthroughs and demos.

use registrar_schema::{RecordError, RowElement, Student, SubjectTeacher, Teacher};

pub fn students() -> Vec<Student> {
    vec![
        Student::new("John", "Doe", 20, "New York"),
        Student::new("Jane", "Smith", 22, "Los Angeles"),
    ]
}

/// The staff directory: one teacher with experience on record, one
/// without, and one carrying undeclared fields.
pub fn teachers() -> Result<Vec<Teacher>, RecordError> {
    Ok(vec![
        Teacher::new("Sarah", "Johnson", true, "Boston").with_years_of_experience(5),
        Teacher::new("Mike", "Smith", false, "New York"),
        Teacher::new("John", "Doe", false, "London")
            .with_extra("contract", false)?
            .with_extra("department", "Math")?
            .with_extra("salary", 50000)?,
    ])
}

pub fn subject_teachers() -> Vec<SubjectTeacher> {
    vec![
        SubjectTeacher::new("Sarah", "Johnson").with_c_experience(5),
        SubjectTeacher::new("Mike", "Smith").with_react_experience(3),
        SubjectTeacher::new("Anna", "Davis").with_java_experience(7),
        SubjectTeacher::new("John", "Doe"),
    ]
}

/// The row used by the CRUD walkthrough, before and after its update.
pub fn row() -> (RowElement, RowElement) {
    let row = RowElement::new("Guillaume", "Salva");
    let updated = row.clone().with_age(23);
    (row, updated)
}

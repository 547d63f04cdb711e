//! Subject command - report teacher availability.

use anyhow::Result;
use registrar::{NO_AVAILABLE_TEACHER, SubjectKind, SubjectTeacher};
use tracing::debug;

use crate::style::colors::SemanticStyle;
use crate::style::{print_success, print_warn};

pub fn run(subject: &str, first_name: &str, last_name: &str, experience: Option<i64>) -> Result<()> {
    let kind: SubjectKind = subject.parse()?;
    debug!(subject = %kind, field = kind.experience_field(), ?experience, "checking availability");

    let mut teacher = SubjectTeacher::new(first_name, last_name);
    if let Some(years) = experience {
        teacher = match kind {
            SubjectKind::Cpp => teacher.with_c_experience(years),
            SubjectKind::React => teacher.with_react_experience(years),
            SubjectKind::Java => teacher.with_java_experience(years),
        };
    }

    let mut subject = kind.subject();
    subject.set_teacher(teacher);

    println!("{}", subject.requirements().info());

    let availability = subject.available_teacher();
    if availability == NO_AVAILABLE_TEACHER {
        print_warn(&availability);
    } else {
        print_success(&availability);
    }

    Ok(())
}

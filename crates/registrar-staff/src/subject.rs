//! Subjects and teacher availability.
//!
//! Every subject reads exactly one experience field of a [`SubjectTeacher`]:
//!
//! | subject | field                     |
//! |---------|---------------------------|
//! | Cpp     | `experienceTeachingC`     |
//! | React   | `experienceTeachingReact` |
//! | Java    | `experienceTeachingJava`  |
//!
//! A teacher is available for a subject when that field is present and
//! strictly positive. Fields for other subjects are ignored.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use registrar_schema::records::fields;
use registrar_schema::{Record, SubjectTeacher, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Answer when no suitable teacher is assigned.
pub const NO_AVAILABLE_TEACHER: &str = "No available teacher";

/// Errors from subject selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    #[error("unknown subject '{0}' (expected cpp, react or java)")]
    UnknownSubject(String),
}

// ============================================================================
// Subject kinds
// ============================================================================

/// The available subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Cpp,
    React,
    Java,
}

impl SubjectKind {
    pub const ALL: [SubjectKind; 3] = [SubjectKind::Cpp, SubjectKind::React, SubjectKind::Java];

    /// Name of the teacher field this subject reads.
    pub fn experience_field(&self) -> &'static str {
        match self {
            SubjectKind::Cpp => fields::EXPERIENCE_TEACHING_C,
            SubjectKind::React => fields::EXPERIENCE_TEACHING_REACT,
            SubjectKind::Java => fields::EXPERIENCE_TEACHING_JAVA,
        }
    }

    /// The teacher's experience in this subject, if recorded.
    pub fn experience_of(&self, teacher: &SubjectTeacher) -> Option<i64> {
        match self {
            SubjectKind::Cpp => teacher.experience_teaching_c,
            SubjectKind::React => teacher.experience_teaching_react,
            SubjectKind::Java => teacher.experience_teaching_java,
        }
    }

    /// Creates an empty subject of this kind.
    pub fn subject(self) -> Box<dyn Subject> {
        match self {
            SubjectKind::Cpp => Box::new(Cpp::default()),
            SubjectKind::React => Box::new(React::default()),
            SubjectKind::Java => Box::new(Java::default()),
        }
    }
}

impl Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::Cpp => write!(f, "Cpp"),
            SubjectKind::React => write!(f, "React"),
            SubjectKind::Java => write!(f, "Java"),
        }
    }
}

impl FromStr for SubjectKind {
    type Err = SubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "c" => Ok(SubjectKind::Cpp),
            "react" => Ok(SubjectKind::React),
            "java" => Ok(SubjectKind::Java),
            _ => Err(SubjectError::UnknownSubject(s.to_string())),
        }
    }
}

// ============================================================================
// Subject trait
// ============================================================================

/// Operations shared by every subject.
pub trait Subject: Debug {
    fn kind(&self) -> SubjectKind;

    /// The currently assigned teacher.
    fn teacher(&self) -> Option<&SubjectTeacher>;

    /// Assigns a teacher, replacing any previous one.
    fn set_teacher(&mut self, teacher: SubjectTeacher);

    /// Assigns a teacher from an untyped record.
    ///
    /// The record only has to fit the subject teacher shape.
    fn set_teacher_record(&mut self, record: &Record) -> Result<(), ValidationError> {
        self.set_teacher(SubjectTeacher::try_from(record)?);
        Ok(())
    }

    fn requirements(&self) -> String {
        format!("Here is the list of requirements for {}", self.kind())
    }

    /// Reports whether the assigned teacher can teach this subject.
    fn available_teacher(&self) -> String {
        let kind = self.kind();
        match self.teacher() {
            Some(teacher) if kind.experience_of(teacher).is_some_and(|years| years > 0) => {
                format!("Available Teacher: {}", teacher.first_name)
            }
            _ => NO_AVAILABLE_TEACHER.to_string(),
        }
    }
}

macro_rules! subject {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            teacher: Option<SubjectTeacher>,
        }

        impl Subject for $name {
            fn kind(&self) -> SubjectKind {
                SubjectKind::$name
            }

            fn teacher(&self) -> Option<&SubjectTeacher> {
                self.teacher.as_ref()
            }

            fn set_teacher(&mut self, teacher: SubjectTeacher) {
                tracing::debug!(
                    subject = stringify!($name),
                    teacher = %teacher.first_name,
                    "teacher assigned"
                );
                self.teacher = Some(teacher);
            }
        }
    };
}

subject!(
    /// The C++ subject.
    Cpp
);

subject!(
    /// The React subject.
    React
);

subject!(
    /// The Java subject.
    Java
);

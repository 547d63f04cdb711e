//! # registrar-staff: Employees and subjects
//!
//! Two small capability dispatchers:
//!
//! - [`HiringPolicy`] picks a [`Director`] or a [`Teacher`] from a
//!   [`Salary`], and both answer the same [`Duties`].
//! - [`Subject`] implementations ([`Cpp`], [`React`], [`Java`]) hold an
//!   assigned [`SubjectTeacher`] and report whether that teacher has
//!   experience in the subject.
//!
//! [`SubjectTeacher`]: registrar_schema::SubjectTeacher

mod employee;
mod subject;

#[cfg(test)]
mod tests;

pub use employee::{
    DEFAULT_TEACHER_SALARY_THRESHOLD, Director, Duties, Employee, EmployeeKind, HiringPolicy,
    Salary, Teacher, create_employee,
};
pub use subject::{Cpp, Java, NO_AVAILABLE_TEACHER, React, Subject, SubjectError, SubjectKind};

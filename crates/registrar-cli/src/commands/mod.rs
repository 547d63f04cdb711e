//! CLI command implementations.

pub mod config;
pub mod credits;
pub mod employee;
pub mod rows;
pub mod students;
pub mod subject;
pub mod teachers;
pub mod version;

//! Employee dispatch by salary.
//!
//! A salary is either a numeric amount or a free-form label. The
//! [`HiringPolicy`] turns it into an [`Employee`]:
//!
//! | salary                        | employee   |
//! |-------------------------------|------------|
//! | amount `<` threshold          | Teacher    |
//! | amount `>=` threshold         | Director   |
//! | any label (e.g. `"$500"`)     | Director   |
//!
//! The default threshold is 500.

use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default salary below which the policy hires a teacher.
pub const DEFAULT_TEACHER_SALARY_THRESHOLD: f64 = 500.0;

// ============================================================================
// Salary
// ============================================================================

/// A salary as supplied by the caller: a number or a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    Amount(f64),
    Label(String),
}

impl Salary {
    /// Parses user input: anything that reads as a finite number is an
    /// amount, everything else is kept as a label.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => Salary::Amount(amount),
            _ => Salary::Label(input.to_string()),
        }
    }

    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Salary::Amount(amount) => Some(*amount),
            Salary::Label(_) => None,
        }
    }
}

impl Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::Amount(amount) => write!(f, "{amount}"),
            Salary::Label(label) => write!(f, "{label:?}"),
        }
    }
}

impl FromStr for Salary {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Salary::parse(s))
    }
}

impl From<f64> for Salary {
    fn from(amount: f64) -> Self {
        Salary::Amount(amount)
    }
}

impl From<u32> for Salary {
    fn from(amount: u32) -> Self {
        Salary::Amount(f64::from(amount))
    }
}

impl From<i32> for Salary {
    fn from(amount: i32) -> Self {
        Salary::Amount(f64::from(amount))
    }
}

impl From<&str> for Salary {
    fn from(label: &str) -> Self {
        Salary::Label(label.to_string())
    }
}

impl From<String> for Salary {
    fn from(label: String) -> Self {
        Salary::Label(label)
    }
}

// ============================================================================
// Duties
// ============================================================================

/// Operations every employee supports.
pub trait Duties {
    fn work_from_home(&self) -> &'static str;

    fn get_coffee_break(&self) -> &'static str;

    /// The role-specific task description.
    fn work_tasks(&self) -> &'static str;
}

/// A director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Director;

impl Director {
    pub fn work_director_tasks(&self) -> &'static str {
        "Getting to director tasks"
    }
}

impl Duties for Director {
    fn work_from_home(&self) -> &'static str {
        "Working from home"
    }

    fn get_coffee_break(&self) -> &'static str {
        "Getting a coffee break"
    }

    fn work_tasks(&self) -> &'static str {
        self.work_director_tasks()
    }
}

/// A teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teacher;

impl Teacher {
    pub fn work_teacher_tasks(&self) -> &'static str {
        "Getting to work"
    }
}

impl Duties for Teacher {
    fn work_from_home(&self) -> &'static str {
        "Cannot work from home"
    }

    fn get_coffee_break(&self) -> &'static str {
        "Cannot have a break"
    }

    fn work_tasks(&self) -> &'static str {
        self.work_teacher_tasks()
    }
}

// ============================================================================
// Employee
// ============================================================================

/// Which implementation an employee is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeKind {
    Director,
    Teacher,
}

impl Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeKind::Director => write!(f, "Director"),
            EmployeeKind::Teacher => write!(f, "Teacher"),
        }
    }
}

/// An employee chosen by a [`HiringPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Employee {
    Director(Director),
    Teacher(Teacher),
}

impl Employee {
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Employee::Director(_) => EmployeeKind::Director,
            Employee::Teacher(_) => EmployeeKind::Teacher,
        }
    }

    pub fn is_director(&self) -> bool {
        matches!(self, Employee::Director(_))
    }

    pub fn as_director(&self) -> Option<&Director> {
        match self {
            Employee::Director(director) => Some(director),
            Employee::Teacher(_) => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&Teacher> {
        match self {
            Employee::Teacher(teacher) => Some(teacher),
            Employee::Director(_) => None,
        }
    }

    fn duties(&self) -> &dyn Duties {
        match self {
            Employee::Director(director) => director,
            Employee::Teacher(teacher) => teacher,
        }
    }
}

impl Duties for Employee {
    fn work_from_home(&self) -> &'static str {
        self.duties().work_from_home()
    }

    fn get_coffee_break(&self) -> &'static str {
        self.duties().get_coffee_break()
    }

    fn work_tasks(&self) -> &'static str {
        self.duties().work_tasks()
    }
}

// ============================================================================
// Hiring policy
// ============================================================================

/// Salary-based selection between teacher and director.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiringPolicy {
    /// Amounts strictly below this hire a teacher.
    pub teacher_salary_threshold: f64,
}

impl Default for HiringPolicy {
    fn default() -> Self {
        Self {
            teacher_salary_threshold: DEFAULT_TEACHER_SALARY_THRESHOLD,
        }
    }
}

impl HiringPolicy {
    pub fn new(teacher_salary_threshold: f64) -> Self {
        Self {
            teacher_salary_threshold,
        }
    }

    /// Selects an employee for the given salary. Never fails.
    ///
    /// Labels always select a director, whatever they say. A `NaN` amount
    /// is not below the threshold and selects a director too.
    ///
    /// # Examples
    ///
    /// ```
    /// use registrar_staff::{EmployeeKind, HiringPolicy, Salary};
    ///
    /// let policy = HiringPolicy::default();
    /// assert_eq!(policy.select(&Salary::from(200)).kind(), EmployeeKind::Teacher);
    /// assert_eq!(policy.select(&Salary::from(1000)).kind(), EmployeeKind::Director);
    /// assert_eq!(policy.select(&Salary::from("$500")).kind(), EmployeeKind::Director);
    /// ```
    pub fn select(&self, salary: &Salary) -> Employee {
        let employee = match salary {
            Salary::Amount(amount) if *amount < self.teacher_salary_threshold => {
                Employee::Teacher(Teacher)
            }
            Salary::Amount(_) | Salary::Label(_) => Employee::Director(Director),
        };

        tracing::debug!(
            %salary,
            threshold = self.teacher_salary_threshold,
            kind = %employee.kind(),
            "employee selected"
        );

        employee
    }
}

/// Selects an employee with the default policy.
pub fn create_employee(salary: impl Into<Salary>) -> Employee {
    HiringPolicy::default().select(&salary.into())
}

//! Employee command - dispatch salaries to directors and teachers.

use anyhow::Result;
use registrar::{Duties, HiringPolicy, RegistrarConfig, Salary};
use tracing::debug;

use crate::style::colors::SemanticStyle;
use crate::style::{print_labeled, print_spacer};

pub fn run(config: &RegistrarConfig, salaries: &[String]) -> Result<()> {
    let policy = HiringPolicy::new(config.dispatch.teacher_salary_threshold);
    debug!(
        threshold = policy.teacher_salary_threshold,
        salaries = salaries.len(),
        "dispatching salaries"
    );

    for (i, input) in salaries.iter().enumerate() {
        if i > 0 {
            print_spacer();
        }

        let salary = Salary::parse(input);
        let employee = policy.select(&salary);

        println!(
            "{} {}",
            employee.kind().to_string().header(),
            format!("(salary {salary})").muted()
        );
        print_labeled("Work from home", employee.work_from_home());
        print_labeled("Coffee break", employee.get_coffee_break());
        print_labeled("Tasks", employee.work_tasks());
    }

    Ok(())
}

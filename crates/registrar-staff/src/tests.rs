use proptest::prelude::*;
use registrar_schema::{SubjectTeacher, construct};
use registrar_types::Value;
use test_case::test_case;

use super::*;

// ============================================================================
// Hiring
// ============================================================================

#[test_case(Salary::from(150) => EmployeeKind::Teacher; "well below threshold")]
#[test_case(Salary::from(499.99) => EmployeeKind::Teacher; "just below threshold")]
#[test_case(Salary::from(500) => EmployeeKind::Director; "at threshold")]
#[test_case(Salary::from(1000) => EmployeeKind::Director; "above threshold")]
#[test_case(Salary::from(-1) => EmployeeKind::Teacher; "negative amount")]
#[test_case(Salary::from("$500") => EmployeeKind::Director; "currency label")]
#[test_case(Salary::from("100") => EmployeeKind::Director; "numeric looking label")]
#[test_case(Salary::from(f64::NAN) => EmployeeKind::Director; "nan amount")]
fn default_policy_selects(salary: Salary) -> EmployeeKind {
    HiringPolicy::default().select(&salary).kind()
}

#[test]
fn custom_threshold_moves_the_boundary() {
    let policy = HiringPolicy::new(1000.0);
    assert_eq!(policy.select(&Salary::from(999)).kind(), EmployeeKind::Teacher);
    assert_eq!(policy.select(&Salary::from(1000)).kind(), EmployeeKind::Director);
}

#[test]
fn create_employee_uses_default_policy() {
    assert!(create_employee(200).as_teacher().is_some());
    assert!(create_employee(1000).is_director());
    assert!(create_employee("$500").as_director().is_some());
}

#[test_case("250" => Salary::Amount(250.0); "integer text")]
#[test_case(" 12.5 " => Salary::Amount(12.5); "padded decimal")]
#[test_case("$500" => Salary::Label("$500".to_string()); "currency")]
#[test_case("inf" => Salary::Label("inf".to_string()); "infinite")]
#[test_case("" => Salary::Label(String::new()); "empty")]
fn salary_parse(input: &str) -> Salary {
    Salary::parse(input)
}

// ============================================================================
// Duties
// ============================================================================

#[test]
fn director_duties() {
    let director = Employee::Director(Director);
    assert_eq!(director.work_from_home(), "Working from home");
    assert_eq!(director.get_coffee_break(), "Getting a coffee break");
    assert_eq!(director.work_tasks(), "Getting to director tasks");
    assert_eq!(Director.work_director_tasks(), "Getting to director tasks");
}

#[test]
fn teacher_duties() {
    let teacher = Employee::Teacher(Teacher);
    assert_eq!(teacher.work_from_home(), "Cannot work from home");
    assert_eq!(teacher.get_coffee_break(), "Cannot have a break");
    assert_eq!(teacher.work_tasks(), "Getting to work");
    assert_eq!(Teacher.work_teacher_tasks(), "Getting to work");
}

#[test]
fn employee_kind_display() {
    assert_eq!(EmployeeKind::Director.to_string(), "Director");
    assert_eq!(EmployeeKind::Teacher.to_string(), "Teacher");
}

// ============================================================================
// Subjects
// ============================================================================

#[test_case(SubjectKind::Cpp => "Here is the list of requirements for Cpp"; "cpp")]
#[test_case(SubjectKind::React => "Here is the list of requirements for React"; "react")]
#[test_case(SubjectKind::Java => "Here is the list of requirements for Java"; "java")]
fn requirements(kind: SubjectKind) -> String {
    kind.subject().requirements()
}

#[test]
fn subject_structs_report_their_kind() {
    assert_eq!(Cpp::default().kind(), SubjectKind::Cpp);
    assert_eq!(React::default().kind(), SubjectKind::React);
    assert_eq!(Java::default().kind(), SubjectKind::Java);

    for kind in SubjectKind::ALL {
        let subject = kind.subject();
        assert_eq!(subject.kind(), kind);
        assert!(subject.teacher().is_none());
    }
}

#[test]
fn no_teacher_assigned() {
    for kind in SubjectKind::ALL {
        assert_eq!(kind.subject().available_teacher(), NO_AVAILABLE_TEACHER);
    }
}

#[test]
fn java_teacher_is_available_for_java_only() {
    let anna = SubjectTeacher::new("Anna", "Davis").with_java_experience(7);

    let mut java = Java::default();
    java.set_teacher(anna.clone());
    assert_eq!(java.available_teacher(), "Available Teacher: Anna");

    let mut react = React::default();
    react.set_teacher(anna);
    assert_eq!(react.available_teacher(), NO_AVAILABLE_TEACHER);
}

#[test]
fn zero_experience_is_not_available() {
    let mut java = Java::default();
    java.set_teacher(SubjectTeacher::new("Anna", "Davis").with_java_experience(0));
    assert_eq!(java.available_teacher(), NO_AVAILABLE_TEACHER);
}

#[test]
fn set_teacher_replaces_previous() {
    let mut cpp = Cpp::default();
    cpp.set_teacher(SubjectTeacher::new("Sarah", "Johnson").with_c_experience(5));
    cpp.set_teacher(SubjectTeacher::new("John", "Doe"));

    assert_eq!(cpp.teacher().map(|t| t.first_name.as_str()), Some("John"));
    assert_eq!(cpp.available_teacher(), NO_AVAILABLE_TEACHER);
}

#[test]
fn teacher_with_several_subjects() {
    let teacher = SubjectTeacher::new("Mike", "Smith")
        .with_react_experience(3)
        .with_c_experience(2);

    for (kind, expected) in [
        (SubjectKind::Cpp, "Available Teacher: Mike"),
        (SubjectKind::React, "Available Teacher: Mike"),
        (SubjectKind::Java, NO_AVAILABLE_TEACHER),
    ] {
        let mut subject = kind.subject();
        subject.set_teacher(teacher.clone());
        assert_eq!(subject.available_teacher(), expected, "{kind}");
    }
}

#[test]
fn set_teacher_from_record() {
    let record = construct(
        SubjectTeacher::shape(),
        [
            ("firstName", Value::from("Sarah")),
            ("lastName", Value::from("Johnson")),
            ("experienceTeachingC", Value::from(5)),
        ],
    )
    .unwrap();

    let mut cpp = SubjectKind::Cpp.subject();
    cpp.set_teacher_record(&record).unwrap();
    assert_eq!(cpp.available_teacher(), "Available Teacher: Sarah");
}

#[test_case("cpp" => Ok(SubjectKind::Cpp); "cpp")]
#[test_case("C++" => Ok(SubjectKind::Cpp); "cplusplus")]
#[test_case("React" => Ok(SubjectKind::React); "react mixed case")]
#[test_case(" java " => Ok(SubjectKind::Java); "java padded")]
#[test_case("rust" => Err(SubjectError::UnknownSubject("rust".to_string())); "unknown")]
fn subject_kind_parse(input: &str) -> Result<SubjectKind, SubjectError> {
    input.parse()
}

#[test]
fn experience_field_names() {
    assert_eq!(SubjectKind::Cpp.experience_field(), "experienceTeachingC");
    assert_eq!(SubjectKind::React.experience_field(), "experienceTeachingReact");
    assert_eq!(SubjectKind::Java.experience_field(), "experienceTeachingJava");
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Property: finite amounts below the threshold hire a teacher, all
    /// others hire a director.
    #[test]
    fn prop_threshold_partitions_amounts(amount in -1.0e6f64..1.0e6, threshold in 0.0f64..1.0e5) {
        let employee = HiringPolicy::new(threshold).select(&Salary::Amount(amount));
        prop_assert_eq!(employee.is_director(), amount >= threshold);
    }

    /// Property: any label hires a director.
    #[test]
    fn prop_labels_hire_directors(label in ".*") {
        prop_assert!(create_employee(label).is_director());
    }

    /// Property: availability depends only on the subject's own field.
    #[test]
    fn prop_availability_follows_own_field(
        c in proptest::option::of(-5i64..10),
        react in proptest::option::of(-5i64..10),
        java in proptest::option::of(-5i64..10),
    ) {
        let teacher = SubjectTeacher {
            first_name: "Pat".to_string(),
            last_name: "Lee".to_string(),
            experience_teaching_c: c,
            experience_teaching_react: react,
            experience_teaching_java: java,
        };
        for kind in SubjectKind::ALL {
            let mut subject = kind.subject();
            subject.set_teacher(teacher.clone());
            let available = kind.experience_of(&teacher).is_some_and(|y| y > 0);
            prop_assert_eq!(subject.available_teacher() != NO_AVAILABLE_TEACHER, available);
        }
    }
}

//! Loader integration tests
//!
//! JSON fixture → canonical task → validation

use sas_certify_core::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", "tasks"].iter().collect()
}

#[test]
fn test_load_two_vars() {
    let task = load_task(fixtures_dir().join("two_vars.json")).expect("Failed to load task");

    assert_eq!(task.num_variables(), 2);
    assert_eq!(task.variables.value_names[0][0], "Atom at(a)");
    assert_eq!(task.init.values, vec![0, 0]);
    assert_eq!(task.goal.pairs, vec![Fact::new(0, 1)]);
    assert_eq!(task.operators.len(), 1);
    assert_eq!(task.operators[0].pre_post[0], PrePost::simple(0, Some(0), 1));
    assert!(task.metric);
    assert!(task.validate().is_ok());
}

#[test]
fn test_load_canonicalizes() {
    let task = load_task(fixtures_dir().join("with_axioms.json")).expect("Failed to load task");

    let names: Vec<&str> = task.operators.iter().map(|op| op.name.as_str()).collect();
    assert_eq!(names, vec!["set-a", "set-b"]);
    assert_eq!(task.axioms[0].condition, vec![Fact::new(0, 1)]);
    assert_eq!(task.axioms[1].condition, vec![Fact::new(1, 1)]);
    assert!(task.variables.is_derived(2));
    assert_eq!(task.max_cost(), 3);
    assert!(task.validate().is_ok());
}

#[test]
fn test_invalid_task_still_loads() {
    let task = load_task(fixtures_dir().join("empty_goal.json")).expect("Failed to load task");
    assert_eq!(task.validate(), Err(ValidationError::EmptyGoal));
}

#[test]
fn test_parse_error_names_the_file() {
    let err = load_task(fixtures_dir().join("truncated.json")).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("truncated.json"));
}

#[test]
fn test_load_directory_skips_broken_files() {
    let tasks = load_tasks(fixtures_dir()).expect("Failed to read fixture directory");
    let names: Vec<String> = tasks
        .iter()
        .filter_map(|(path, _)| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect();
    assert_eq!(names, vec!["empty_goal", "two_vars", "with_axioms"]);
}

#[test]
fn test_json_round_trip_preserves_task() {
    let task = load_task(fixtures_dir().join("with_axioms.json")).unwrap();
    let json = task.to_json().unwrap();
    assert_eq!(Task::from_json(&json).unwrap(), task);
}

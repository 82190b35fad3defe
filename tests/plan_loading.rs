// tests/plan_loading.rs

use std::io::Write;
use tempfile::NamedTempFile;
use plandag::config::load_plan;
use plandag::errors::PlanError;
use plandag::validate;
use plandag_test_utils::builders::PlanFileBuilder;

#[test]
fn test_cyclic_plan_loads_and_validator_reports_cycle() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[task.A]
duration = 2
after = ["B"]

[task.B]
duration = "1h"
after = ["A"]
"#
    )
    .unwrap();

    let plan = load_plan(file.path()).expect("structure is not checked at load time");
    let report = validate(plan.drafts());
    assert!(!report.is_valid);
    assert_eq!(report.cycles, vec![vec!["A", "B", "A"]]);
}

#[test]
fn test_invalid_duration_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[task.A]
duration = "a while"
"#
    )
    .unwrap();

    match load_plan(file.path()) {
        Err(PlanError::ConfigError(msg)) => {
            assert!(msg.contains("task 'A'"));
            assert!(msg.contains("a while"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[task.A\nduration = 1\n").unwrap();

    assert!(matches!(load_plan(file.path()), Err(PlanError::TomlError(_))));
}

#[test]
fn test_missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_plan(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(PlanError::IoError(_))));
}

#[test]
fn test_full_plan_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = plandag_test_utils::write_plan(
        dir.path(),
        r#"
[config]
hours_per_day = 8

[task.design]
title = "Design schema"
assignee = "alice"
duration = "1d"

[task.migrate]
assignee = "alice"
duration = "90m"
after = ["design"]

[task.docs]
assignee = "bob"
duration = 2
"#,
    )
    .unwrap();

    let plan = load_plan(&path).unwrap();
    let report = validate(plan.drafts());

    assert!(report.is_valid);
    assert_eq!(report.resource_conflicts.len(), 1);
    assert_eq!(
        report.execution_order,
        vec![vec!["design", "docs"], vec!["migrate"]]
    );
    assert_eq!(report.critical_path, vec!["design", "migrate"]);
    assert_eq!(report.critical_path_hours, 9.5);
}

#[test]
fn test_builder_defaults() {
    let plan = PlanFileBuilder::new()
        .hours_per_day(6.0)
        .default_duration("30m")
        .with_task("a", "1d", &[])
        .with_task("b", "2h", &["a"])
        .build();

    let hours: Vec<f64> = plan.drafts().iter().map(|t| t.duration.get()).collect();
    assert_eq!(hours, vec![6.0, 2.0]);
    assert_eq!(plan.hours_per_day(), 6.0);
}

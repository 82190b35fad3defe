// tests/scenarios.rs

mod common;

use common::{TaskDraftBuilder, init_tracing, task};
use plandag::{
    Hours, RefinementChange, analyze_refinement, estimate_critical_path, plan_execution_order,
    validate,
};

#[test]
fn chain_of_two() {
    init_tracing();
    let tasks = vec![task("T1", 4.0, &[]), task("T2", 3.0, &["T1"])];

    let report = validate(&tasks);
    assert!(report.is_valid);
    assert!(report.cycles.is_empty());

    assert_eq!(plan_execution_order(&tasks), vec![vec!["T1"], vec!["T2"]]);

    let cp = estimate_critical_path(&tasks);
    assert_eq!(cp.path, vec!["T1", "T2"]);
    assert_eq!(cp.hours, 7.0);
}

#[test]
fn mutual_dependency() {
    init_tracing();
    let tasks = vec![task("T1", 1.0, &["T2"]), task("T2", 1.0, &["T1"])];

    let report = validate(&tasks);
    assert!(!report.is_valid);
    assert_eq!(report.cycles, vec![vec!["T1", "T2", "T1"]]);
}

#[test]
fn missing_dependency() {
    init_tracing();
    let tasks = vec![
        TaskDraftBuilder::new("T1")
            .title("Draft proposal")
            .after("T99")
            .build(),
    ];

    let report = validate(&tasks);
    assert!(!report.is_valid);
    assert_eq!(
        report.invalid_references,
        vec!["T1 ('Draft proposal') depends on non-existent task T99"]
    );
}

#[test]
fn same_assignee_on_dependent_tasks() {
    init_tracing();
    let tasks = vec![
        TaskDraftBuilder::new("T1").assignee("Alice").build(),
        TaskDraftBuilder::new("T2").assignee("Alice").after("T1").build(),
    ];

    let report = validate(&tasks);
    assert!(report.is_valid);
    assert_eq!(report.resource_conflicts.len(), 1);
    let conflict = &report.resource_conflicts[0];
    assert!(conflict.contains("Alice"));
    assert!(conflict.contains("T1"));
    assert!(conflict.contains("T2"));
}

#[test]
fn parallel_levels_and_critical_path() {
    init_tracing();
    let tasks = vec![
        task("T1", 5.0, &[]),
        task("T2", 2.0, &[]),
        task("T3", 3.0, &["T1"]),
    ];

    assert_eq!(
        plan_execution_order(&tasks),
        vec![vec!["T1", "T2"], vec!["T3"]]
    );

    let cp = estimate_critical_path(&tasks);
    assert_eq!(cp.path, vec!["T1", "T3"]);
    assert_eq!(cp.hours, 8.0);
}

#[test]
fn refining_duration_of_upstream_task() {
    init_tracing();
    let tasks = vec![task("T1", 4.0, &[]), task("T2", 3.0, &["T1"])];
    let change = RefinementChange::new("T1").with_duration(Hours::new(8.0).unwrap());

    let impact = analyze_refinement(&tasks, &change);
    assert_eq!(impact.effort_delta, 4.0);
    assert_eq!(impact.affected_task_ids, vec!["T2"]);
    assert!(impact.critical_path_extended);
}

#[test]
fn dangling_and_cycle_reported_together() {
    init_tracing();
    let tasks = vec![
        task("A", 1.0, &["B", "ghost"]),
        task("B", 1.0, &["A"]),
        task("C", 1.0, &[]),
    ];

    let report = validate(&tasks);
    assert!(!report.is_valid);
    assert_eq!(report.cycles, vec![vec!["A", "B", "A"]]);
    assert_eq!(report.invalid_references.len(), 1);
    assert!(report.execution_order.is_empty());
    assert!(report.critical_path.is_empty());
}

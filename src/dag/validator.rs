// src/dag/validator.rs

//! Structural validation of a task snapshot.
//!
//! Invalid input is an expected outcome while a plan is being edited, so
//! nothing here returns an error: every problem lands in a
//! [`ValidationReport`] field and processing always continues to the end.

use tracing::{debug, info};

use crate::dag::critical_path::estimate_from_levels;
use crate::dag::cycles::{Cycle, find_cycles};
use crate::dag::graph::TaskGraph;
use crate::dag::planner::{ExecutionLevel, levels_to_ids, plan_levels};
use crate::types::{TaskDraft, TaskId};

/// Result of validating one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// True iff there are no cycles and no invalid references.
    pub is_valid: bool,
    pub cycles: Vec<Cycle>,
    /// Dangling dependencies and duplicate ids, one description each.
    pub invalid_references: Vec<String>,
    /// Same assignee on a task and one of its dependencies. Informational.
    pub resource_conflicts: Vec<String>,
    /// Only populated when `is_valid`.
    pub execution_order: Vec<ExecutionLevel>,
    /// Only populated when `is_valid`.
    pub critical_path: Vec<TaskId>,
    /// Only populated when `is_valid`.
    pub critical_path_hours: f64,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        !self.resource_conflicts.is_empty()
    }
}

pub fn validate(tasks: &[TaskDraft]) -> ValidationReport {
    let graph = TaskGraph::from_drafts(tasks);
    validate_graph(&graph)
}

pub(crate) fn validate_graph(graph: &TaskGraph<'_>) -> ValidationReport {
    let cycles = find_cycles(graph);
    let invalid_references = graph.invalid_references().to_vec();
    let resource_conflicts = find_resource_conflicts(graph);

    let is_valid = cycles.is_empty() && invalid_references.is_empty();

    let mut report = ValidationReport {
        is_valid,
        cycles,
        invalid_references,
        resource_conflicts,
        ..ValidationReport::default()
    };

    if is_valid {
        let levels = plan_levels(graph);
        let critical = estimate_from_levels(graph, &levels);
        report.execution_order = levels_to_ids(graph, &levels);
        report.critical_path = critical.path;
        report.critical_path_hours = critical.hours;
    }

    info!(
        tasks = graph.len(),
        is_valid = report.is_valid,
        cycles = report.cycles.len(),
        invalid_references = report.invalid_references.len(),
        resource_conflicts = report.resource_conflicts.len(),
        "validated task plan"
    );

    report
}

fn find_resource_conflicts(graph: &TaskGraph<'_>) -> Vec<String> {
    let mut conflicts = Vec::new();

    for node in graph.nodes() {
        let task = graph.task(node);
        let Some(assignee) = task.effective_assignee() else {
            continue;
        };

        for &dep in graph.dependencies(node) {
            if graph.task(dep).effective_assignee() == Some(assignee) {
                debug!(task = %task.id, dep = graph.id(dep), assignee, "resource conflict");
                conflicts.push(format!(
                    "{assignee} is assigned to both {} and its dependency {}",
                    task.id,
                    graph.id(dep)
                ));
            }
        }
    }

    conflicts
}

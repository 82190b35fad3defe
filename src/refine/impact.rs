// src/refine/impact.rs

//! Impact analysis of a single-task refinement.
//!
//! The change is applied to a copy of the snapshot, the copy is validated
//! from scratch, and the timeline is compared against the original. When
//! both snapshots are valid the critical path is recomputed on each side and
//! the delta is exact. Otherwise the delta falls back to the task's own
//! effort change, flagged with `timeline_exact = false`.

use tracing::{debug, info, warn};

use crate::dag::cycles::Cycle;
use crate::dag::graph::TaskGraph;
use crate::dag::validator::{validate, validate_graph};
use crate::refine::change::RefinementChange;
use crate::types::{HOURS_EPSILON, TaskDraft, TaskId};

/// Outcome of analyzing one [`RefinementChange`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactReport {
    pub task_id: TaskId,
    /// Validity of the post-change snapshot; false for an unknown task.
    pub is_valid: bool,
    /// Every task downstream of the changed one, in snapshot order.
    pub affected_task_ids: Vec<TaskId>,
    /// Direct dependents that share the task's new assignee.
    pub potential_conflicts: Vec<TaskId>,
    /// New duration minus old duration, in hours.
    pub effort_delta: f64,
    pub critical_path_extended: bool,
    pub critical_path_delta: f64,
    pub original_critical_path_hours: f64,
    /// `None` when the post-change snapshot is invalid.
    pub new_critical_path_hours: Option<f64>,
    /// False when the delta is the effort-change approximation.
    pub timeline_exact: bool,
    pub cycles: Vec<Cycle>,
    pub invalid_references: Vec<String>,
    pub resource_conflicts: Vec<String>,
    pub warnings: Vec<String>,
}

impl ImpactReport {
    fn unknown_task(task_id: &str) -> Self {
        Self {
            task_id: task_id.to_string(),
            is_valid: false,
            warnings: vec![format!("task {task_id} does not exist in the plan")],
            ..Self::default()
        }
    }
}

/// Analyze the effect of `change` on `tasks` without modifying `tasks`.
pub fn analyze_refinement(tasks: &[TaskDraft], change: &RefinementChange) -> ImpactReport {
    let Some(pos) = tasks.iter().position(|t| t.id == change.task_id) else {
        warn!(task = %change.task_id, "refinement targets unknown task");
        return ImpactReport::unknown_task(&change.task_id);
    };

    let original = &tasks[pos];
    let refined = change.apply_to(original);

    let mut updated = tasks.to_vec();
    updated[pos] = refined.clone();

    let before = validate(tasks);
    let graph = TaskGraph::from_drafts(&updated);
    let after = validate_graph(&graph);

    let affected_task_ids = graph.transitive_dependents(&change.task_id);

    let potential_conflicts = match (&change.assignee, refined.effective_assignee()) {
        (Some(_), Some(assignee)) => graph
            .dependents_of(&change.task_id)
            .into_iter()
            .filter(|dep| {
                graph
                    .node(dep)
                    .is_some_and(|n| graph.task(n).effective_assignee() == Some(assignee))
            })
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let effort_delta = refined.duration.get() - original.duration.get();

    let mut warnings = Vec::new();
    if change.is_empty() {
        warnings.push(format!("refinement of {} changes nothing", change.task_id));
    }

    let (critical_path_extended, critical_path_delta, timeline_exact) =
        if before.is_valid && after.is_valid {
            let delta = after.critical_path_hours - before.critical_path_hours;
            let delta = if delta.abs() < HOURS_EPSILON { 0.0 } else { delta };
            (delta > 0.0, delta, true)
        } else {
            if !before.is_valid {
                warnings.push(
                    "original plan is invalid; timeline delta is approximate".to_string(),
                );
            }
            let extended = effort_delta > HOURS_EPSILON && !affected_task_ids.is_empty();
            let delta = if extended { effort_delta } else { 0.0 };
            (extended, delta, false)
        };

    debug!(
        task = %change.task_id,
        effort_delta,
        critical_path_delta,
        timeline_exact,
        "computed refinement timeline impact"
    );
    info!(
        task = %change.task_id,
        affected = affected_task_ids.len(),
        is_valid = after.is_valid,
        critical_path_extended,
        "analyzed refinement"
    );

    ImpactReport {
        task_id: change.task_id.clone(),
        is_valid: after.is_valid,
        affected_task_ids,
        potential_conflicts,
        effort_delta,
        critical_path_extended,
        critical_path_delta,
        original_critical_path_hours: before.critical_path_hours,
        new_critical_path_hours: after.is_valid.then_some(after.critical_path_hours),
        timeline_exact,
        cycles: after.cycles,
        invalid_references: after.invalid_references,
        resource_conflicts: after.resource_conflicts,
        warnings,
    }
}

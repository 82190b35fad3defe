// src/dag/critical_path.rs

//! Critical path estimation over planned execution levels.
//!
//! A forward pass computes earliest start/finish per task, the final task
//! with the latest finish ends the critical path, and a backward trace follows the
//! latest-finishing dependency until a task with no dependencies is reached.
//! A second backward pass over the levels computes latest start/finish and
//! slack against the project end.
//!
//! Ties on finish time (for the terminal task and during the trace) go to the
//! lexicographically smallest task id.

use petgraph::graph::NodeIndex;
use tracing::{debug, warn};

use crate::dag::graph::TaskGraph;
use crate::dag::planner::plan_levels;
use crate::types::{HOURS_EPSILON, TaskDraft, TaskId};

/// Timing of one task within the plan, in hours from project start.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub task_id: TaskId,
    pub earliest_start: f64,
    pub earliest_finish: f64,
    pub latest_start: f64,
    pub latest_finish: f64,
    /// How far the task can slip without moving the project end.
    pub slack: f64,
}

impl ScheduleEntry {
    pub fn is_critical(&self) -> bool {
        self.slack <= HOURS_EPSILON
    }
}

/// Longest duration-weighted path through the plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriticalPath {
    pub path: Vec<TaskId>,
    pub hours: f64,
    /// Per-task timing, in snapshot order.
    pub schedule: Vec<ScheduleEntry>,
}

impl CriticalPath {
    pub fn entry(&self, task_id: &str) -> Option<&ScheduleEntry> {
        self.schedule.iter().find(|e| e.task_id == task_id)
    }
}

/// Estimate the critical path of a snapshot.
///
/// An empty or cyclic snapshot yields an empty path and zero hours.
pub fn estimate_critical_path(tasks: &[TaskDraft]) -> CriticalPath {
    let graph = TaskGraph::from_drafts(tasks);
    let levels = plan_levels(&graph);
    if levels.is_empty() && !graph.is_empty() {
        warn!("cannot estimate critical path of a cyclic plan");
        return CriticalPath::default();
    }
    estimate_from_levels(&graph, &levels)
}

/// Run the forward pass, trace and backward pass over already-planned levels.
pub fn estimate_from_levels(graph: &TaskGraph<'_>, levels: &[Vec<NodeIndex>]) -> CriticalPath {
    if graph.is_empty() || levels.is_empty() {
        return CriticalPath::default();
    }

    let duration = |n: NodeIndex| graph.task(n).duration.get();

    let mut earliest_start = vec![0.0_f64; graph.len()];
    let mut earliest_finish = vec![0.0_f64; graph.len()];

    for &node in levels.iter().flatten() {
        let start = graph
            .dependencies(node)
            .iter()
            .map(|d| earliest_finish[d.index()])
            .fold(0.0_f64, f64::max);
        earliest_start[node.index()] = start;
        earliest_finish[node.index()] = start + duration(node);
    }

    // With non-negative durations the latest finish is always reached at a
    // task nothing depends on, so only those can end the path.
    let sinks = graph.nodes().filter(|&n| graph.dependents(n).is_empty());
    let Some(terminal) = latest_finishing(graph, sinks, &earliest_finish) else {
        return CriticalPath::default();
    };
    let hours = earliest_finish[terminal.index()];

    let mut trace = vec![terminal];
    let mut current = terminal;
    while let Some(prev) = latest_finishing(
        graph,
        graph.dependencies(current).iter().copied(),
        &earliest_finish,
    ) {
        trace.push(prev);
        current = prev;
    }
    trace.reverse();

    let mut latest_finish = vec![hours; graph.len()];
    let mut latest_start = vec![hours; graph.len()];
    for &node in levels.iter().rev().flat_map(|level| level.iter().rev()) {
        let finish = graph
            .dependents(node)
            .iter()
            .map(|d| latest_start[d.index()])
            .fold(hours, f64::min);
        latest_finish[node.index()] = finish;
        latest_start[node.index()] = finish - duration(node);
    }

    let schedule = graph
        .nodes()
        .map(|n| {
            let i = n.index();
            // Forward and backward sums round differently.
            let slack = latest_start[i] - earliest_start[i];
            let slack = if slack < HOURS_EPSILON { 0.0 } else { slack };
            ScheduleEntry {
                task_id: graph.id(n).to_string(),
                earliest_start: earliest_start[i],
                earliest_finish: earliest_finish[i],
                latest_start: latest_start[i],
                latest_finish: latest_finish[i],
                slack,
            }
        })
        .collect();

    let path: Vec<TaskId> = trace.iter().map(|&n| graph.id(n).to_string()).collect();
    debug!(?path, hours, "estimated critical path");

    CriticalPath {
        path,
        hours,
        schedule,
    }
}

/// Pick the candidate with the latest earliest-finish; ties go to the
/// smallest id.
fn latest_finishing(
    graph: &TaskGraph<'_>,
    candidates: impl Iterator<Item = NodeIndex>,
    earliest_finish: &[f64],
) -> Option<NodeIndex> {
    candidates.fold(None, |best: Option<NodeIndex>, node| match best {
        None => Some(node),
        Some(b) => {
            let (best_finish, finish) = (earliest_finish[b.index()], earliest_finish[node.index()]);
            if finish > best_finish || (finish == best_finish && graph.id(node) < graph.id(b)) {
                Some(node)
            } else {
                Some(b)
            }
        }
    })
}

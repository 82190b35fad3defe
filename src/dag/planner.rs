// src/dag/planner.rs

//! Execution order planning (Kahn's algorithm, grouped into levels).

use petgraph::graph::NodeIndex;
use tracing::{debug, warn};

use crate::dag::graph::TaskGraph;
use crate::types::{TaskDraft, TaskId};

/// One wave of tasks that may run concurrently.
///
/// Only set membership is meaningful; tasks are listed in snapshot order.
pub type ExecutionLevel = Vec<TaskId>;

/// Group the graph into levels such that every task's dependencies are all in
/// earlier levels.
///
/// Returns an empty plan if the graph contains a cycle. Dangling dependencies
/// are not part of the graph and therefore never hold a task back.
pub fn plan_levels(graph: &TaskGraph<'_>) -> Vec<Vec<NodeIndex>> {
    let mut remaining: Vec<usize> = graph
        .nodes()
        .map(|n| graph.dependencies(n).len())
        .collect();

    let mut current: Vec<NodeIndex> = graph.nodes().filter(|n| remaining[n.index()] == 0).collect();
    let mut levels: Vec<Vec<NodeIndex>> = Vec::new();
    let mut scheduled = 0usize;

    while !current.is_empty() {
        scheduled += current.len();

        let mut next = Vec::new();
        for &node in &current {
            for dependent in graph.dependents(node) {
                let count = &mut remaining[dependent.index()];
                *count = count.saturating_sub(1);
                if *count == 0 {
                    next.push(dependent);
                }
            }
        }
        next.sort_unstable();

        levels.push(std::mem::replace(&mut current, next));
    }

    if scheduled != graph.len() {
        warn!(
            scheduled,
            total = graph.len(),
            "execution planning stalled on a dependency cycle; returning empty plan"
        );
        return Vec::new();
    }

    debug!(levels = levels.len(), tasks = scheduled, "planned execution order");
    levels
}

/// Plan the execution order of a snapshot.
///
/// Callers are expected to have validated the snapshot first; a cyclic
/// snapshot yields an empty result.
pub fn plan_execution_order(tasks: &[TaskDraft]) -> Vec<ExecutionLevel> {
    let graph = TaskGraph::from_drafts(tasks);
    levels_to_ids(&graph, &plan_levels(&graph))
}

pub(crate) fn levels_to_ids(graph: &TaskGraph<'_>, levels: &[Vec<NodeIndex>]) -> Vec<ExecutionLevel> {
    levels
        .iter()
        .map(|level| level.iter().map(|&n| graph.id(n).to_string()).collect())
        .collect()
}

// src/dag/cycles.rs

//! Cycle detection over a [`TaskGraph`].
//!
//! Depth-first search along dependency edges with an explicit stack of
//! `(node, next dependency position)` frames, so pathological inputs cannot
//! exhaust the call stack. Each back-edge to a node on the current path
//! yields one cycle.

use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::types::TaskId;

/// Closed loop of task ids, e.g. `["a", "b", "c", "a"]`.
///
/// Always starts (and ends) at the lexicographically smallest id in the loop.
pub type Cycle = Vec<TaskId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Find cycles in the graph, deduplicated up to rotation.
pub fn find_cycles(graph: &TaskGraph<'_>) -> Vec<Cycle> {
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut stack: Vec<(NodeIndex, usize)> = Vec::new();
    let mut cycles: Vec<Cycle> = Vec::new();

    for root in graph.nodes() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }

        marks[root.index()] = Mark::OnPath;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let deps = graph.dependencies(node);

            if frame.1 >= deps.len() {
                marks[node.index()] = Mark::Done;
                stack.pop();
                continue;
            }

            let next = deps[frame.1];
            frame.1 += 1;

            match marks[next.index()] {
                Mark::Unvisited => {
                    marks[next.index()] = Mark::OnPath;
                    stack.push((next, 0));
                }
                Mark::OnPath => {
                    if let Some(start) = stack.iter().position(|&(n, _)| n == next) {
                        let members: Vec<&str> =
                            stack[start..].iter().map(|&(n, _)| graph.id(n)).collect();
                        let cycle = canonicalize(&members);
                        if !cycles.contains(&cycle) {
                            debug!(?cycle, "found dependency cycle");
                            cycles.push(cycle);
                        }
                    }
                }
                Mark::Done => {}
            }
        }
    }

    cycles
}

/// Rotate an open loop so it starts at its smallest id, then close it.
fn canonicalize(members: &[&str]) -> Cycle {
    let start = members
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let mut cycle: Cycle = members[start..]
        .iter()
        .chain(members[..start].iter())
        .map(|s| s.to_string())
        .collect();
    if let Some(first) = cycle.first().cloned() {
        cycle.push(first);
    }
    cycle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskDraft;

    fn cycles_of(drafts: &[TaskDraft]) -> Vec<Cycle> {
        find_cycles(&TaskGraph::from_drafts(drafts))
    }

    #[test]
    fn two_node_cycle_starts_at_smallest_id() {
        let d = vec![
            TaskDraft::new("T2", "b").after("T1"),
            TaskDraft::new("T1", "a").after("T2"),
        ];
        assert_eq!(cycles_of(&d), vec![vec!["T1", "T2", "T1"]]);
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let d = vec![TaskDraft::new("A", "a").after("A")];
        assert_eq!(cycles_of(&d), vec![vec!["A", "A"]]);
    }

    #[test]
    fn rotations_are_reported_once() {
        // a -> b -> c -> a, searched from every node.
        let d = vec![
            TaskDraft::new("b", "").after("c"),
            TaskDraft::new("c", "").after("a"),
            TaskDraft::new("a", "").after("b"),
        ];
        assert_eq!(cycles_of(&d), vec![vec!["a", "b", "c", "a"]]);
    }

    #[test]
    fn dag_has_no_cycles() {
        let d = vec![
            TaskDraft::new("A", ""),
            TaskDraft::new("B", "").after("A"),
            TaskDraft::new("C", "").after("A").after("B"),
        ];
        assert!(cycles_of(&d).is_empty());
    }

    #[test]
    fn separate_loops_are_both_found() {
        let d = vec![
            TaskDraft::new("A", "").after("B"),
            TaskDraft::new("B", "").after("A"),
            TaskDraft::new("X", "").after("Y"),
            TaskDraft::new("Y", "").after("X"),
        ];
        assert_eq!(
            cycles_of(&d),
            vec![vec!["A", "B", "A"], vec!["X", "Y", "X"]]
        );
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 50_000;
        let mut d: Vec<TaskDraft> = (0..n)
            .map(|i| {
                let t = TaskDraft::new(format!("t{i:05}"), "");
                if i + 1 < n { t.after(format!("t{:05}", i + 1)) } else { t }
            })
            .collect();
        assert!(cycles_of(&d).is_empty());

        d[n - 1] = TaskDraft::new(format!("t{:05}", n - 1), "").after("t00000");
        let cycles = cycles_of(&d);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), n + 1);
        assert_eq!(cycles[0][0], "t00000");
    }
}

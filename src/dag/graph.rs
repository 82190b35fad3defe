// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use tracing::debug;

use crate::types::{TaskDraft, TaskId};

/// In-memory dependency graph built from one snapshot of task drafts.
///
/// Edge direction is dep -> dependent, so for
///
/// ```toml
/// [task.B]
/// after = ["A"]
/// ```
///
/// we add edge A -> B.
///
/// Node indices follow snapshot order (first occurrence of each id), which is
/// what every traversal in this crate uses for deterministic output. Dangling
/// and duplicate entries never make it into the graph; they are collected in
/// [`TaskGraph::invalid_references`] instead.
#[derive(Debug, Clone)]
pub struct TaskGraph<'a> {
    tasks: Vec<&'a TaskDraft>,
    index: HashMap<&'a str, NodeIndex>,
    graph: DiGraph<TaskId, ()>,
    /// Direct, deduplicated, resolvable dependencies per node, in the order
    /// the draft lists them.
    deps: Vec<Vec<NodeIndex>>,
    invalid_references: Vec<String>,
}

impl<'a> TaskGraph<'a> {
    pub fn from_drafts(drafts: &'a [TaskDraft]) -> Self {
        let mut tasks: Vec<&'a TaskDraft> = Vec::with_capacity(drafts.len());
        let mut index: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(drafts.len());
        let mut graph: DiGraph<TaskId, ()> = DiGraph::with_capacity(drafts.len(), 0);
        let mut invalid_references = Vec::new();

        // First pass: one node per distinct id.
        for draft in drafts {
            if index.contains_key(draft.id.as_str()) {
                invalid_references.push(format!(
                    "duplicate task id {} ('{}')",
                    draft.id, draft.title
                ));
                continue;
            }
            let node = graph.add_node(draft.id.clone());
            index.insert(draft.id.as_str(), node);
            tasks.push(draft);
        }

        // Second pass: wire up edges, reporting every dangling reference.
        let mut deps = Vec::with_capacity(tasks.len());
        for (pos, draft) in tasks.iter().enumerate() {
            let node = NodeIndex::new(pos);
            let mut seen: HashSet<&str> = HashSet::new();
            let mut resolved = Vec::new();

            for dep in &draft.dependencies {
                if !seen.insert(dep.as_str()) {
                    continue;
                }
                match index.get(dep.as_str()) {
                    Some(&dep_node) => {
                        graph.add_edge(dep_node, node, ());
                        resolved.push(dep_node);
                    }
                    None => invalid_references.push(format!(
                        "{} ('{}') depends on non-existent task {}",
                        draft.id, draft.title, dep
                    )),
                }
            }
            deps.push(resolved);
        }

        debug!(
            tasks = tasks.len(),
            edges = graph.edge_count(),
            invalid = invalid_references.len(),
            "built task graph"
        );

        Self {
            tasks,
            index,
            graph,
            deps,
            invalid_references,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All nodes in snapshot order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + use<> {
        (0..self.tasks.len()).map(NodeIndex::new)
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn task(&self, node: NodeIndex) -> &'a TaskDraft {
        self.tasks[node.index()]
    }

    pub fn id(&self, node: NodeIndex) -> &'a str {
        self.tasks[node.index()].id.as_str()
    }

    /// Direct dependencies of a node (resolvable ones only).
    pub fn dependencies(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.deps[node.index()]
    }

    /// Direct dependencies of a task by id. Unknown ids yield an empty list.
    pub fn dependencies_of(&self, id: &str) -> Vec<&'a str> {
        match self.node(id) {
            Some(node) => self.deps[node.index()].iter().map(|&d| self.id(d)).collect(),
            None => Vec::new(),
        }
    }

    /// Direct dependents of a node, in snapshot order.
    pub fn dependents(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Direct dependents of a task by id, in snapshot order.
    pub fn dependents_of(&self, id: &str) -> Vec<&'a str> {
        match self.node(id) {
            Some(node) => self.dependents(node).into_iter().map(|d| self.id(d)).collect(),
            None => Vec::new(),
        }
    }

    /// Every task downstream of `id`, excluding `id` itself, in snapshot order.
    pub fn transitive_dependents(&self, id: &str) -> Vec<TaskId> {
        let Some(start) = self.node(id) else {
            return Vec::new();
        };

        let mut bfs = Bfs::new(&self.graph, start);
        let mut reached = Vec::new();
        while let Some(node) = bfs.next(&self.graph) {
            if node != start {
                reached.push(node);
            }
        }
        reached.sort_unstable();
        reached.into_iter().map(|n| self.id(n).to_string()).collect()
    }

    /// Dangling and duplicate-id problems found while building the graph.
    pub fn invalid_references(&self) -> &[String] {
        &self.invalid_references
    }
}

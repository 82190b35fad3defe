// src/refine/change.rs

use crate::types::{Hours, TaskDraft, TaskId, normalize_assignee};

/// A proposed edit to a single task.
///
/// Fields left as `None` are not changed. Setting `assignee` to an empty
/// string or `"unassigned"` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefinementChange {
    pub task_id: TaskId,
    pub title: Option<String>,
    pub duration: Option<Hours>,
    pub assignee: Option<String>,
    pub dependencies: Option<Vec<TaskId>>,
}

impl RefinementChange {
    pub fn new(task_id: impl Into<TaskId>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration(mut self, duration: Hours) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        self.dependencies = Some(deps.into_iter().map(Into::into).collect());
        self
    }

    /// True if the change does not touch any field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.duration.is_none()
            && self.assignee.is_none()
            && self.dependencies.is_none()
    }

    /// Produce an edited copy of `task`; `task` itself is left untouched.
    pub fn apply_to(&self, task: &TaskDraft) -> TaskDraft {
        let mut edited = task.clone();
        if let Some(title) = &self.title {
            edited.title = title.clone();
        }
        if let Some(duration) = self.duration {
            edited.duration = duration;
        }
        if let Some(assignee) = &self.assignee {
            edited.assignee = normalize_assignee(Some(assignee)).map(str::to_string);
        }
        if let Some(deps) = &self.dependencies {
            edited.dependencies = deps.clone();
        }
        edited
    }
}

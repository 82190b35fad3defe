#![allow(dead_code)]

use std::collections::BTreeMap;

use plandag::config::{ConfigSection, DurationValue, PlanFile, RawPlanFile, TaskConfig};
use plandag::{Hours, TaskDraft};

/// Builder for `TaskDraft` to keep test snapshots short.
pub struct TaskDraftBuilder {
    task: TaskDraft,
}

impl TaskDraftBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: TaskDraft::new(id, format!("task {id}")),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.task.duration = Hours::new(hours).expect("test durations are non-negative");
        self
    }

    pub fn assignee(mut self, who: &str) -> Self {
        self.task.assignee = Some(who.to_string());
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskDraft {
        self.task
    }
}

/// Shorthand for a task with a duration and dependency list.
pub fn task(id: &str, hours: f64, deps: &[&str]) -> TaskDraft {
    deps.iter()
        .fold(TaskDraftBuilder::new(id).hours(hours), |b, d| b.after(d))
        .build()
}

/// Builder for `PlanFile` to simplify config-layer test setup.
pub struct PlanFileBuilder {
    raw: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawPlanFile {
                config: ConfigSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn hours_per_day(mut self, hours: f64) -> Self {
        self.raw.config.hours_per_day = hours;
        self
    }

    pub fn default_duration(mut self, duration: &str) -> Self {
        self.raw.config.default_duration = Some(DurationValue::Text(duration.to_string()));
        self
    }

    pub fn with_task(mut self, id: &str, duration: &str, after: &[&str]) -> Self {
        self.raw.task.insert(
            id.to_string(),
            TaskConfig {
                title: None,
                assignee: None,
                duration: Some(DurationValue::Text(duration.to_string())),
                after: after.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.raw).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::TaskDraft;

/// Plan file as read from TOML, before any semantic checks.
///
/// ```toml
/// [config]
/// hours_per_day = 8
/// default_duration = "1h"
///
/// [task.T1]
/// title = "Design schema"
/// assignee = "alice"
/// duration = 4
///
/// [task.T2]
/// duration = "90m"
/// after = ["T1"]
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<id>]`, keyed by task id.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Length of a working day, used to convert `"2d"` style durations.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,

    /// Duration for tasks that omit `duration`. Defaults to zero.
    #[serde(default)]
    pub default_duration: Option<DurationValue>,
}

fn default_hours_per_day() -> f64 {
    8.0
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            default_duration: None,
        }
    }
}

/// A duration as written in the plan file: a bare number of hours or a
/// string with a unit (`"90m"`, `"1.5h"`, `"2d"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Hours(f64),
    Text(String),
}

/// `[task.<id>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    /// Human-readable label; defaults to the task id.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub assignee: Option<String>,

    #[serde(default)]
    pub duration: Option<DurationValue>,

    /// Dependency list: this task waits for all tasks listed here.
    #[serde(default)]
    pub after: Vec<String>,
}

/// A plan file whose settings and durations have been checked.
///
/// Dependency structure is deliberately *not* checked here: cycles and
/// dangling references are reported by [`crate::dag::validate`].
#[derive(Debug, Clone)]
pub struct PlanFile {
    hours_per_day: f64,
    drafts: Vec<TaskDraft>,
}

impl PlanFile {
    pub(crate) fn new_unchecked(hours_per_day: f64, drafts: Vec<TaskDraft>) -> Self {
        Self {
            hours_per_day,
            drafts,
        }
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    /// Tasks in id order.
    pub fn drafts(&self) -> &[TaskDraft] {
        &self.drafts
    }
}

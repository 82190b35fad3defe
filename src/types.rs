// src/types.rs

//! Core value types shared by the graph, planner and refinement code.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{PlanError, Result};

/// Canonical task identifier type used throughout the engine.
pub type TaskId = String;

/// Differences below this many hours are float noise, not a timeline shift.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Non-negative, finite effort estimate in hours.
///
/// Zero is a valid value (an instantaneous task).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Hours(f64);

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?|\.\d+)\s*([a-zA-Z]*)\s*$").expect("duration regex is valid")
});

impl Hours {
    pub const ZERO: Hours = Hours(0.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(PlanError::InvalidDuration(format!(
                "{value} is not a finite number of hours"
            )));
        }
        if value < 0.0 {
            return Err(PlanError::InvalidDuration(format!(
                "{value} is negative; durations must be >= 0"
            )));
        }
        Ok(Hours(value))
    }

    /// Parse a duration string such as `"4"`, `"1.5h"`, `"90m"` or `"2d"`.
    ///
    /// A bare number is taken as hours. Days are converted using
    /// `hours_per_day`.
    pub fn parse(s: &str, hours_per_day: f64) -> Result<Self> {
        let caps = DURATION_RE.captures(s).ok_or_else(|| {
            PlanError::InvalidDuration(format!(
                "cannot parse {s:?} (expected e.g. \"4\", \"1.5h\", \"90m\", \"2d\")"
            ))
        })?;

        let amount: f64 = caps[1]
            .parse()
            .map_err(|_| PlanError::InvalidDuration(format!("cannot parse number in {s:?}")))?;

        let hours = match caps[2].to_lowercase().as_str() {
            "" | "h" | "hr" | "hrs" | "hour" | "hours" => amount,
            "m" | "min" | "mins" | "minute" | "minutes" => amount / 60.0,
            "d" | "day" | "days" => amount * hours_per_day,
            other => {
                return Err(PlanError::InvalidDuration(format!(
                    "unknown unit {other:?} in {s:?} (expected m, h or d)"
                )));
            }
        };

        Hours::new(hours)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}

/// The unit of planning: one proposed task with its dependencies and effort.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub id: TaskId,
    /// Human-readable label; only used in diagnostics.
    pub title: String,
    /// Responsible party. `None`, empty and `"unassigned"` all mean nobody.
    pub assignee: Option<String>,
    /// Ids this task waits on. Duplicates are ignored by the graph.
    pub dependencies: Vec<TaskId>,
    pub duration: Hours,
}

impl TaskDraft {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            assignee: None,
            dependencies: Vec::new(),
            duration: Hours::ZERO,
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_duration(mut self, duration: Hours) -> Self {
        self.duration = duration;
        self
    }

    pub fn after(mut self, dep: impl Into<TaskId>) -> Self {
        self.dependencies.push(dep.into());
        self
    }

    /// The assignee, or `None` if the task is effectively unassigned.
    pub fn effective_assignee(&self) -> Option<&str> {
        normalize_assignee(self.assignee.as_deref())
    }
}

pub(crate) fn normalize_assignee(assignee: Option<&str>) -> Option<&str> {
    let trimmed = assignee?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unassigned") {
        None
    } else {
        Some(trimmed)
    }
}

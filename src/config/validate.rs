// src/config/validate.rs

use tracing::debug;

use crate::config::model::{DurationValue, PlanFile, RawPlanFile};
use crate::errors::{PlanError, Result};
use crate::types::{Hours, TaskDraft};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::PlanError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_tasks(&raw)?;
        validate_global_config(&raw)?;
        let drafts = build_drafts(&raw)?;
        Ok(PlanFile::new_unchecked(raw.config.hours_per_day, drafts))
    }
}

fn ensure_has_tasks(cfg: &RawPlanFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(PlanError::ConfigError(
            "plan must contain at least one [task.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawPlanFile) -> Result<()> {
    let hpd = cfg.config.hours_per_day;
    if !hpd.is_finite() || hpd <= 0.0 {
        return Err(PlanError::ConfigError(format!(
            "[config].hours_per_day must be > 0 (got {hpd})"
        )));
    }
    Ok(())
}

fn build_drafts(cfg: &RawPlanFile) -> Result<Vec<TaskDraft>> {
    let hpd = cfg.config.hours_per_day;

    let default_duration = match &cfg.config.default_duration {
        Some(value) => resolve_duration(value, hpd).map_err(|e| {
            PlanError::ConfigError(format!("[config].default_duration: {e}"))
        })?,
        None => Hours::ZERO,
    };

    let mut drafts = Vec::with_capacity(cfg.task.len());
    for (id, task) in cfg.task.iter() {
        if id.trim().is_empty() {
            return Err(PlanError::ConfigError(
                "task ids must not be empty".to_string(),
            ));
        }

        let duration = match &task.duration {
            Some(value) => resolve_duration(value, hpd)
                .map_err(|e| PlanError::ConfigError(format!("task '{id}': {e}")))?,
            None => default_duration,
        };

        drafts.push(TaskDraft {
            id: id.clone(),
            title: task.title.clone().unwrap_or_else(|| id.clone()),
            assignee: task.assignee.clone(),
            dependencies: task.after.clone(),
            duration,
        });
    }

    debug!(tasks = drafts.len(), hours_per_day = hpd, "built task drafts from plan file");
    Ok(drafts)
}

fn resolve_duration(value: &DurationValue, hours_per_day: f64) -> Result<Hours> {
    match value {
        DurationValue::Hours(h) => Hours::new(*h),
        DurationValue::Text(s) => Hours::parse(s, hours_per_day),
    }
}

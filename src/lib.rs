// src/lib.rs

//! Task dependency graph and critical-path scheduling engine.
//!
//! The engine answers three questions about a snapshot of [`TaskDraft`]s:
//! is the dependency graph structurally valid ([`validate`]), in what order
//! can the tasks run ([`plan_execution_order`], [`estimate_critical_path`]),
//! and what does editing one task do to the rest of the plan
//! ([`analyze_refinement`]). Each call is a pure, synchronous function of its
//! input.

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod refine;
pub mod report;
pub mod types;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::load_plan;
use crate::errors::PlanError;

pub use crate::dag::{
    CriticalPath, Cycle, ExecutionLevel, ScheduleEntry, ValidationReport, estimate_critical_path,
    plan_execution_order, validate,
};
pub use crate::refine::{ImpactReport, RefinementChange, analyze_refinement};
pub use crate::types::{Hours, TaskDraft, TaskId};

/// High-level entry point used by `main.rs`.
///
/// Loads the plan file, runs the requested analysis and prints the report to
/// stdout. An invalid plan is reported and then turned into an error so the
/// process exits non-zero.
pub fn run(args: CliArgs) -> Result<()> {
    let plan_path = args.plan_path();
    let plan = load_plan(&plan_path)?;
    info!(plan = %plan_path.display(), tasks = plan.drafts().len(), "loaded plan");

    match &args.command {
        Command::Check => {
            let report = validate(plan.drafts());
            print!("{}", report::render_validation(&report));
            ensure_valid(&report)?;
        }
        Command::Order => {
            let report = validate(plan.drafts());
            ensure_reported_valid(&report)?;
            print!("{}", report::render_order(&report.execution_order));
        }
        Command::CriticalPath => {
            let report = validate(plan.drafts());
            ensure_reported_valid(&report)?;
            let cp = estimate_critical_path(plan.drafts());
            print!("{}", report::render_critical_path(&cp));
        }
        Command::Refine(refine) => {
            if !plan.drafts().iter().any(|t| t.id == refine.task) {
                return Err(PlanError::TaskNotFound(refine.task.clone()).into());
            }
            let change = refine.to_change(plan.hours_per_day())?;
            debug!(?change, "analyzing refinement");
            let impact = analyze_refinement(plan.drafts(), &change);
            print!("{}", report::render_impact(&impact));
        }
    }

    Ok(())
}

fn ensure_valid(report: &ValidationReport) -> std::result::Result<(), PlanError> {
    if report.is_valid {
        Ok(())
    } else {
        Err(PlanError::InvalidPlan {
            cycles: report.cycles.len(),
            invalid_references: report.invalid_references.len(),
        })
    }
}

/// Like [`ensure_valid`], but prints the full report first when the plan is
/// invalid, since `order` and `critical-path` have nothing else to show.
fn ensure_reported_valid(report: &ValidationReport) -> std::result::Result<(), PlanError> {
    if !report.is_valid {
        print!("{}", report::render_validation(report));
    }
    ensure_valid(report)
}
